//! Layered run settings.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file,
//! `ERPSEED_`-prefixed environment variables, then command-line flags (applied
//! by [`crate::args::Cli::apply`]). Nested keys use `__` in variable names,
//! e.g. `ERPSEED_GENERATOR__SEED=7` or `ERPSEED_OUTPUT__OUTPUT_DIR=/tmp/seeds`.

use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use erpseed_core::GeneratorConfig;
use erpseed_infra::OutputConfig;

pub const ENV_PREFIX: &str = "ERPSEED";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

impl Settings {
    /// Load settings from `file` (when given) and the process environment.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(file, None)
    }

    /// Like [`Settings::load`], but reads variables from `env` instead of the
    /// process environment when it is `Some`.
    pub fn load_from(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder
            .build()
            .context("failed to read settings")?
            .try_deserialize()
            .context("failed to deserialise settings")?;

        tracing::debug!(?file, seed = settings.generator.seed, "settings loaded");
        Ok(settings)
    }
}

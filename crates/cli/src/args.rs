//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use erpseed_observability::LogFormat;

use crate::settings::Settings;

#[derive(Parser, Debug, Default)]
#[command(name = "erpseed", version, about = "Generate seeded ERP fixture tables as CSV")]
pub struct Cli {
    /// Path to a TOML settings file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed of the random stream; the same seed gives the same files.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of customers.
    #[arg(long)]
    pub customers: Option<u64>,

    /// Number of materials.
    #[arg(long)]
    pub materials: Option<u64>,

    /// Number of sales orders.
    #[arg(long)]
    pub orders: Option<u64>,

    #[arg(long)]
    pub min_items: Option<u64>,

    #[arg(long)]
    pub max_items: Option<u64>,

    /// Directory the CSV files are written to.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name prefix (`{prefix}_{table}.csv`).
    #[arg(long)]
    pub file_prefix: Option<String>,

    #[arg(long)]
    pub delimiter: Option<char>,

    /// Only reference master data already loaded when an order is loaded.
    #[arg(long)]
    pub respect_load_order: bool,

    /// Generate and check everything, but write nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Do not write `manifest.json`.
    #[arg(long)]
    pub no_manifest: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    /// Apply flags on top of the loaded settings. Flags that were not given
    /// leave the setting untouched.
    pub fn apply(&self, settings: &mut Settings) {
        let generator = &mut settings.generator;
        if let Some(seed) = self.seed {
            generator.seed = seed;
        }
        if let Some(customers) = self.customers {
            generator.customers = customers;
        }
        if let Some(materials) = self.materials {
            generator.materials = materials;
        }
        if let Some(orders) = self.orders {
            generator.orders = orders;
        }
        if let Some(min_items) = self.min_items {
            generator.min_items = min_items;
        }
        if let Some(max_items) = self.max_items {
            generator.max_items = max_items;
        }
        if self.respect_load_order {
            generator.respect_load_order = true;
        }

        let output = &mut settings.output;
        if let Some(dir) = &self.output_dir {
            output.output_dir = dir.clone();
        }
        if let Some(prefix) = &self.file_prefix {
            output.file_prefix = prefix.clone();
        }
        if let Some(delimiter) = self.delimiter {
            output.delimiter = delimiter;
        }
        if self.no_manifest {
            output.manifest = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "erpseed",
            "--seed",
            "9",
            "--orders",
            "10",
            "--output-dir",
            "/tmp/out",
            "--delimiter",
            ";",
            "--no-manifest",
            "--respect-load-order",
        ])
        .unwrap();

        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.generator.seed, 9);
        assert_eq!(settings.generator.orders, 10);
        assert_eq!(settings.generator.customers, 300);
        assert!(settings.generator.respect_load_order);
        assert_eq!(settings.output.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(settings.output.delimiter, ';');
        assert!(!settings.output.manifest);
    }

    #[test]
    fn no_flags_keep_settings() {
        let cli = Cli::try_parse_from(["erpseed"]).unwrap();
        let mut settings = Settings::default();
        settings.generator.seed = 1234;
        cli.apply(&mut settings);
        assert_eq!(settings.generator.seed, 1234);
        assert!(settings.output.manifest);
        assert_eq!(cli.log_format(), LogFormat::Pretty);
    }

    #[test]
    fn rejects_multi_char_delimiter() {
        assert!(Cli::try_parse_from(["erpseed", "--delimiter", ";;"]).is_err());
    }
}

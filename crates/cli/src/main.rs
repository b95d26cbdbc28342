use anyhow::Context as _;
use clap::Parser;

use erpseed_cli::{Cli, Settings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    erpseed_observability::init(cli.log_format());

    let mut settings = Settings::load(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("failed to load settings from {}", path.display()),
            None => "failed to load settings".to_string(),
        })?;
    cli.apply(&mut settings);

    let summary = erpseed_cli::run(&settings, cli.dry_run)?;
    println!("{summary}");
    Ok(())
}

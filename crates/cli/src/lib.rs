//! `erpseed` command-line front end: settings, argument parsing and the
//! generation run itself.

pub mod args;
pub mod pipeline;
pub mod settings;

pub use args::Cli;
pub use pipeline::{DataSet, RunSummary, generate, run, write_tables};
pub use settings::Settings;

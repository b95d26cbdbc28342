//! Infrastructure layer: writing seed tables and the run manifest to disk.

pub mod manifest;
pub mod output;
pub mod sink;

pub use manifest::{MANIFEST_FILE, RunManifest};
pub use output::OutputConfig;
pub use sink::{CsvDirectorySink, InMemorySink, RenderedTable, TableSink, TableSummary, WriteError};

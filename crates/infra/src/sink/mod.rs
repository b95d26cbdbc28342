//! Table sink boundary.
//!
//! Generators produce typed records; a sink turns each collection into one
//! table. The CSV sink writes files, the in-memory sink backs dry runs and
//! tests.

pub mod csv_dir;
pub mod in_memory;
pub mod r#trait;

pub use csv_dir::CsvDirectorySink;
pub use in_memory::{InMemorySink, RenderedTable};
pub use r#trait::{TableSink, TableSummary, WriteError};

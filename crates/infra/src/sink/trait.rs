use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use erpseed_core::SeedRecord;

/// What a sink did with one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub table: String,
    /// File name relative to the output directory.
    pub file_name: String,
    /// Data rows, header excluded.
    pub rows: usize,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("invalid output settings: {0}")]
    InvalidOutput(String),

    /// A record rendered a different number of fields than its header.
    #[error("table {table}: row {row} has {actual} fields, header has {expected}")]
    RowShape {
        table: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Destination for seed tables.
pub trait TableSink {
    /// Write one whole table: header first, then one row per record in order.
    fn write_table<R: SeedRecord>(&mut self, rows: &[R]) -> Result<TableSummary, WriteError>;

    /// Tables written so far, in write order.
    fn written(&self) -> &[TableSummary];
}

/// Render one record and check it against the table's header.
pub(crate) fn checked_row<R: SeedRecord>(
    index: usize,
    record: &R,
) -> Result<Vec<String>, WriteError> {
    let row = record.to_row();
    if row.len() != R::COLUMNS.len() {
        return Err(WriteError::RowShape {
            table: R::TABLE,
            row: index,
            expected: R::COLUMNS.len(),
            actual: row.len(),
        });
    }
    Ok(row)
}

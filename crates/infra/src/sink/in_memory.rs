use std::collections::BTreeMap;

use erpseed_core::SeedRecord;

use super::r#trait::{TableSink, TableSummary, WriteError, checked_row};
use crate::output::OutputConfig;

/// Rendered table held in memory: header plus rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// In-memory table sink.
///
/// Renders every row exactly like the CSV sink would, but keeps the result.
/// Backs `--dry-run` and tests.
#[derive(Debug, Default)]
pub struct InMemorySink {
    output: OutputConfig,
    tables: BTreeMap<String, RenderedTable>,
    written: Vec<TableSummary>,
}

impl InMemorySink {
    /// Fails on the output settings the CSV sink rejects.
    pub fn open(output: &OutputConfig) -> Result<Self, WriteError> {
        output.delimiter_byte()?;
        Ok(Self {
            output: output.clone(),
            ..Self::default()
        })
    }

    pub fn table(&self, name: &str) -> Option<&RenderedTable> {
        self.tables.get(name)
    }
}

impl TableSink for InMemorySink {
    fn write_table<R: SeedRecord>(&mut self, rows: &[R]) -> Result<TableSummary, WriteError> {
        let rendered = rows
            .iter()
            .enumerate()
            .map(|(i, record)| checked_row(i, record))
            .collect::<Result<Vec<_>, _>>()?;

        let summary = TableSummary {
            table: R::TABLE.to_string(),
            file_name: self.output.file_name(R::TABLE),
            rows: rendered.len(),
        };
        tracing::debug!(table = R::TABLE, rows = rendered.len(), "rendered table");

        self.tables.insert(
            R::TABLE.to_string(),
            RenderedTable {
                header: R::COLUMNS.iter().map(|c| c.to_string()).collect(),
                rows: rendered,
            },
        );
        self.written.push(summary.clone());
        Ok(summary)
    }

    fn written(&self) -> &[TableSummary] {
        &self.written
    }
}

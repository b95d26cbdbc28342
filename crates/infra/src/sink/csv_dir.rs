use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use erpseed_core::SeedRecord;

use super::r#trait::{TableSink, TableSummary, WriteError, checked_row};
use crate::output::OutputConfig;

/// Writes each table as a CSV file into one directory.
#[derive(Debug)]
pub struct CsvDirectorySink {
    config: OutputConfig,
    delimiter: u8,
    written: Vec<TableSummary>,
}

impl CsvDirectorySink {
    /// Prepare the output directory. Nothing is written yet.
    pub fn open(config: OutputConfig) -> Result<Self, WriteError> {
        let delimiter = config.delimiter_byte()?;
        let dir = &config.output_dir;

        if config.create_output_dir {
            fs::create_dir_all(dir).map_err(|source| WriteError::Io {
                path: dir.clone(),
                source,
            })?;
        } else if !dir.is_dir() {
            return Err(WriteError::Io {
                path: dir.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "output directory does not exist"),
            });
        }

        Ok(Self {
            config,
            delimiter,
            written: Vec::new(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    pub fn path_for(&self, table: &str) -> PathBuf {
        self.config.output_dir.join(self.config.file_name(table))
    }
}

/// Write header and rows of one table to any `io::Write`.
pub fn write_csv<W: io::Write, R: SeedRecord>(
    writer: W,
    delimiter: u8,
    rows: &[R],
    path: &Path,
) -> Result<usize, WriteError> {
    let csv_err = |source| WriteError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut out = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    out.write_record(R::COLUMNS).map_err(csv_err)?;
    for (i, record) in rows.iter().enumerate() {
        out.write_record(checked_row(i, record)?).map_err(csv_err)?;
    }
    out.flush().map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(rows.len())
}

impl TableSink for CsvDirectorySink {
    fn write_table<R: SeedRecord>(&mut self, rows: &[R]) -> Result<TableSummary, WriteError> {
        let path = self.path_for(R::TABLE);
        let file = fs::File::create(&path).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        let count = write_csv(io::BufWriter::new(file), self.delimiter, rows, &path)?;

        tracing::info!(table = R::TABLE, rows = count, path = %path.display(), "wrote table");

        let summary = TableSummary {
            table: R::TABLE.to_string(),
            file_name: self.config.file_name(R::TABLE),
            rows: count,
        };
        self.written.push(summary.clone());
        Ok(summary)
    }

    fn written(&self) -> &[TableSummary] {
        &self.written
    }
}

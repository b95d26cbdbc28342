//! Run manifest: what was generated, from which seed, into which files.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sink::{TableSummary, WriteError};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Time-ordered id of the run (UUIDv7).
    pub run_id: Uuid,
    pub seed: u64,
    pub record_source: String,
    pub generated_at: DateTime<Utc>,
    pub tables: Vec<TableSummary>,
}

impl RunManifest {
    pub fn new(
        run_id: Uuid,
        seed: u64,
        record_source: impl Into<String>,
        tables: Vec<TableSummary>,
    ) -> Self {
        Self {
            run_id,
            seed,
            record_source: record_source.into(),
            generated_at: Utc::now(),
            tables,
        }
    }

    /// Write the manifest as pretty JSON into `dir`; returns the file path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, WriteError> {
        let path = dir.join(MANIFEST_FILE);
        let file = fs::File::create(&path).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, self)?;
        out.flush().map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), run_id = %self.run_id, "wrote manifest");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(table: &str, rows: usize) -> TableSummary {
        TableSummary {
            table: table.to_string(),
            file_name: format!("seed_sap_{table}.csv"),
            rows,
        }
    }

    #[test]
    fn manifest_is_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = RunManifest::new(
            Uuid::now_v7(),
            42,
            "SAP",
            vec![summary("kna1", 390), summary("vbak", 2000)],
        );

        let path = manifest.write_to(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), MANIFEST_FILE);

        let text = fs::read_to_string(&path).unwrap();
        let back: RunManifest = serde_json::from_str(&text).unwrap();
        assert_eq!(back, manifest);
        assert_eq!(back.tables[1].rows, 2000);
        assert!(text.contains("\"file_name\": \"seed_sap_vbak.csv\""));
    }
}

//! Where and how seed files are written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sink::WriteError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    /// File names are `{file_prefix}_{table}.csv`.
    pub file_prefix: String,
    /// Field delimiter; must be a single ASCII character.
    pub delimiter: char,
    /// Create the output directory when it does not exist. When off, a
    /// missing directory aborts the run.
    pub create_output_dir: bool,
    /// Write `manifest.json` next to the tables.
    pub manifest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("seeds"),
            file_prefix: "seed_sap".to_string(),
            delimiter: ',',
            create_output_dir: true,
            manifest: true,
        }
    }
}

impl OutputConfig {
    pub fn file_name(&self, table: &str) -> String {
        if self.file_prefix.is_empty() {
            format!("{table}.csv")
        } else {
            format!("{}_{table}.csv", self.file_prefix)
        }
    }

    pub fn delimiter_byte(&self) -> Result<u8, WriteError> {
        if !self.delimiter.is_ascii() || self.delimiter == '"' || self.delimiter == '\n' {
            return Err(WriteError::InvalidOutput(format!(
                "unsupported delimiter {:?}",
                self.delimiter
            )));
        }
        Ok(self.delimiter as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_names() {
        let config = OutputConfig::default();
        assert_eq!(config.file_name("kna1"), "seed_sap_kna1.csv");

        let bare = OutputConfig {
            file_prefix: String::new(),
            ..OutputConfig::default()
        };
        assert_eq!(bare.file_name("vbap"), "vbap.csv");
    }

    #[test]
    fn delimiter_must_be_plain_ascii() {
        let semicolon = OutputConfig {
            delimiter: ';',
            ..OutputConfig::default()
        };
        assert_eq!(semicolon.delimiter_byte().unwrap(), b';');

        for bad in ['§', '"', '\n'] {
            let config = OutputConfig {
                delimiter: bad,
                ..OutputConfig::default()
            };
            assert!(config.delimiter_byte().is_err());
        }
    }
}

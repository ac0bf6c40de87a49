//! Metadata sink: one YAML document per command record.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ActionGenError, Result};
use crate::record::CommandRecord;

/// File extension of written metadata documents.
const METADATA_EXTENSION: &str = "yaml";

/// Writes command records under a base output directory.
pub struct MetadataSink {
    base_path: PathBuf,
}

impl MetadataSink {
    /// A sink writing into `base_path`; the directory must already exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// The directory documents are written into.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Serialize `record` to `<base>/<name>.yaml` as an explicit-start
    /// document and return the written path.
    pub fn write(&self, record: &CommandRecord) -> Result<PathBuf> {
        let path = self
            .base_path
            .join(format!("{}.{}", record.name, METADATA_EXTENSION));
        let body =
            serde_yaml_ng::to_string(record).map_err(|source| ActionGenError::Serialize {
                name: record.name.clone(),
                source,
            })?;
        fs::write(&path, format!("---\n{body}"))?;
        Ok(path)
    }
}

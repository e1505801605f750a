use crate::ports::outbound::{MappingTableReader, SbomReader};
use crate::sbom_enrichment::domain::FieldMappingTable;
use crate::shared::error::EnrichError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both SbomReader and MappingTableReader ports.
/// Every read rejects symlinks and non-regular files and enforces the
/// 100 MB size cap.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<Value> {
        let content = read_checked(path, "SBOM document").map_err(|e| EnrichError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            EnrichError::SbomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl MappingTableReader for FileSystemReader {
    fn read_mapping_table(&self, path: &Path) -> Result<FieldMappingTable> {
        let to_error = |details: String| EnrichError::MappingTableError {
            path: path.to_path_buf(),
            details,
        };

        let content = read_checked(path, "field mapping table").map_err(|e| to_error(e.to_string()))?;
        let table = FieldMappingTable::from_json_str(&content).map_err(|e| to_error(e.to_string()))?;
        Ok(table)
    }
}

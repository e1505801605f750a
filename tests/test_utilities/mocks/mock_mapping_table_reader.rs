use sbom_enrich::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock MappingTableReader that records every path it is asked for
#[derive(Default, Clone)]
pub struct MockMappingTableReader {
    pub tables: HashMap<PathBuf, FieldMappingTable>,
    pub requested: Arc<Mutex<Vec<PathBuf>>>,
}

#[allow(dead_code)]
impl MockMappingTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, path: &str, table: FieldMappingTable) -> Self {
        self.tables.insert(PathBuf::from(path), table);
        self
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl MappingTableReader for MockMappingTableReader {
    fn read_mapping_table(&self, path: &Path) -> Result<FieldMappingTable> {
        self.requested.lock().unwrap().push(path.to_path_buf());
        self.tables.get(path).cloned().ok_or_else(|| {
            EnrichError::MappingTableError {
                path: path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into()
        })
    }
}

use sbom_enrich::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock SbomReader serving in-memory documents by path
#[derive(Default)]
pub struct MockSbomReader {
    pub documents: HashMap<PathBuf, Value>,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl MockSbomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, document: Value) -> Self {
        self.documents.insert(PathBuf::from(path), document);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            documents: HashMap::new(),
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<Value> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM read failure");
        }
        self.documents.get(path).cloned().ok_or_else(|| {
            EnrichError::FileReadError {
                path: path.to_path_buf(),
                details: "not registered with the mock".to_string(),
            }
            .into()
        })
    }
}

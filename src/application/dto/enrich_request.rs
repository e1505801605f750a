use crate::sbom_enrichment::domain::DEFAULT_ANNOTATOR;
use std::path::PathBuf;

/// Where the field mapping tables come from
///
/// `None` selects the table compiled into the binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSource {
    /// General CycloneDX → SPDX 2.3 field table
    pub general: Option<PathBuf>,
    /// AI profile table, rendered as annotations
    pub ai: Option<PathBuf>,
}

impl MappingSource {
    pub fn builtin() -> Self {
        Self::default()
    }
}

/// EnrichRequest - Internal request DTO for the enrichment use case
///
/// Paths are optional here so that a missing argument surfaces as
/// `InvalidArguments` from the use case instead of a panic in the caller.
#[derive(Debug, Clone)]
pub struct EnrichRequest {
    /// SBOM that receives the enrichment
    pub target_path: Option<PathBuf>,
    /// Document the enrichment data is taken from
    pub incoming_path: Option<PathBuf>,
    pub mapping_source: MappingSource,
    /// Annotator recorded on SPDX annotations
    pub annotator: String,
    /// Field names never translated across schemas, on top of the built-in set
    pub excluded_fields: Vec<String>,
}

impl EnrichRequest {
    pub fn new(target_path: Option<PathBuf>, incoming_path: Option<PathBuf>) -> Self {
        Self {
            target_path,
            incoming_path,
            mapping_source: MappingSource::builtin(),
            annotator: DEFAULT_ANNOTATOR.to_string(),
            excluded_fields: Vec::new(),
        }
    }

    pub fn with_mapping_source(mut self, mapping_source: MappingSource) -> Self {
        self.mapping_source = mapping_source;
        self
    }

    pub fn with_annotator(mut self, annotator: impl Into<String>) -> Self {
        self.annotator = annotator.into();
        self
    }

    pub fn with_excluded_fields(mut self, excluded_fields: Vec<String>) -> Self {
        self.excluded_fields = excluded_fields;
        self
    }
}

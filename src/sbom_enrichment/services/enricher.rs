use crate::sbom_enrichment::domain::{Diagnostic, FieldMappings, SbomFormat, DEFAULT_ANNOTATOR};
use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde_json::{Map, Value};

/// Result of one enrichment pass
#[derive(Debug, Clone)]
pub struct EnrichOutcome {
    /// The target document, in its original schema, with matched records enriched
    pub document: Value,
    /// Schema the incoming document was handled as
    pub incoming_format: SbomFormat,
    /// Number of target records that received data
    pub enriched_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Inputs an enricher needs besides the two documents
///
/// Mapping tables are loaded once by the caller and handed in here, so no
/// enricher touches the filesystem.
#[derive(Debug, Clone)]
pub struct EnrichmentSettings {
    pub mappings: FieldMappings,
    pub annotator: String,
    /// Extra field names never translated across schemas
    pub excluded_fields: Vec<String>,
}

impl EnrichmentSettings {
    pub fn new(mappings: FieldMappings) -> Self {
        Self {
            mappings,
            annotator: DEFAULT_ANNOTATOR.to_string(),
            excluded_fields: Vec::new(),
        }
    }

    pub fn with_annotator(mut self, annotator: impl Into<String>) -> Self {
        self.annotator = annotator.into();
        self
    }

    pub fn with_excluded_fields(mut self, fields: Vec<String>) -> Self {
        self.excluded_fields = fields;
        self
    }
}

/// SbomEnricher - schema-specific enrichment of a target document
///
/// Each implementation detects the incoming document's schema itself and
/// picks same-schema merge, cross-schema translation, or generic-JSON
/// absorption. Stateless per call.
pub trait SbomEnricher {
    /// Schema of the documents this enricher accepts as target
    fn target_format(&self) -> SbomFormat;

    /// Enriches `target` with fields from `incoming`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The schema pair has no merge policy (`EnrichError::NotImplemented`)
    /// - The target's provenance containers have an unexpected shape
    fn enrich(&self, target: Value, incoming: &Value) -> Result<EnrichOutcome>;
}

/// Records under `key`, or an empty slice when absent
pub(crate) fn records<'a>(document: &'a Value, key: &str) -> &'a [Value] {
    document
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub(crate) fn root_object(document: &mut Value) -> Result<&mut Map<String, Value>> {
    document.as_object_mut().ok_or_else(|| {
        EnrichError::MalformedDocument {
            reason: "top level is not a JSON object".to_string(),
        }
        .into()
    })
}

/// Object stored under `key`, created empty when missing
pub(crate) fn child_object<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
) -> Result<&'a mut Map<String, Value>> {
    parent
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            EnrichError::MalformedDocument {
                reason: format!("'{}' is not an object", key),
            }
            .into()
        })
}

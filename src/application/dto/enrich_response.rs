use crate::sbom_enrichment::domain::{Diagnostic, SbomFormat};
use serde_json::Value;

/// EnrichResponse - Internal response DTO from the enrichment use case
#[derive(Debug, Clone)]
pub struct EnrichResponse {
    /// Enriched target document, still in the target's schema
    pub document: Value,
    pub target_format: SbomFormat,
    pub incoming_format: SbomFormat,
    /// Number of target records that received data
    pub enriched_count: usize,
    /// Non-fatal findings, in the order they were produced
    pub diagnostics: Vec<Diagnostic>,
}

impl EnrichResponse {
    pub fn new(
        document: Value,
        target_format: SbomFormat,
        incoming_format: SbomFormat,
        enriched_count: usize,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            document,
            target_format,
            incoming_format,
            enriched_count,
            diagnostics,
        }
    }
}

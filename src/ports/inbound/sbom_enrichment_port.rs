use crate::application::dto::{EnrichRequest, EnrichResponse};
use crate::shared::Result;

/// SbomEnrichmentPort - Inbound port for the enrichment use case
///
/// This port defines the interface that driving adapters (CLI, library
/// callers) use to trigger enrichment.
pub trait SbomEnrichmentPort {
    /// Enriches the target SBOM named in `request` with the incoming document
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either path is missing or unreadable
    /// - The target is neither CycloneDX nor SPDX
    /// - A configured mapping table cannot be loaded
    /// - The schema pair has no merge policy
    fn enrich(&self, request: EnrichRequest) -> Result<EnrichResponse>;
}

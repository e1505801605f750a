use crate::sbom_enrichment::domain::SbomFormat;
use crate::sbom_enrichment::services::{
    CycloneDxEnricher, EnrichmentSettings, SbomEnricher, SpdxEnricher,
};
use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde_json::Value;

/// Factory for selecting the enricher that matches a target document
///
/// The target's schema decides; the incoming document's schema is handled
/// inside each enricher.
pub struct EnricherFactory;

impl EnricherFactory {
    /// Creates the enricher for `target`
    ///
    /// # Errors
    /// Returns `EnrichError::UnsupportedTarget` when the target is neither
    /// CycloneDX nor SPDX
    ///
    /// # Examples
    /// ```
    /// use sbom_enrich::application::factories::EnricherFactory;
    /// use sbom_enrich::sbom_enrichment::domain::{FieldMappings, SbomFormat};
    /// use sbom_enrich::sbom_enrichment::services::EnrichmentSettings;
    /// use serde_json::json;
    ///
    /// let settings = EnrichmentSettings::new(FieldMappings::builtin().unwrap());
    /// let target = json!({"bomFormat": "CycloneDX", "components": []});
    /// let enricher = EnricherFactory::create(&target, settings).unwrap();
    /// assert_eq!(enricher.target_format(), SbomFormat::CycloneDx);
    /// ```
    pub fn create(target: &Value, settings: EnrichmentSettings) -> Result<Box<dyn SbomEnricher>> {
        match SbomFormat::detect(target) {
            SbomFormat::CycloneDx => Ok(Box::new(CycloneDxEnricher::new())),
            SbomFormat::Spdx => Ok(Box::new(SpdxEnricher::new(settings))),
            SbomFormat::Unknown => Err(EnrichError::UnsupportedTarget {
                reason: "document has neither CycloneDX nor SPDX markers".to_string(),
            }
            .into()),
        }
    }
}

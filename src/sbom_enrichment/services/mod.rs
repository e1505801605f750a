mod cross_schema_translator;
mod cyclonedx_enricher;
mod enricher;
mod generic_absorber;
mod matcher;
mod model_card_merger;
mod spdx_enricher;

pub use cross_schema_translator::{CrossSchemaTranslator, SCHEMA_MANAGEMENT_FIELDS};
pub use cyclonedx_enricher::CycloneDxEnricher;
pub use enricher::{EnrichOutcome, EnrichmentSettings, SbomEnricher};
pub use generic_absorber::{GenericAbsorber, GenericElements};
pub use matcher::MatchIndex;
pub use model_card_merger::ModelCardMerger;
pub use spdx_enricher::SpdxEnricher;

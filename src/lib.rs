//! sbom-enrich - SBOM enrichment across CycloneDX, SPDX and generic JSON
//!
//! This library enriches a target SBOM with model-card and provenance data
//! taken from a second document, following hexagonal architecture and
//! Domain-Driven Design principles. Records are paired by package URL with
//! the version ignored; the output keeps the target's schema.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_enrichment`): identifiers, mapping tables and
//!   the pure merge/translation logic
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_enrich::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = EnrichSbomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = EnrichRequest::new(
//!     Some(PathBuf::from("model.spdx.json")),
//!     Some(PathBuf::from("aibom.cdx.json")),
//! );
//! let response = use_case.execute(request)?;
//!
//! for diagnostic in &response.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! println!("{}", serde_json::to_string_pretty(&response.document)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_enrichment;
pub mod shared;

pub use application::use_cases::enrich_sbom;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{EnrichRequest, EnrichResponse, MappingSource};
    pub use crate::application::factories::EnricherFactory;
    pub use crate::application::use_cases::{enrich_sbom, EnrichSbomUseCase};
    pub use crate::ports::inbound::SbomEnrichmentPort;
    pub use crate::ports::outbound::{
        MappingTableReader, OutputPresenter, ProgressReporter, SbomReader,
    };
    pub use crate::sbom_enrichment::domain::{
        Diagnostic, FieldMappingTable, FieldMappings, Purl, SbomFormat,
    };
    pub use crate::sbom_enrichment::services::{EnrichOutcome, EnrichmentSettings, SbomEnricher};
    pub use crate::shared::error::{EnrichError, ExitCode};
    pub use crate::shared::Result;
}

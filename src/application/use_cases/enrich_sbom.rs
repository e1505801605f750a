use crate::adapters::outbound::console::SilentProgressReporter;
use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::application::dto::{EnrichRequest, EnrichResponse, MappingSource};
use crate::application::factories::EnricherFactory;
use crate::ports::inbound::SbomEnrichmentPort;
use crate::ports::outbound::{MappingTableReader, ProgressReporter, SbomReader};
use crate::sbom_enrichment::domain::{FieldMappingTable, FieldMappings, SbomFormat};
use crate::sbom_enrichment::services::EnrichmentSettings;
use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

const TOTAL_STAGES: usize = 4;

/// EnrichSbomUseCase - Core use case for SBOM enrichment
///
/// Loads both documents and the field mapping tables, picks the enricher
/// for the target's schema and relays every diagnostic to the progress
/// reporter.
///
/// # Type Parameters
/// * `R` - SbomReader implementation
/// * `M` - MappingTableReader implementation
/// * `P` - ProgressReporter implementation
pub struct EnrichSbomUseCase<R, M, P> {
    sbom_reader: R,
    mapping_table_reader: M,
    progress_reporter: P,
}

impl<R, M, P> EnrichSbomUseCase<R, M, P>
where
    R: SbomReader,
    M: MappingTableReader,
    P: ProgressReporter,
{
    /// Creates a new EnrichSbomUseCase with injected dependencies
    pub fn new(sbom_reader: R, mapping_table_reader: M, progress_reporter: P) -> Self {
        Self {
            sbom_reader,
            mapping_table_reader,
            progress_reporter,
        }
    }

    /// Executes the enrichment use case
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either path is missing (`EnrichError::InvalidArguments`)
    /// - A document cannot be read or parsed
    /// - A configured mapping table cannot be loaded
    /// - The target is not an SBOM, or the schema pair has no merge policy
    pub fn execute(&self, request: EnrichRequest) -> Result<EnrichResponse> {
        let target_path = required_path(request.target_path.as_deref(), "target")?;
        let incoming_path = required_path(request.incoming_path.as_deref(), "incoming")?;

        // Step 1: Load the target
        self.progress_reporter
            .report_progress(1, TOTAL_STAGES, Some("Loading target SBOM"));
        let target = self.sbom_reader.read_sbom(target_path)?;
        let target_format = SbomFormat::detect(&target);
        self.progress_reporter.report(&format!(
            "📖 Loaded {} target SBOM: {}",
            target_format,
            target_path.display()
        ));

        // Step 2: Load the incoming document
        self.progress_reporter
            .report_progress(2, TOTAL_STAGES, Some("Loading incoming document"));
        let incoming = self.sbom_reader.read_sbom(incoming_path)?;
        self.progress_reporter.report(&format!(
            "📖 Loaded {} incoming document: {}",
            SbomFormat::detect(&incoming),
            incoming_path.display()
        ));

        // Step 3: Load the mapping tables, once for the whole call
        self.progress_reporter
            .report_progress(3, TOTAL_STAGES, Some("Loading field mapping tables"));
        let mappings = self.load_mappings(&request.mapping_source)?;

        // Step 4: Enrich
        self.progress_reporter
            .report_progress(4, TOTAL_STAGES, Some("Enriching"));
        let settings = EnrichmentSettings::new(mappings)
            .with_annotator(request.annotator)
            .with_excluded_fields(request.excluded_fields);
        let enricher = EnricherFactory::create(&target, settings)?;
        let outcome = enricher.enrich(target, &incoming)?;

        for diagnostic in &outcome.diagnostics {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", diagnostic));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Enrichment complete: {} {} record(s) enriched from {} input, {} warning(s)",
            outcome.enriched_count,
            target_format,
            outcome.incoming_format,
            outcome.diagnostics.len()
        ));

        Ok(EnrichResponse::new(
            outcome.document,
            target_format,
            outcome.incoming_format,
            outcome.enriched_count,
            outcome.diagnostics,
        ))
    }

    fn load_mappings(&self, source: &MappingSource) -> Result<FieldMappings> {
        let general = match &source.general {
            Some(path) => self.mapping_table_reader.read_mapping_table(path)?,
            None => FieldMappingTable::builtin_general()?,
        };
        let ai = match &source.ai {
            Some(path) => self.mapping_table_reader.read_mapping_table(path)?,
            None => FieldMappingTable::builtin_ai()?,
        };
        Ok(FieldMappings::new(general, ai))
    }
}

impl<R, M, P> SbomEnrichmentPort for EnrichSbomUseCase<R, M, P>
where
    R: SbomReader,
    M: MappingTableReader,
    P: ProgressReporter,
{
    fn enrich(&self, request: EnrichRequest) -> Result<EnrichResponse> {
        self.execute(request)
    }
}

fn required_path<'a>(path: Option<&'a Path>, role: &str) -> Result<&'a Path> {
    match path {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(EnrichError::InvalidArguments {
            reason: format!("{} SBOM path is missing", role),
        }
        .into()),
    }
}

/// Enriches the SBOM at `target` with the document at `incoming`
///
/// Uses the filesystem readers, the built-in mapping tables and the default
/// annotator, and reports nothing; diagnostics are discarded. Use
/// [`EnrichSbomUseCase`] to observe them.
///
/// # Errors
/// Same conditions as [`EnrichSbomUseCase::execute`]
pub fn enrich_sbom(target: impl Into<PathBuf>, incoming: impl Into<PathBuf>) -> Result<Value> {
    let use_case = EnrichSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        SilentProgressReporter,
    );
    let request = EnrichRequest::new(Some(target.into()), Some(incoming.into()));
    Ok(use_case.execute(request)?.document)
}

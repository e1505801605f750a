mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use sbom_enrich::adapters::outbound::console::StderrProgressReporter;
use sbom_enrich::adapters::outbound::filesystem::FileSystemReader;
use sbom_enrich::application::dto::{EnrichRequest, MappingSource};
use sbom_enrich::application::factories::{PresenterFactory, PresenterType};
use sbom_enrich::application::use_cases::EnrichSbomUseCase;
use sbom_enrich::ports::inbound::SbomEnrichmentPort;
use sbom_enrich::sbom_enrichment::domain::DEFAULT_ANNOTATOR;
use sbom_enrich::shared::error::ExitCode;
use sbom_enrich::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    let config = load_config(&args)?;
    let settings = merge_settings(args, config);

    let use_case = EnrichSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.enrich(settings.request)?;
    let content = serde_json::to_string_pretty(&response.document)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&content)?;

    Ok(())
}

/// Loads the explicit `--config` file, or the one discovered in the
/// working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return load_config_from_path(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(discover_config(&cwd)?.unwrap_or_default())
}

struct RunSettings {
    request: EnrichRequest,
    output: Option<std::path::PathBuf>,
}

/// CLI flags take precedence over config file values
fn merge_settings(args: Args, config: ConfigFile) -> RunSettings {
    let mapping_source = MappingSource {
        general: args.field_mappings.or(config.field_mappings),
        ai: args.ai_field_mappings.or(config.ai_field_mappings),
    };
    let annotator = args
        .annotator
        .or(config.annotator)
        .unwrap_or_else(|| DEFAULT_ANNOTATOR.to_string());

    let request = EnrichRequest::new(args.target, args.incoming)
        .with_mapping_source(mapping_source)
        .with_annotator(annotator)
        .with_excluded_fields(config.exclude_fields.unwrap_or_default());

    RunSettings {
        request,
        output: args.output.or(config.output),
    }
}

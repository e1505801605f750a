use clap::Parser;
use std::path::PathBuf;

/// Enrich a CycloneDX or SPDX SBOM with model-card data from a second document
#[derive(Parser, Debug)]
#[command(name = "sbom-enrich")]
#[command(version)]
#[command(
    about = "Enrich a CycloneDX or SPDX SBOM with model-card data from a second document",
    long_about = None
)]
pub struct Args {
    /// SBOM to enrich (CycloneDX or SPDX JSON)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Document to take enrichment data from (CycloneDX, SPDX, or any JSON)
    #[arg(value_name = "INCOMING")]
    pub incoming: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./sbom-enrich.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CycloneDX → SPDX field mapping table (defaults to the built-in SPDX 2.3 table)
    #[arg(long, value_name = "PATH")]
    pub field_mappings: Option<PathBuf>,

    /// AI field mapping table used for SPDX annotations (defaults to the built-in table)
    #[arg(long, value_name = "PATH")]
    pub ai_field_mappings: Option<PathBuf>,

    /// Annotator recorded on created SPDX annotations
    #[arg(long, value_name = "TEXT")]
    pub annotator: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod mapping_table_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_reader;

pub use mapping_table_reader::MappingTableReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_reader::SbomReader;

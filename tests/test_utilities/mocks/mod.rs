/// Mock implementations for testing
mod mock_mapping_table_reader;
mod mock_progress_reporter;
mod mock_sbom_reader;

#[allow(unused_imports)]
pub use mock_mapping_table_reader::MockMappingTableReader;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_sbom_reader::MockSbomReader;

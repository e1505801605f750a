use crate::sbom_enrichment::domain::FieldMappingTable;
use crate::shared::Result;
use std::path::Path;

/// MappingTableReader port for loading field mapping tables
pub trait MappingTableReader {
    /// Reads a mapping table of the form
    /// `{"<cdx field>": {"SPDX_Equivalent": "<spdx field>" | null}}`
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or not a valid table
    fn read_mapping_table(&self, path: &Path) -> Result<FieldMappingTable>;
}

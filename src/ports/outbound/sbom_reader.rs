use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// SbomReader port for loading SBOM documents
///
/// This port abstracts where target and incoming documents come from.
/// Both schemas and generic JSON are returned untyped; schema detection
/// happens in the enrichment core.
pub trait SbomReader {
    /// Reads and parses the JSON document at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid JSON
    fn read_sbom(&self, path: &Path) -> Result<Value>;
}

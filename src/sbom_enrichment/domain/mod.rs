pub mod annotation;
pub mod diagnostic;
pub mod field_mapping;
pub mod purl;
pub mod sbom_format;
pub mod sbom_item;

pub use annotation::{annotation_date, SpdxAnnotation, DEFAULT_ANNOTATOR};
pub use diagnostic::{Diagnostic, Side};
pub use field_mapping::{FieldMappingTable, FieldMappings};
pub use purl::{IdentifierError, Purl};
pub use sbom_format::SbomFormat;
pub use sbom_item::{
    wrap_as_cdx, wrap_as_elements, wrap_as_spdx, CdxComponent, JsonElement, SbomItem, SpdxPackage,
};

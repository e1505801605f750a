use super::purl::{IdentifierError, Purl};
use serde_json::Value;

/// Uniform read-only view over one record of an SBOM-like document
///
/// Each shape owns its own purl rule: a CycloneDX component has exactly
/// one, an SPDX package may list any number, and a generic JSON element
/// may carry one or none.
pub trait SbomItem {
    fn id(&self) -> Option<&str>;

    fn name(&self) -> Option<&str>;

    fn version(&self) -> Option<&str>;

    /// Every package identifier this record answers to
    ///
    /// # Errors
    /// Returns `IdentifierError` when the record should carry a purl but
    /// it is missing or cannot be parsed.
    fn purls(&self) -> Result<Vec<Purl>, IdentifierError>;

    /// Identifiers that failed to parse while others on the same record
    /// succeeded. Empty whenever `purls` is an error.
    fn rejected_purls(&self) -> Vec<IdentifierError> {
        Vec::new()
    }

    /// The wrapped record, untouched
    fn raw(&self) -> &Value;
}

fn str_field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// CycloneDX `components[]` entry
#[derive(Debug, Clone, Copy)]
pub struct CdxComponent<'a>(&'a Value);

impl<'a> CdxComponent<'a> {
    pub fn new(record: &'a Value) -> Self {
        Self(record)
    }
}

impl SbomItem for CdxComponent<'_> {
    fn id(&self) -> Option<&str> {
        str_field(self.0, "bom-ref")
    }

    fn name(&self) -> Option<&str> {
        str_field(self.0, "name")
    }

    fn version(&self) -> Option<&str> {
        str_field(self.0, "version")
    }

    fn purls(&self) -> Result<Vec<Purl>, IdentifierError> {
        let raw = str_field(self.0, "purl").ok_or(IdentifierError::Missing)?;
        Ok(vec![Purl::parse(raw)?])
    }

    fn raw(&self) -> &Value {
        self.0
    }
}

/// SPDX `packages[]` entry
#[derive(Debug, Clone, Copy)]
pub struct SpdxPackage<'a>(&'a Value);

impl<'a> SpdxPackage<'a> {
    pub fn new(record: &'a Value) -> Self {
        Self(record)
    }

    /// Every `externalRefs` entry whose `referenceType` is `purl`, parsed
    fn purl_refs(&self) -> Vec<Result<Purl, IdentifierError>> {
        self.0
            .get("externalRefs")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter(|reference| str_field(reference, "referenceType") == Some("purl"))
            .filter_map(|reference| str_field(reference, "referenceLocator"))
            .map(Purl::parse)
            .collect()
    }
}

impl SbomItem for SpdxPackage<'_> {
    fn id(&self) -> Option<&str> {
        str_field(self.0, "SPDXID")
    }

    fn name(&self) -> Option<&str> {
        str_field(self.0, "name")
    }

    fn version(&self) -> Option<&str> {
        str_field(self.0, "versionInfo")
    }

    /// Purls come from `externalRefs` entries whose `referenceType` is `purl`.
    /// A package published to several registries lists one per registry.
    /// Unparseable entries are passed over as long as one entry parses.
    fn purls(&self) -> Result<Vec<Purl>, IdentifierError> {
        let mut purls = Vec::new();
        let mut first_error = None;
        for parsed in self.purl_refs() {
            match parsed {
                Ok(purl) => purls.push(purl),
                Err(e) if first_error.is_none() => first_error = Some(e),
                Err(_) => {}
            }
        }

        if !purls.is_empty() {
            return Ok(purls);
        }
        Err(first_error.unwrap_or(IdentifierError::Missing))
    }

    fn rejected_purls(&self) -> Vec<IdentifierError> {
        let parsed = self.purl_refs();
        if !parsed.iter().any(Result::is_ok) {
            return Vec::new();
        }
        parsed.into_iter().filter_map(Result::err).collect()
    }

    fn raw(&self) -> &Value {
        self.0
    }
}

/// A record from an arbitrary JSON document
///
/// Has no identity beyond an optional `purl` key; a missing purl yields an
/// empty list rather than an error, so no match is attempted.
#[derive(Debug, Clone, Copy)]
pub struct JsonElement<'a>(&'a Value);

impl<'a> JsonElement<'a> {
    pub fn new(record: &'a Value) -> Self {
        Self(record)
    }
}

impl SbomItem for JsonElement<'_> {
    fn id(&self) -> Option<&str> {
        None
    }

    fn name(&self) -> Option<&str> {
        str_field(self.0, "name")
    }

    fn version(&self) -> Option<&str> {
        None
    }

    fn purls(&self) -> Result<Vec<Purl>, IdentifierError> {
        match str_field(self.0, "purl") {
            Some(raw) => Ok(vec![Purl::parse(raw)?]),
            None => Ok(Vec::new()),
        }
    }

    fn raw(&self) -> &Value {
        self.0
    }
}

pub fn wrap_as_cdx(records: &[Value]) -> Vec<CdxComponent<'_>> {
    records.iter().map(CdxComponent::new).collect()
}

pub fn wrap_as_spdx(records: &[Value]) -> Vec<SpdxPackage<'_>> {
    records.iter().map(SpdxPackage::new).collect()
}

pub fn wrap_as_elements<'a, I>(records: I) -> Vec<JsonElement<'a>>
where
    I: IntoIterator<Item = &'a Value>,
{
    records.into_iter().map(JsonElement::new).collect()
}

use packageurl::PackageUrl;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a record could not yield a package identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("no purl found")]
    Missing,

    #[error("malformed purl '{purl}': {details}")]
    Malformed { purl: String, details: String },
}

/// Parsed package URL
///
/// Owns its parts so it can be used as a hash key after the borrowed
/// `PackageUrl` from the parser is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Purl {
    ty: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: BTreeMap<String, String>,
    subpath: Option<String>,
}

impl Purl {
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let parsed = PackageUrl::from_str(raw).map_err(|e| IdentifierError::Malformed {
            purl: raw.to_string(),
            details: e.to_string(),
        })?;

        Ok(Self {
            ty: parsed.ty().to_string(),
            namespace: parsed.namespace().map(str::to_string),
            name: parsed.name().to_string(),
            version: parsed.version().map(str::to_string),
            qualifiers: parsed
                .qualifiers()
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            subpath: parsed.subpath().map(str::to_string),
        })
    }

    /// Returns the same purl with `version` cleared.
    ///
    /// Only ever used as an equality key, so two records for different
    /// versions of one package compare equal.
    pub fn without_version(&self) -> Self {
        Self {
            version: None,
            ..self.clone()
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl fmt::Display for Purl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkg:{}/", self.ty)?;
        if let Some(namespace) = &self.namespace {
            write!(f, "{}/", namespace)?;
        }
        write!(f, "{}", self.name)?;
        if let Some(version) = &self.version {
            write!(f, "@{}", version)?;
        }
        if !self.qualifiers.is_empty() {
            let pairs: Vec<String> = self
                .qualifiers
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            write!(f, "?{}", pairs.join("&"))?;
        }
        if let Some(subpath) = &self.subpath {
            write!(f, "#{}", subpath)?;
        }
        Ok(())
    }
}

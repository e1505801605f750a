use serde_json::Value;
use std::fmt;

/// Schema tag of a loaded document
///
/// Detection only looks at marker fields; the document is never validated
/// against the formal schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SbomFormat {
    CycloneDx,
    Spdx,
    /// Neither marker set matched; treated as arbitrary JSON
    Unknown,
}

impl SbomFormat {
    /// Classifies a document.
    ///
    /// `bomFormat` and `spdxVersion` are decisive. Without them the
    /// structural pairs `components` + `specVersion` (CycloneDX) and
    /// `packages` + `SPDXID` (SPDX) are accepted, so a plain JSON object
    /// that merely carries a `components` list stays `Unknown`.
    pub fn detect(document: &Value) -> Self {
        let Some(object) = document.as_object() else {
            return SbomFormat::Unknown;
        };

        if object.contains_key("bomFormat") {
            return SbomFormat::CycloneDx;
        }
        if object.contains_key("spdxVersion") {
            return SbomFormat::Spdx;
        }

        let has_array = |key: &str| object.get(key).is_some_and(Value::is_array);
        if has_array("components") && object.contains_key("specVersion") {
            SbomFormat::CycloneDx
        } else if has_array("packages") && object.contains_key("SPDXID") {
            SbomFormat::Spdx
        } else {
            SbomFormat::Unknown
        }
    }

    /// Get the human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            SbomFormat::CycloneDx => "CycloneDX",
            SbomFormat::Spdx => "SPDX",
            SbomFormat::Unknown => "generic JSON",
        }
    }
}

impl fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_cyclonedx_by_bom_format() {
        let doc = json!({"bomFormat": "CycloneDX", "specVersion": "1.6"});
        assert_eq!(SbomFormat::detect(&doc), SbomFormat::CycloneDx);
    }

    #[test]
    fn test_detect_cyclonedx_by_structure() {
        let doc = json!({"specVersion": "1.5", "components": []});
        assert_eq!(SbomFormat::detect(&doc), SbomFormat::CycloneDx);
    }

    #[test]
    fn test_detect_spdx_by_version() {
        let doc = json!({"spdxVersion": "SPDX-2.3", "packages": []});
        assert_eq!(SbomFormat::detect(&doc), SbomFormat::Spdx);
    }

    #[test]
    fn test_detect_spdx_by_structure() {
        let doc = json!({"SPDXID": "SPDXRef-DOCUMENT", "packages": []});
        assert_eq!(SbomFormat::detect(&doc), SbomFormat::Spdx);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(SbomFormat::detect(&json!({"x": 1})), SbomFormat::Unknown);
        assert_eq!(
            SbomFormat::detect(&json!({"components": [{"purl": "pkg:pypi/foo"}]})),
            SbomFormat::Unknown
        );
        assert_eq!(SbomFormat::detect(&json!([1, 2, 3])), SbomFormat::Unknown);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SbomFormat::CycloneDx.to_string(), "CycloneDX");
        assert_eq!(SbomFormat::Spdx.to_string(), "SPDX");
        assert_eq!(SbomFormat::Unknown.to_string(), "generic JSON");
    }
}

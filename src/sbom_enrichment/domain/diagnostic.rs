use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Which document a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Target,
    Incoming,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Target => write!(f, "target"),
            Side::Incoming => write!(f, "incoming"),
        }
    }
}

/// Non-fatal finding recorded during one enrichment pass
///
/// Nothing in the enrichment core prints; callers decide how to surface these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A record was skipped from matching because it has no usable purl
    UnresolvableIdentifier {
        side: Side,
        position: usize,
        reason: String,
    },
    /// One of several purls on a record could not be parsed; the record is
    /// still matched through the others
    IgnoredIdentifier {
        side: Side,
        position: usize,
        reason: String,
    },
    /// A model-card property has no SPDX field or AI annotation mapping
    UnmappedField { field: String, value: Value },
    /// Several target records share one version-less purl; all are enriched
    DuplicateTargetIdentifier { purl: String, positions: Vec<usize> },
    /// The incoming document matched neither schema
    IncomingSchemaFallback { reason: String },
    /// A purl-less generic element had no single record to attach to
    UnanchoredElement { reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvableIdentifier {
                side,
                position,
                reason,
            } => write!(
                f,
                "Skipping {} record #{} from matching: {}",
                side, position, reason
            ),
            Diagnostic::IgnoredIdentifier {
                side,
                position,
                reason,
            } => write!(
                f,
                "Ignoring a purl of {} record #{}: {}",
                side, position, reason
            ),
            Diagnostic::UnmappedField { field, value } => write!(
                f,
                "Field '{}' does not correspond to any SPDX field or AI field; dropped value {}",
                field, value
            ),
            Diagnostic::DuplicateTargetIdentifier { purl, positions } => write!(
                f,
                "{} identifies {} target records (positions {:?}); all of them are enriched",
                purl,
                positions.len(),
                positions
            ),
            Diagnostic::IncomingSchemaFallback { reason } => {
                write!(f, "{}, treating enrichment file as JSON", reason)
            }
            Diagnostic::UnanchoredElement { reason } => {
                write!(f, "Generic element not applied: {}", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unmapped_field_display_names_field_and_value() {
        let diagnostic = Diagnostic::UnmappedField {
            field: "quantization".to_string(),
            value: json!("int8"),
        };
        let text = diagnostic.to_string();
        assert!(text.contains("quantization"));
        assert!(text.contains("\"int8\""));
    }

    #[test]
    fn test_unresolvable_identifier_display() {
        let diagnostic = Diagnostic::UnresolvableIdentifier {
            side: Side::Incoming,
            position: 3,
            reason: "no purl found".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "Skipping incoming record #3 from matching: no purl found"
        );
    }

    #[test]
    fn test_ignored_identifier_display() {
        let diagnostic = Diagnostic::IgnoredIdentifier {
            side: Side::Target,
            position: 1,
            reason: "malformed purl 'not a purl': bad".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "Ignoring a purl of target record #1: malformed purl 'not a purl': bad"
        );
    }

    #[test]
    fn test_duplicate_display() {
        let diagnostic = Diagnostic::DuplicateTargetIdentifier {
            purl: "pkg:pypi/foo".to_string(),
            positions: vec![0, 2],
        };
        assert!(diagnostic.to_string().contains("2 target records"));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let diagnostic = Diagnostic::UnresolvableIdentifier {
            side: Side::Target,
            position: 0,
            reason: "no purl found".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&diagnostic).unwrap(),
            json!({
                "kind": "unresolvable_identifier",
                "side": "target",
                "position": 0,
                "reason": "no purl found"
            })
        );
    }
}

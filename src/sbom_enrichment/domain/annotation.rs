use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Annotator recorded on annotations synthesized during enrichment
pub const DEFAULT_ANNOTATOR: &str = "Tool: OWASP AIBOM Generator";

/// `annotationDate` layout: second precision, literal `Z`
pub const ANNOTATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn annotation_date(now: DateTime<Utc>) -> String {
    now.format(ANNOTATION_DATE_FORMAT).to_string()
}

/// SPDX package annotation carrying a field SPDX has no native slot for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxAnnotation {
    annotation_date: String,
    annotation_type: String,
    annotator: String,
    comment: String,
}

impl SpdxAnnotation {
    /// Builds an `OTHER` annotation whose comment reads `<field> : <value>`.
    /// String values are written raw, anything else as compact JSON.
    pub fn for_field(field: &str, value: &Value, annotator: &str, date: &str) -> Self {
        let rendered = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        Self {
            annotation_date: date.to_string(),
            annotation_type: "OTHER".to_string(),
            annotator: annotator.to_string(),
            comment: format!("{} : {}", field, rendered),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

use crate::sbom_enrichment::domain::{Diagnostic, FieldMappings, SpdxAnnotation};
use crate::shared::Result;
use serde_json::Value;
use std::collections::HashSet;

/// Schema-management fields that carry no meaning across schemas.
///
/// `bomFormat` has no SPDX slot, `serialNumber` is rebuilt as the SPDX id,
/// and the target's own `specVersion`/`version`/`downloadLocation` win.
pub const SCHEMA_MANAGEMENT_FIELDS: [&str; 6] = [
    "bomFormat",
    "serialNumber",
    "specVersion",
    "external_references",
    "downloadLocation",
    "version",
];

/// Translates CycloneDX model-card properties onto an SPDX package
///
/// Per property, in order:
/// 1. excluded field: skipped
/// 2. general table hit: set the SPDX field unless the package already has it
/// 3. AI table hit: append an `OTHER` annotation
/// 4. otherwise: dropped with an `UnmappedField` diagnostic
pub struct CrossSchemaTranslator<'a> {
    mappings: &'a FieldMappings,
    annotator: &'a str,
    annotation_date: &'a str,
    excluded: HashSet<&'a str>,
}

impl<'a> CrossSchemaTranslator<'a> {
    pub fn new(mappings: &'a FieldMappings, annotator: &'a str, annotation_date: &'a str) -> Self {
        Self {
            mappings,
            annotator,
            annotation_date,
            excluded: SCHEMA_MANAGEMENT_FIELDS.into_iter().collect(),
        }
    }

    /// Adds caller-configured names to the exclusion set
    pub fn with_excluded<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.excluded.extend(fields);
        self
    }

    /// Returns the enriched package, or `None` when `component` carries no
    /// model-card properties.
    pub fn translate(
        &self,
        package: &Value,
        component: &Value,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<Value>> {
        let Some(properties) = component
            .pointer("/modelCard/properties")
            .and_then(Value::as_array)
        else {
            return Ok(None);
        };

        let mut enriched = package.clone();
        let Some(fields) = enriched.as_object_mut() else {
            return Ok(None);
        };
        let mut annotations = Vec::new();

        for property in properties {
            let Some(name) = property.get("name").and_then(Value::as_str) else {
                continue;
            };
            let value = property.get("value").cloned().unwrap_or(Value::Null);

            if self.excluded.contains(name) {
                continue;
            }

            if let Some(spdx_field) = self.mappings.general.lookup(name) {
                // never overwrite what the package already states natively
                if !fields.contains_key(spdx_field) {
                    fields.insert(spdx_field.to_string(), value);
                }
                continue;
            }

            if let Some(ai_field) = self.mappings.ai.lookup(name) {
                annotations.push(
                    SpdxAnnotation::for_field(ai_field, &value, self.annotator, self.annotation_date)
                        .to_value()?,
                );
                continue;
            }

            diagnostics.push(Diagnostic::UnmappedField {
                field: name.to_string(),
                value,
            });
        }

        if !annotations.is_empty() {
            match fields.get_mut("annotations") {
                Some(Value::Array(existing)) => existing.extend(annotations),
                _ => {
                    fields.insert("annotations".to_string(), Value::Array(annotations));
                }
            }
        }

        Ok(Some(enriched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_enrichment::domain::{FieldMappingTable, DEFAULT_ANNOTATOR};
    use serde_json::json;

    const DATE: &str = "2024-05-01T12:00:00Z";

    fn mappings() -> FieldMappings {
        FieldMappings::new(
            [
                ("licenses", Some("licenseDeclared")),
                ("copyright", Some("copyrightText")),
                ("downloadLocation", Some("downloadLocation")),
                ("purl", None),
            ]
            .into_iter()
            .collect(),
            [("task", Some("domain")), ("limitation", Some("limitation"))]
                .into_iter()
                .collect::<FieldMappingTable>(),
        )
    }

    fn component(properties: Value) -> Value {
        json!({"name": "bar", "modelCard": {"modelParameters": {}, "properties": properties}})
    }

    #[test]
    fn test_sets_absent_native_field() {
        let mappings = mappings();
        let translator = CrossSchemaTranslator::new(&mappings, DEFAULT_ANNOTATOR, DATE);
        let package = json!({"SPDXID": "SPDXRef-bar", "name": "bar"});
        let mut diagnostics = Vec::new();

        let enriched = translator
            .translate(
                &package,
                &component(json!([{"name": "licenses", "value": "MIT"}])),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        assert_eq!(enriched["licenseDeclared"], "MIT");
        assert!(enriched.get("annotations").is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_native_field_takes_precedence() {
        let mappings = mappings();
        let translator = CrossSchemaTranslator::new(&mappings, DEFAULT_ANNOTATOR, DATE);
        let package = json!({"name": "bar", "copyrightText": "(c) Original"});
        let mut diagnostics = Vec::new();

        let enriched = translator
            .translate(
                &package,
                &component(json!([{"name": "copyright", "value": "(c) Incoming"}])),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        assert_eq!(enriched, package);
    }

    #[test]
    fn test_excluded_fields_are_skipped() {
        let mappings = mappings();
        let translator = CrossSchemaTranslator::new(&mappings, DEFAULT_ANNOTATOR, DATE);
        let package = json!({"name": "bar"});
        let mut diagnostics = Vec::new();

        let enriched = translator
            .translate(
                &package,
                &component(json!([
                    {"name": "downloadLocation", "value": "X"},
                    {"name": "bomFormat", "value": "CycloneDX"},
                    {"name": "version", "value": "9"}
                ])),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        assert_eq!(enriched, package);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ai_field_becomes_annotation() {
        let mappings = mappings();
        let translator = CrossSchemaTranslator::new(&mappings, DEFAULT_ANNOTATOR, DATE);
        let package = json!({"name": "bar", "annotations": [{"comment": "existing"}]});
        let mut diagnostics = Vec::new();

        let enriched = translator
            .translate(
                &package,
                &component(json!([{"name": "task", "value": "classification"}])),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        let annotations = enriched["annotations"].as_array().unwrap();
        assert_eq!(annotations.len(), 2);
        assert_eq!(
            annotations[1],
            json!({
                "annotationDate": DATE,
                "annotationType": "OTHER",
                "annotator": "Tool: OWASP AIBOM Generator",
                "comment": "domain : classification"
            })
        );
    }

    #[test]
    fn test_null_general_entry_falls_through_to_ai_table() {
        let mappings = FieldMappings::new(
            [("task", None::<&str>)].into_iter().collect(),
            [("task", Some("domain"))].into_iter().collect(),
        );
        let translator = CrossSchemaTranslator::new(&mappings, DEFAULT_ANNOTATOR, DATE);
        let mut diagnostics = Vec::new();

        let enriched = translator
            .translate(
                &json!({"name": "bar"}),
                &component(json!([{"name": "task", "value": "qa"}])),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        assert_eq!(enriched["annotations"][0]["comment"], "domain : qa");
    }

    #[test]
    fn test_unmapped_field_only_emits_diagnostic() {
        let mappings = mappings();
        let translator = CrossSchemaTranslator::new(&mappings, DEFAULT_ANNOTATOR, DATE);
        let package = json!({"name": "bar", "annotations": []});
        let mut diagnostics = Vec::new();

        let enriched = translator
            .translate(
                &package,
                &component(json!([{"name": "quantization", "value": "int8"}])),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();

        assert_eq!(
            serde_json::to_string(&enriched).unwrap(),
            serde_json::to_string(&package).unwrap()
        );
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnmappedField {
                field: "quantization".to_string(),
                value: json!("int8"),
            }]
        );
    }

    #[test]
    fn test_configured_exclusions() {
        let mappings = mappings();
        let translator = CrossSchemaTranslator::new(&mappings, DEFAULT_ANNOTATOR, DATE)
            .with_excluded(["licenses"]);
        let package = json!({"name": "bar"});
        let mut diagnostics = Vec::new();

        let enriched = translator
            .translate(
                &package,
                &component(json!([{"name": "licenses", "value": "MIT"}])),
                &mut diagnostics,
            )
            .unwrap()
            .unwrap();
        assert_eq!(enriched, package);
    }

    #[test]
    fn test_component_without_model_card() {
        let mappings = mappings();
        let translator = CrossSchemaTranslator::new(&mappings, DEFAULT_ANNOTATOR, DATE);
        let mut diagnostics = Vec::new();
        assert!(translator
            .translate(&json!({"name": "bar"}), &json!({"name": "bar"}), &mut diagnostics)
            .unwrap()
            .is_none());
    }
}

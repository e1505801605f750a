use crate::sbom_enrichment::domain::{Diagnostic, Side};
use serde_json::{json, Map, Value};

/// Elements of a generic document, sorted by how they reach the target
#[derive(Debug, Default, PartialEq)]
pub struct GenericElements<'a> {
    /// Elements paired with target records by purl. Entries of a
    /// `components` array keep their positions; those without a purl are
    /// never matched.
    pub matchable: Vec<&'a Value>,
    /// The whole document, when it has neither a `components` array nor a
    /// purl of its own. It describes the target document as a whole.
    pub document_level: Option<&'a Value>,
}

/// Turns arbitrary JSON into records the model-card paths understand
pub struct GenericAbsorber;

impl GenericAbsorber {
    /// Splits a generic document into elements.
    ///
    /// A document with a `components` array contributes one element per
    /// entry, and every entry without a purl is reported as unresolvable.
    /// Any other document is a single element: matched when it has a purl,
    /// document-level otherwise.
    pub fn split<'a>(
        document: &'a Value,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> GenericElements<'a> {
        if let Some(components) = document.get("components").and_then(Value::as_array) {
            for (position, element) in components.iter().enumerate() {
                if !has_purl(element) {
                    diagnostics.push(Diagnostic::UnresolvableIdentifier {
                        side: Side::Incoming,
                        position,
                        reason: "generic element has no purl".to_string(),
                    });
                }
            }
            return GenericElements {
                matchable: components.iter().collect(),
                document_level: None,
            };
        }

        if has_purl(document) {
            GenericElements {
                matchable: vec![document],
                document_level: None,
            }
        } else {
            GenericElements {
                matchable: Vec::new(),
                document_level: Some(document),
            }
        }
    }

    /// Wraps an element's fields as a minimal model card:
    /// `{modelParameters: {}, properties: [{name, value}]}`.
    ///
    /// The identifying `purl` key is not copied into the properties.
    /// Nested objects are flattened to dotted names.
    pub fn to_model_card_component(element: &Value) -> Value {
        let mut properties = Vec::new();
        if let Some(fields) = element.as_object() {
            flatten_into("", fields, &mut properties);
        }

        let mut component = element.clone();
        let card = json!({
            "modelParameters": {},
            "properties": properties,
        });
        match component.as_object_mut() {
            Some(object) => {
                object.insert("modelCard".to_string(), card);
            }
            None => component = json!({ "modelCard": card }),
        }
        component
    }
}

fn has_purl(element: &Value) -> bool {
    element.get("purl").and_then(Value::as_str).is_some()
}

fn flatten_into(prefix: &str, fields: &Map<String, Value>, out: &mut Vec<Value>) {
    for (key, value) in fields {
        if prefix.is_empty() && key == "purl" {
            continue;
        }
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(nested) if !nested.is_empty() => flatten_into(&name, nested, out),
            _ => out.push(json!({ "name": name, "value": value })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_components_array() {
        let document = json!({"components": [{"purl": "pkg:pypi/a"}, {"purl": "pkg:pypi/b"}]});
        let mut diagnostics = Vec::new();

        let elements = GenericAbsorber::split(&document, &mut diagnostics);

        assert_eq!(elements.matchable.len(), 2);
        assert!(elements.document_level.is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_split_reports_purl_less_array_entries() {
        let document = json!({"components": [
            {"name": "unrelated-a", "task": "a"},
            {"purl": "pkg:pypi/b"},
            {"name": "unrelated-c"}
        ]});
        let mut diagnostics = Vec::new();

        let elements = GenericAbsorber::split(&document, &mut diagnostics);

        assert_eq!(elements.matchable.len(), 3);
        assert!(elements.document_level.is_none());
        let positions: Vec<usize> = diagnostics
            .iter()
            .filter_map(|diagnostic| match diagnostic {
                Diagnostic::UnresolvableIdentifier {
                    side: Side::Incoming,
                    position,
                    ..
                } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_split_whole_object_without_purl_is_document_level() {
        let document = json!({"x": 1});
        let mut diagnostics = Vec::new();

        let elements = GenericAbsorber::split(&document, &mut diagnostics);

        assert_eq!(
            elements,
            GenericElements {
                matchable: Vec::new(),
                document_level: Some(&document),
            }
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_split_whole_object_with_purl_is_matchable() {
        let document = json!({"purl": "pkg:pypi/a", "task": "qa"});
        let mut diagnostics = Vec::new();

        let elements = GenericAbsorber::split(&document, &mut diagnostics);

        assert_eq!(elements.matchable, vec![&document]);
        assert!(elements.document_level.is_none());
    }

    #[test]
    fn test_model_card_from_flat_object() {
        let component = GenericAbsorber::to_model_card_component(&json!({"x": 1}));
        assert_eq!(
            component["modelCard"],
            json!({"modelParameters": {}, "properties": [{"name": "x", "value": 1}]})
        );
    }

    #[test]
    fn test_model_card_skips_purl_and_flattens_nested() {
        let element = json!({
            "purl": "pkg:huggingface/org/model",
            "task": "text-generation",
            "training": {"dataset": "wiki", "epochs": 3},
            "tags": ["nlp", "chat"],
            "empty": {}
        });
        let component = GenericAbsorber::to_model_card_component(&element);

        assert_eq!(component["purl"], "pkg:huggingface/org/model");
        assert_eq!(
            component["modelCard"]["properties"],
            json!([
                {"name": "task", "value": "text-generation"},
                {"name": "training.dataset", "value": "wiki"},
                {"name": "training.epochs", "value": 3},
                {"name": "tags", "value": ["nlp", "chat"]},
                {"name": "empty", "value": {}}
            ])
        );
    }

    #[test]
    fn test_non_object_element() {
        let component = GenericAbsorber::to_model_card_component(&json!("scalar"));
        assert_eq!(component["modelCard"]["properties"], json!([]));
    }
}

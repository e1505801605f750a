use serde_json::{Map, Value};
use std::collections::HashSet;

const MODEL_CARD: &str = "modelCard";
const MODEL_PARAMETERS: &str = "modelParameters";
const PROPERTIES: &str = "properties";

/// ModelCardMerger merges CycloneDX model cards between two components
/// of the same schema.
///
/// Parts of a model card touched here:
/// - `modelParameters` (architectureFamily, modelArchitecture, task, inputs, outputs)
/// - `properties`: `[{name, value}]`
pub struct ModelCardMerger;

impl ModelCardMerger {
    /// Returns `target` enriched with `incoming`'s model card.
    ///
    /// - No target card: the incoming card is adopted wholesale.
    /// - Otherwise `modelParameters` is replaced wholesale by the incoming
    ///   value, and incoming properties are appended when their `name` is not
    ///   already among the target's properties (values are not compared).
    ///
    /// Returns `None` when `incoming` carries no card or `target` is not an
    /// object, so the target is left as is.
    pub fn merge(target: &Value, incoming: &Value) -> Option<Value> {
        let incoming_card = incoming.get(MODEL_CARD)?;
        let mut merged = target.clone();
        let component = merged.as_object_mut()?;

        match component.get_mut(MODEL_CARD) {
            Some(Value::Object(card)) => Self::merge_cards(card, incoming_card),
            _ => {
                component.insert(MODEL_CARD.to_string(), incoming_card.clone());
            }
        }

        Some(merged)
    }

    fn merge_cards(card: &mut Map<String, Value>, incoming_card: &Value) {
        // TODO: merge modelParameters field-by-field once inputs/outputs need reconciling
        if let Some(parameters) = incoming_card.get(MODEL_PARAMETERS) {
            card.insert(MODEL_PARAMETERS.to_string(), parameters.clone());
        }

        let Some(incoming_properties) = incoming_card.get(PROPERTIES).and_then(Value::as_array)
        else {
            return;
        };

        let existing: HashSet<String> = card
            .get(PROPERTIES)
            .and_then(Value::as_array)
            .map(|properties| property_names(properties).map(str::to_string).collect())
            .unwrap_or_default();

        let additions: Vec<Value> = incoming_properties
            .iter()
            .filter(|property| {
                property
                    .get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| !existing.contains(name))
            })
            .cloned()
            .collect();

        if additions.is_empty() {
            return;
        }

        match card.get_mut(PROPERTIES) {
            Some(Value::Array(properties)) => properties.extend(additions),
            _ => {
                card.insert(PROPERTIES.to_string(), Value::Array(additions));
            }
        }
    }
}

fn property_names<'a>(properties: &'a [Value]) -> impl Iterator<Item = &'a str> + 'a {
    properties
        .iter()
        .filter_map(|property| property.get("name").and_then(Value::as_str))
}

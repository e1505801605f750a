use super::enricher::{child_object, records, root_object, EnrichOutcome, SbomEnricher};
use super::generic_absorber::GenericAbsorber;
use super::matcher::MatchIndex;
use super::model_card_merger::ModelCardMerger;
use crate::sbom_enrichment::domain::{
    wrap_as_cdx, wrap_as_elements, Diagnostic, SbomFormat, SbomItem,
};
use crate::shared::error::EnrichError;
use crate::shared::Result;
use serde_json::{json, Value};

/// Enricher for CycloneDX targets
///
/// - CycloneDX incoming: tool list appended, model cards merged
/// - generic JSON incoming: absorbed as synthesized model cards
/// - SPDX incoming: not implemented
pub struct CycloneDxEnricher;

impl CycloneDxEnricher {
    pub fn new() -> Self {
        Self
    }

    fn enrich_from_cyclonedx(
        &self,
        target: &mut Value,
        incoming: &Value,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<usize> {
        // duplicates are not detected: each incoming tool is assumed new
        append_tools(target, cyclonedx_tools(incoming))?;

        let incoming_components = wrap_as_cdx(records(incoming, "components"));
        merge_components(
            target,
            &incoming_components,
            diagnostics,
            |component, other| Ok(ModelCardMerger::merge(component, other)),
        )
    }

    fn enrich_from_spdx(&self) -> Result<usize> {
        Err(EnrichError::NotImplemented {
            target: SbomFormat::CycloneDx.to_string(),
            incoming: SbomFormat::Spdx.to_string(),
        }
        .into())
    }

    fn absorb_generic(
        &self,
        target: &mut Value,
        incoming: &Value,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<usize> {
        let elements = GenericAbsorber::split(incoming, diagnostics);

        let mut enriched = merge_components(
            target,
            &wrap_as_elements(elements.matchable),
            diagnostics,
            |component, element| {
                Ok(ModelCardMerger::merge(
                    component,
                    &GenericAbsorber::to_model_card_component(element),
                ))
            },
        )?;

        if let Some(element) = elements.document_level {
            match document_subject(target) {
                Some(subject) => {
                    let card = GenericAbsorber::to_model_card_component(element);
                    if let Some(merged) = ModelCardMerger::merge(subject, &card) {
                        *subject = merged;
                        enriched += 1;
                    }
                }
                None => diagnostics.push(Diagnostic::UnanchoredElement {
                    reason: "element has no purl and the target has neither metadata.component nor a single component".to_string(),
                }),
            }
        }

        Ok(enriched)
    }
}

impl Default for CycloneDxEnricher {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomEnricher for CycloneDxEnricher {
    fn target_format(&self) -> SbomFormat {
        SbomFormat::CycloneDx
    }

    fn enrich(&self, mut target: Value, incoming: &Value) -> Result<EnrichOutcome> {
        let incoming_format = SbomFormat::detect(incoming);
        let mut diagnostics = Vec::new();

        let enriched_count = match incoming_format {
            SbomFormat::CycloneDx => {
                self.enrich_from_cyclonedx(&mut target, incoming, &mut diagnostics)?
            }
            SbomFormat::Spdx => self.enrich_from_spdx()?,
            SbomFormat::Unknown => {
                diagnostics.push(Diagnostic::IncomingSchemaFallback {
                    reason: "Incoming document is neither CycloneDX nor SPDX".to_string(),
                });
                self.absorb_generic(&mut target, incoming, &mut diagnostics)?
            }
        };

        Ok(EnrichOutcome {
            document: target,
            incoming_format,
            enriched_count,
            diagnostics,
        })
    }
}

/// Tool entries of a CycloneDX document.
///
/// Reads `metadata.tools.components` (1.5+) and the legacy array form
/// `metadata.tools`.
pub(crate) fn cyclonedx_tools(document: &Value) -> Vec<&Value> {
    match document.pointer("/metadata/tools") {
        Some(Value::Array(legacy)) => legacy.iter().collect(),
        Some(tools) => records(tools, "components").iter().collect(),
        None => Vec::new(),
    }
}

/// Appends tool entries verbatim, keeping the target's tool-list shape
fn append_tools(target: &mut Value, tools: Vec<&Value>) -> Result<()> {
    if tools.is_empty() {
        return Ok(());
    }
    let additions: Vec<Value> = tools.into_iter().cloned().collect();
    let metadata = child_object(root_object(target)?, "metadata")?;

    match metadata.get_mut("tools") {
        Some(Value::Array(legacy)) => legacy.extend(additions),
        Some(Value::Object(tools)) => match tools.get_mut("components") {
            Some(Value::Array(components)) => components.extend(additions),
            Some(_) => {
                return Err(EnrichError::MalformedDocument {
                    reason: "'metadata.tools.components' is not an array".to_string(),
                }
                .into())
            }
            None => {
                tools.insert("components".to_string(), Value::Array(additions));
            }
        },
        Some(_) => {
            return Err(EnrichError::MalformedDocument {
                reason: "'metadata.tools' is neither an object nor an array".to_string(),
            }
            .into())
        }
        None => {
            metadata.insert("tools".to_string(), json!({ "components": additions }));
        }
    }
    Ok(())
}

fn merge_components<I, F>(
    target: &mut Value,
    incoming: &[I],
    diagnostics: &mut Vec<Diagnostic>,
    merge: F,
) -> Result<usize>
where
    I: SbomItem,
    F: FnMut(&Value, &Value) -> Result<Option<Value>>,
{
    let Some(components) = target.get_mut("components").and_then(Value::as_array_mut) else {
        return Ok(0);
    };
    let index = MatchIndex::build(&wrap_as_cdx(components), diagnostics);
    index.merge_incoming(components, incoming, diagnostics, merge)
}

/// The component a purl-less generic document describes:
/// `metadata.component`, else the only entry of `components`.
fn document_subject(target: &mut Value) -> Option<&mut Value> {
    if target
        .pointer("/metadata/component")
        .is_some_and(Value::is_object)
    {
        return target.pointer_mut("/metadata/component");
    }
    match target.get_mut("components")?.as_array_mut()?.as_mut_slice() {
        [only] => Some(only),
        _ => None,
    }
}

use super::cross_schema_translator::CrossSchemaTranslator;
use super::cyclonedx_enricher::cyclonedx_tools;
use super::enricher::{
    child_object, records, root_object, EnrichOutcome, EnrichmentSettings, SbomEnricher,
};
use super::generic_absorber::GenericAbsorber;
use super::matcher::MatchIndex;
use crate::sbom_enrichment::domain::{
    annotation_date, wrap_as_cdx, wrap_as_elements, wrap_as_spdx, Diagnostic, SbomFormat,
    SbomItem,
};
use crate::shared::error::EnrichError;
use crate::shared::Result;
use chrono::Utc;
use serde_json::Value;

const UNKNOWN_TOOL: &str = "unknown";

/// Enricher for SPDX targets
///
/// CycloneDX model-card properties are translated onto the matched SPDX
/// packages through the field mapping tables. Generic JSON goes through the
/// same translation after being shaped as a model card.
pub struct SpdxEnricher {
    settings: EnrichmentSettings,
}

impl SpdxEnricher {
    pub fn new(settings: EnrichmentSettings) -> Self {
        Self { settings }
    }

    fn translator<'a>(&'a self, date: &'a str) -> CrossSchemaTranslator<'a> {
        CrossSchemaTranslator::new(&self.settings.mappings, &self.settings.annotator, date)
            .with_excluded(self.settings.excluded_fields.iter().map(String::as_str))
    }

    fn enrich_from_cyclonedx(
        &self,
        target: &mut Value,
        incoming: &Value,
        date: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<usize> {
        append_creators(target, incoming)?;

        let translator = self.translator(date);
        let incoming_components = wrap_as_cdx(records(incoming, "components"));
        let mut translation_notes = Vec::new();

        let enriched = merge_packages(target, &incoming_components, diagnostics, |package, component| {
            translator.translate(package, component, &mut translation_notes)
        })?;

        diagnostics.extend(translation_notes);
        Ok(enriched)
    }

    fn enrich_from_spdx(&self) -> Result<usize> {
        Err(EnrichError::NotImplemented {
            target: SbomFormat::Spdx.to_string(),
            incoming: SbomFormat::Spdx.to_string(),
        }
        .into())
    }

    fn absorb_generic(
        &self,
        target: &mut Value,
        incoming: &Value,
        date: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<usize> {
        let translator = self.translator(date);
        let elements = GenericAbsorber::split(incoming, diagnostics);

        let mut translation_notes = Vec::new();
        let mut enriched = merge_packages(
            target,
            &wrap_as_elements(elements.matchable),
            diagnostics,
            |package, element| {
                translator.translate(
                    package,
                    &GenericAbsorber::to_model_card_component(element),
                    &mut translation_notes,
                )
            },
        )?;

        if let Some(element) = elements.document_level {
            match document_subject(target) {
                Some(subject) => {
                    let component = GenericAbsorber::to_model_card_component(element);
                    if let Some(replacement) =
                        translator.translate(subject, &component, &mut translation_notes)?
                    {
                        *subject = replacement;
                        enriched += 1;
                    }
                }
                None => diagnostics.push(Diagnostic::UnanchoredElement {
                    reason: "element has no purl and the target describes no single package"
                        .to_string(),
                }),
            }
        }

        diagnostics.extend(translation_notes);
        Ok(enriched)
    }
}

impl SbomEnricher for SpdxEnricher {
    fn target_format(&self) -> SbomFormat {
        SbomFormat::Spdx
    }

    fn enrich(&self, mut target: Value, incoming: &Value) -> Result<EnrichOutcome> {
        let incoming_format = SbomFormat::detect(incoming);
        let date = annotation_date(Utc::now());
        let mut diagnostics = Vec::new();

        let enriched_count = match incoming_format {
            SbomFormat::CycloneDx => {
                self.enrich_from_cyclonedx(&mut target, incoming, &date, &mut diagnostics)?
            }
            SbomFormat::Spdx => self.enrich_from_spdx()?,
            SbomFormat::Unknown => {
                diagnostics.push(Diagnostic::IncomingSchemaFallback {
                    reason: "Incoming document is neither CycloneDX nor SPDX".to_string(),
                });
                self.absorb_generic(&mut target, incoming, &date, &mut diagnostics)?
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

/// Records every incoming CycloneDX tool as a `Tool: <name>` creator
fn append_creators(target: &mut Value, incoming: &Value) -> Result<()> {
    let creators: Vec<Value> = cyclonedx_tools(incoming)
        .into_iter()
        .map(|tool| {
            let name = tool.get("name").and_then(Value::as_str).unwrap_or(UNKNOWN_TOOL);
            Value::String(format!("Tool: {}", name))
        })
        .collect();
    if creators.is_empty() {
        return Ok(());
    }

    let creation_info = child_object(root_object(target)?, "creationInfo")?;
    match creation_info.get_mut("creators") {
        Some(Value::Array(existing)) => existing.extend(creators),
        None => {
            creation_info.insert("creators".to_string(), Value::Array(creators));
        }
        Some(_) => {
            return Err(EnrichError::MalformedDocument {
                reason: "'creationInfo.creators' is not an array".to_string(),
            }
            .into())
        }
    }
    Ok(())
}

fn merge_packages<I, F>(
    target: &mut Value,
    incoming: &[I],
    diagnostics: &mut Vec<Diagnostic>,
    merge: F,
) -> Result<usize>
where
    I: SbomItem,
    F: FnMut(&Value, &Value) -> Result<Option<Value>>,
{
    let Some(packages) = target.get_mut("packages").and_then(Value::as_array_mut) else {
        return Ok(0);
    };
    let index = MatchIndex::build(&wrap_as_spdx(packages), diagnostics);
    index.merge_incoming(packages, incoming, diagnostics, merge)
}

/// The package the document describes: the single `documentDescribes`
/// entry, else the only package.
fn document_subject(target: &mut Value) -> Option<&mut Value> {
    let described = match target.get("documentDescribes").and_then(Value::as_array) {
        Some(ids) if ids.len() == 1 => ids[0].as_str().map(str::to_string),
        _ => None,
    };

    let packages = target.get_mut("packages")?.as_array_mut()?;
    match described {
        Some(id) => packages
            .iter_mut()
            .find(|package| package.get("SPDXID").and_then(Value::as_str) == Some(id.as_str())),
        None => match packages.as_mut_slice() {
            [only] => Some(only),
            _ => None,
        },
    }
}

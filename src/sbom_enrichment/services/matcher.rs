use crate::sbom_enrichment::domain::{Diagnostic, Purl, SbomItem, Side};
use crate::shared::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Index from version-less purl to target positions
///
/// When several target records normalize to the same identifier, every
/// one of them is enriched and a `DuplicateTargetIdentifier` diagnostic is
/// recorded; no record is silently shadowed.
#[derive(Debug, Default)]
pub struct MatchIndex {
    positions: HashMap<Purl, Vec<usize>>,
}

impl MatchIndex {
    /// Builds the index from wrapped target records.
    ///
    /// Records without a resolvable purl are left out of the index and
    /// reported as `UnresolvableIdentifier`.
    pub fn build<T: SbomItem>(targets: &[T], diagnostics: &mut Vec<Diagnostic>) -> Self {
        let mut positions: HashMap<Purl, Vec<usize>> = HashMap::new();
        // keys in first-seen order, so duplicate diagnostics are deterministic
        let mut order: Vec<Purl> = Vec::new();

        for (position, target) in targets.iter().enumerate() {
            let purls = match target.purls() {
                Ok(purls) => purls,
                Err(e) => {
                    diagnostics.push(Diagnostic::UnresolvableIdentifier {
                        side: Side::Target,
                        position,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            report_rejected(target, Side::Target, position, diagnostics);

            for purl in purls {
                let key = purl.without_version();
                let slots = positions.entry(key.clone()).or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                });
                if !slots.contains(&position) {
                    slots.push(position);
                }
            }
        }

        for key in &order {
            if let Some(slots) = positions.get(key).filter(|slots| slots.len() > 1) {
                diagnostics.push(Diagnostic::DuplicateTargetIdentifier {
                    purl: key.to_string(),
                    positions: slots.clone(),
                });
            }
        }

        Self { positions }
    }

    /// Target positions answering to any of the given purls, versions ignored
    pub fn lookup(&self, purls: &[Purl]) -> Vec<usize> {
        let mut found = Vec::new();
        for purl in purls {
            if let Some(slots) = self.positions.get(&purl.without_version()) {
                for &position in slots {
                    if !found.contains(&position) {
                        found.push(position);
                    }
                }
            }
        }
        found
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pairs every incoming record with its target records and merges them.
    ///
    /// `merge` receives `(target_record, incoming_record)`; a `Some`
    /// replacement is spliced into `targets` at the matched position.
    /// Incoming records with no match are dropped: enrichment only augments
    /// records that already exist. Returns the number of target records
    /// that were replaced.
    ///
    /// # Errors
    /// Stops at the first error returned by `merge`.
    pub fn merge_incoming<I, F>(
        &self,
        targets: &mut [Value],
        incoming: &[I],
        diagnostics: &mut Vec<Diagnostic>,
        mut merge: F,
    ) -> Result<usize>
    where
        I: SbomItem,
        F: FnMut(&Value, &Value) -> Result<Option<Value>>,
    {
        let mut replaced = 0;

        for (position, element) in incoming.iter().enumerate() {
            let purls = match element.purls() {
                Ok(purls) => purls,
                Err(e) => {
                    diagnostics.push(Diagnostic::UnresolvableIdentifier {
                        side: Side::Incoming,
                        position,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            report_rejected(element, Side::Incoming, position, diagnostics);

            for index in self.lookup(&purls) {
                let Some(target) = targets.get(index) else {
                    continue;
                };
                if let Some(replacement) = merge(target, element.raw())? {
                    targets[index] = replacement;
                    replaced += 1;
                }
            }
        }

        Ok(replaced)
    }
}

fn report_rejected<T: SbomItem>(
    record: &T,
    side: Side,
    position: usize,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for rejected in record.rejected_purls() {
        diagnostics.push(Diagnostic::IgnoredIdentifier {
            side,
            position,
            reason: rejected.to_string(),
        });
    }
}

/// Enrichment core: pure document transformations, no I/O
///
/// - `domain`: identifiers, schema detection, mapping tables, diagnostics
/// - `services`: matching, model-card merge, cross-schema translation and
///   the per-target enrichers
pub mod domain;
pub mod services;

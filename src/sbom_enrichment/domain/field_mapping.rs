use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;

const BUILTIN_GENERAL_TABLE: &str = include_str!("mappings/spdx_2_3.json");
const BUILTIN_AI_TABLE: &str = include_str!("mappings/spdx_ai.json");

#[derive(Debug, Deserialize)]
struct MappingEntry {
    #[serde(rename = "SPDX_Equivalent", default)]
    spdx_equivalent: Option<String>,
}

/// Lookup table from a CycloneDX/model-card field name to its SPDX name
///
/// Entries whose equivalent is `null` are kept so the table round-trips,
/// but `lookup` treats them as unmapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMappingTable {
    entries: HashMap<String, Option<String>>,
}

impl FieldMappingTable {
    /// Parses a table of the form `{"field": {"SPDX_Equivalent": "name" | null}}`
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        let raw: HashMap<String, MappingEntry> = serde_json::from_str(content)?;
        Ok(Self {
            entries: raw
                .into_iter()
                .map(|(field, entry)| (field, entry.spdx_equivalent))
                .collect(),
        })
    }

    /// SPDX 2.3 package fields
    pub fn builtin_general() -> Result<Self> {
        Self::from_json_str(BUILTIN_GENERAL_TABLE)
            .context("Built-in SPDX 2.3 field mapping table is corrupt")
    }

    /// SPDX AI profile fields, rendered as annotations
    pub fn builtin_ai() -> Result<Self> {
        Self::from_json_str(BUILTIN_AI_TABLE)
            .context("Built-in SPDX AI field mapping table is corrupt")
    }

    pub fn lookup(&self, field: &str) -> Option<&str> {
        self.entries.get(field).and_then(Option::as_deref)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for FieldMappingTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Option<V>)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(field, equivalent)| (field.into(), equivalent.map(Into::into)))
                .collect(),
        }
    }
}

/// The two tables consulted by cross-schema translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMappings {
    pub general: FieldMappingTable,
    pub ai: FieldMappingTable,
}

impl FieldMappings {
    pub fn new(general: FieldMappingTable, ai: FieldMappingTable) -> Self {
        Self { general, ai }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            FieldMappingTable::builtin_general()?,
            FieldMappingTable::builtin_ai()?,
        ))
    }
}

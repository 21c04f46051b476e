use serde::{Deserialize, Deserializer, Serialize};

/// Display value used when category, manufacturer or generic is missing
pub const NOT_AVAILABLE: &str = "N/A";

/// One product as returned by the suggestion service
///
/// The catalog server sends `""` for missing relations, so empty strings
/// are read as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub generic: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub dosage_form: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub strength: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl SuggestionRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            manufacturer: None,
            generic: None,
            dosage_form: None,
            strength: None,
        }
    }

    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Manufacturer text, hidden when it falls back to "N/A"
    pub fn manufacturer_label(&self) -> Option<&str> {
        self.manufacturer
            .as_deref()
            .filter(|m| *m != NOT_AVAILABLE)
    }

    /// Generic name text, hidden when it falls back to "N/A"
    pub fn generic_label(&self) -> Option<&str> {
        self.generic.as_deref().filter(|g| *g != NOT_AVAILABLE)
    }
}

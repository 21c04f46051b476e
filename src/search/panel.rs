//! Suggestions panel model
//!
//! What the panel currently shows. Entries carry their own event bindings,
//! rebuilt every time the panel is rendered from a fresh result set, so no
//! handler outlives the list it was made for.

use super::record::SuggestionRecord;

/// What hovering or clicking an entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Highlight(usize),
    Navigate(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryBindings {
    pub on_hover: EntryAction,
    pub on_click: EntryAction,
}

/// One rendered suggestion, tagged with its product id and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub index: usize,
    pub product_id: i64,
    pub name: String,
    pub category: String,
    pub dosage_form: Option<String>,
    pub manufacturer: Option<String>,
    pub generic: Option<String>,
    pub strength: Option<String>,
}

impl SuggestionEntry {
    pub fn from_record(index: usize, record: &SuggestionRecord) -> Self {
        Self {
            index,
            product_id: record.id,
            name: record.name.clone(),
            category: record.category_label().to_string(),
            dosage_form: record.dosage_form.clone(),
            manufacturer: record.manufacturer_label().map(str::to_string),
            generic: record.generic_label().map(str::to_string),
            strength: record.strength.clone(),
        }
    }

    pub fn bindings(&self) -> EntryBindings {
        EntryBindings {
            on_hover: EntryAction::Highlight(self.index),
            on_click: EntryAction::Navigate(self.product_id),
        }
    }
}

/// Panel contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Hidden,
    /// Informational placeholder for an empty result set; not navigable
    NoResults { query: String },
    /// At least one entry
    Results(Vec<SuggestionEntry>),
}

impl Panel {
    /// Build the panel for a successful response
    pub fn from_records(records: &[SuggestionRecord], query: &str) -> Self {
        if records.is_empty() {
            return Panel::NoResults {
                query: query.to_string(),
            };
        }
        Panel::Results(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| SuggestionEntry::from_record(i, r))
                .collect(),
        )
    }

    pub fn is_shown(&self) -> bool {
        !matches!(self, Panel::Hidden)
    }

    /// True when arrow keys and Enter act on the list
    pub fn is_navigable(&self) -> bool {
        matches!(self, Panel::Results(entries) if !entries.is_empty())
    }

    pub fn entries(&self) -> &[SuggestionEntry] {
        match self {
            Panel::Results(entries) => entries,
            _ => &[],
        }
    }

    pub fn entry(&self, index: usize) -> Option<&SuggestionEntry> {
        self.entries().get(index)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod panel_tests;

//! Page element identifiers the widget binds to

use std::collections::HashSet;

pub const SEARCH_INPUT_ID: &str = "productSearchInput";
pub const CLEAR_BUTTON_ID: &str = "searchClearBtn";
pub const SUGGESTIONS_ID: &str = "searchSuggestions";
pub const SEARCH_FORM_ID: &str = "productSearchForm";
pub const SEARCH_CONTAINER_CLASS: &str = "navbar-search-container";

/// The set of element ids present on a page
#[derive(Debug, Clone, Default)]
pub struct PageElements {
    ids: HashSet<String>,
}

impl PageElements {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Every element the search widget uses
    pub fn full_search_bar() -> Self {
        Self::new([
            SEARCH_INPUT_ID,
            CLEAR_BUTTON_ID,
            SUGGESTIONS_ID,
            SEARCH_FORM_ID,
        ])
    }

    pub fn has(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn has_search_input(&self) -> bool {
        self.has(SEARCH_INPUT_ID)
    }
}

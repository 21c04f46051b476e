//! Search widget state machine
//!
//! Owns everything the live search needs between events: the input text,
//! clear button visibility, the suggestions panel, highlight and navigation
//! state, the single debounce slot and the request generation used to drop
//! stale responses.

use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use super::elements::PageElements;
use super::panel::{EntryAction, Panel};
use super::query::SearchText;
use super::record::SuggestionRecord;
use super::selection::SelectionState;
use crate::config::{DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_CHARS, SearchConfig};
use crate::error::SearchError;
use crate::navigation::NavigationTarget;
use crate::scroll::PanelScroll;

/// A fetch the host should issue to the suggestion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    /// Generation at the time the fetch was scheduled
    pub generation: u64,
}

/// Outcome of a fetch, delivered back to the widget
#[derive(Debug)]
pub struct FetchResponse {
    pub query: String,
    pub generation: u64,
    pub result: Result<Vec<SuggestionRecord>, SearchError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSettings {
    pub debounce_ms: u64,
    pub min_query_chars: usize,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

impl From<&SearchConfig> for WidgetSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            min_query_chars: config.min_query_chars,
        }
    }
}

pub struct SearchWidget {
    text: String,
    clear_button_visible: bool,
    panel: Panel,
    selection: SelectionState,
    scroll: PanelScroll,
    debouncer: Debouncer<String>,
    /// Bumped whenever the shown results stop matching what the user wants
    generation: u64,
    min_query_chars: usize,
}

impl SearchWidget {
    pub fn new(settings: WidgetSettings) -> Self {
        Self {
            text: String::new(),
            clear_button_visible: false,
            panel: Panel::Hidden,
            selection: SelectionState::new(),
            scroll: PanelScroll::new(),
            debouncer: Debouncer::new(settings.debounce_ms),
            generation: 0,
            min_query_chars: settings.min_query_chars,
        }
    }

    /// Bind to a page. Pages without a search input get no widget.
    pub fn attach(elements: &PageElements, settings: WidgetSettings) -> Option<Self> {
        if !elements.has_search_input() {
            log::debug!("No search input on page, search widget not initialized");
            return None;
        }
        Some(Self::new(settings))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear_button_visible(&self) -> bool {
        self.clear_button_visible
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// True only while a navigable result list is shown
    pub fn suggestions_visible(&self) -> bool {
        self.panel.is_navigable()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.selection.highlighted()
    }

    pub fn highlighted_index(&self) -> isize {
        self.selection.highlighted_index()
    }

    pub fn is_navigating(&self) -> bool {
        self.selection.is_navigating()
    }

    pub fn scroll(&self) -> &PanelScroll {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut PanelScroll {
        &mut self.scroll
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// How long the host may sleep before the pending fetch is due
    pub fn time_until_fetch(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// The input text changed
    pub fn on_input(&mut self, text: &str, now: Instant) {
        self.text = text.to_string();
        self.clear_button_visible = !text.is_empty();
        self.debouncer.cancel();
        self.generation = self.generation.wrapping_add(1);

        // A text edit ends any arrow-key gesture and drops the highlight
        self.selection.end_navigation();
        self.selection.clear_highlight();

        let search_text = SearchText::parse(text);
        if !search_text.is_searchable(self.min_query_chars) {
            self.hide_suggestions();
            return;
        }

        log::debug!(
            "Scheduling search for {:?} in {:?}",
            search_text.trimmed,
            self.debouncer.delay()
        );
        self.debouncer.schedule(search_text.trimmed, now);
    }

    /// Fire the pending fetch if its debounce window has elapsed
    pub fn poll_fetch(&mut self, now: Instant) -> Option<FetchRequest> {
        let query = self.debouncer.take_due(now)?;
        Some(FetchRequest {
            query,
            generation: self.generation,
        })
    }

    /// Apply a fetch outcome. Returns false if the response was stale and
    /// dropped.
    pub fn apply_response(&mut self, response: FetchResponse) -> bool {
        if response.generation != self.generation {
            log::debug!(
                "Dropping stale response for {:?} (generation {}, current {})",
                response.query,
                response.generation,
                self.generation
            );
            return false;
        }

        match response.result {
            Ok(records) => self.show_results(&records, &response.query),
            Err(e) => {
                log::error!("Search error for {:?}: {}", response.query, e);
                self.hide_suggestions();
            }
        }
        true
    }

    fn show_results(&mut self, records: &[SuggestionRecord], query: &str) {
        self.panel = Panel::from_records(records, query);

        if self.selection.is_navigating() {
            self.selection.clamp(self.panel.len());
        } else {
            self.selection.clear_highlight();
        }

        self.scroll.reset();
        if let Some(index) = self.selection.highlighted() {
            self.scroll.reveal(index);
        }
    }

    /// Hide the panel and clear the highlight
    pub fn hide_suggestions(&mut self) {
        self.panel = Panel::Hidden;
        self.selection.clear_highlight();
        self.scroll.reset();
    }

    /// Mouse moved over entry `index`
    pub fn hover(&mut self, index: usize) {
        let Some(entry) = self.panel.entry(index) else {
            return;
        };
        if let EntryAction::Highlight(i) = entry.bindings().on_hover {
            self.selection.highlight(i);
        }
    }

    /// Entry `index` was clicked
    pub fn click(&mut self, index: usize) -> Option<NavigationTarget> {
        let entry = self.panel.entry(index)?;
        match entry.bindings().on_click {
            EntryAction::Navigate(id) => Some(Self::navigate_to_product(id)),
            EntryAction::Highlight(_) => None,
        }
    }

    pub fn navigate_to_product(id: i64) -> NavigationTarget {
        NavigationTarget::Product(id)
    }

    /// Native form submission with the current text
    pub fn submit_form(&self) -> NavigationTarget {
        NavigationTarget::SearchPage(self.text.trim().to_string())
    }

    /// Reset the search box to empty
    pub fn clear_search(&mut self) {
        self.text.clear();
        self.clear_button_visible = false;
        self.debouncer.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.hide_suggestions();
    }

    /// Escape, or a click outside the search container
    ///
    /// Drops the pending search and any in-flight response too, so the panel
    /// stays closed until the text changes.
    pub fn dismiss(&mut self) {
        if self.debouncer.cancel() {
            log::debug!("Pending search cancelled by dismissal");
        }
        self.generation = self.generation.wrapping_add(1);
        self.hide_suggestions();
    }

    pub(super) fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub(super) fn cancel_pending_fetch(&mut self) {
        if self.debouncer.cancel() {
            log::debug!("Pending search cancelled by navigation");
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;

//! Keyboard contract of the search widget
//!
//! Only the four special keys are routed here; text editing keys go to the
//! input and come back through `on_input`.

use super::search_state::SearchWidget;
use crate::navigation::NavigationTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The widget acted on the key
    Handled,
    /// The key leaves the page
    Navigate(NavigationTarget),
    /// Nothing to do for this key in the current state
    Ignored,
}

impl SearchWidget {
    pub fn on_key(&mut self, key: WidgetKey) -> KeyOutcome {
        if !self.suggestions_visible() {
            return match key {
                WidgetKey::Enter => KeyOutcome::Navigate(self.submit_form()),
                _ => KeyOutcome::Ignored,
            };
        }

        let count = self.panel().len();
        match key {
            WidgetKey::ArrowDown => {
                self.cancel_pending_fetch();
                self.selection_mut().navigate_next(count);
                self.reveal_highlight();
                KeyOutcome::Handled
            }
            WidgetKey::ArrowUp => {
                self.cancel_pending_fetch();
                self.selection_mut().navigate_previous(count);
                self.reveal_highlight();
                KeyOutcome::Handled
            }
            WidgetKey::Enter => match self.highlighted().and_then(|i| self.panel().entry(i)) {
                Some(entry) => KeyOutcome::Navigate(Self::navigate_to_product(entry.product_id)),
                None => KeyOutcome::Navigate(self.submit_form()),
            },
            WidgetKey::Escape => {
                self.dismiss();
                KeyOutcome::Handled
            }
        }
    }

    fn reveal_highlight(&mut self) {
        if let Some(index) = self.highlighted() {
            self.scroll_mut().reveal(index);
        }
    }
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;

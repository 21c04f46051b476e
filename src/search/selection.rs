//! Highlight state for the suggestions panel
//!
//! Tracks the highlighted entry and whether the user is in the middle of
//! an arrow-key navigation gesture.

/// Highlight state for suggestion navigation
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Highlighted entry index (None = nothing highlighted)
    highlighted: Option<usize>,
    /// Set by arrow keys, cleared by any text edit
    navigating: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            highlighted: None,
            navigating: false,
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Highlight as a signed index, -1 meaning none
    pub fn highlighted_index(&self) -> isize {
        self.highlighted.map_or(-1, |i| i as isize)
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    /// Highlight a specific entry (mouse hover). Does not touch the
    /// navigation flag.
    pub fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    pub fn end_navigation(&mut self) {
        self.navigating = false;
    }

    /// Move the highlight forward, wrapping from the last entry to the first
    pub fn navigate_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.navigating = true;

        self.highlighted = match self.highlighted {
            Some(current) => Some((current + 1) % count),
            None => Some(0),
        };
    }

    /// Move the highlight backward, wrapping from the first entry to the last
    pub fn navigate_previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.navigating = true;

        self.highlighted = match self.highlighted {
            Some(0) | None => Some(count - 1),
            Some(current) => Some(current - 1),
        };
    }

    /// Keep the highlight inside a freshly rendered list of `count` entries
    pub fn clamp(&mut self, count: usize) {
        if let Some(current) = self.highlighted {
            self.highlighted = if count == 0 {
                None
            } else {
                Some(current.min(count - 1))
            };
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;

/// Scroll position of the suggestions panel, in entries
///
/// `reveal` keeps an entry in view with "nearest" semantics: the list only
/// moves when the entry is above or below the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelScroll {
    pub offset: usize,
    /// Number of entries that fit; 0 until the first render
    pub viewport: usize,
}

impl PanelScroll {
    pub fn new() -> Self {
        Self {
            offset: 0,
            viewport: 0,
        }
    }

    pub fn set_viewport(&mut self, entries: usize) {
        self.viewport = entries;
    }

    pub fn reveal(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if self.viewport > 0 && index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
    }

    /// Keep the offset valid for a list of `len` entries
    pub fn clamp(&mut self, len: usize) {
        let max_offset = len.saturating_sub(self.viewport.max(1));
        self.offset = self.offset.min(max_offset);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for PanelScroll {
    fn default() -> Self {
        Self::new()
    }
}

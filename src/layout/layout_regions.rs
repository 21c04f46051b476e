use ratatui::layout::Rect;

/// Clickable pieces of the search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    ClearButton,
    Suggestions,
}

/// Screen areas from the most recent render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub clear_button: Option<Rect>,
    pub suggestions: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget regions that are not drawn this frame
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

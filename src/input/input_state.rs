use ratatui::style::{Color, Modifier, Style};
use tui_textarea::TextArea;

/// Creates a single-line TextArea for the product search box
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text("Search products by name, manufacturer or generic");
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea
}

pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: create_search_textarea(),
        }
    }

    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the whole text, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(text);
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::{mouse_click, mouse_hover};
use crate::layout::region_at;
use crate::search::{KeyOutcome, WidgetKey};

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text, now),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(widget_key) = widget_key(key.code) {
            if let KeyOutcome::Navigate(target) = self.search.on_key(widget_key) {
                self.navigate(target);
            }
            return;
        }

        if is_line_break(&key) {
            return;
        }

        if self.input.textarea.input(key) {
            self.handle_search_input(now);
        }
    }

    /// Pasted text is inserted as one edit, flattened to a single line
    pub fn handle_paste_event(&mut self, text: String, now: Instant) {
        let flat: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if flat.is_empty() {
            return;
        }
        self.input.textarea.insert_str(&flat);
        self.handle_search_input(now);
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region, mouse),
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse)
            }
            _ => {}
        }
    }
}

fn widget_key(code: KeyCode) -> Option<WidgetKey> {
    match code {
        KeyCode::Down => Some(WidgetKey::ArrowDown),
        KeyCode::Up => Some(WidgetKey::ArrowUp),
        KeyCode::Enter => Some(WidgetKey::Enter),
        KeyCode::Esc => Some(WidgetKey::Escape),
        _ => None,
    }
}

/// Keys the textarea would turn into a second line
fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

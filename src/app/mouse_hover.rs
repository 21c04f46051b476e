//! Mouse hover handling
//!
//! Moving over a suggestion highlights it, same as the arrow keys.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;
use crate::search::search_render::entry_at_row;

pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if region != Some(Region::Suggestions) {
        return;
    }
    let Some(panel_area) = app.layout_regions.suggestions else {
        return;
    };

    if let Some(index) = entry_at_row(&app.search, panel_area, mouse.row) {
        app.search.hover(index);
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;

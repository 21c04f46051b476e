//! Mouse click handling
//!
//! Routes a left click to the clear button, a suggestion, or the outside of
//! the search bar.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;
use crate::search::search_render::entry_at_row;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::ClearButton) => click_clear_button(app),
        Some(Region::Suggestions) => click_suggestions(app, mouse),
        Some(Region::InputField) => {}
        None => app.search.dismiss(),
    }
}

fn click_clear_button(app: &mut App) {
    app.input.clear();
    app.search.clear_search();
}

fn click_suggestions(app: &mut App, mouse: MouseEvent) {
    let Some(panel_area) = app.layout_regions.suggestions else {
        return;
    };
    let Some(index) = entry_at_row(&app.search, panel_area, mouse.row) else {
        return;
    };
    if let Some(target) = app.search.click(index) {
        app.navigate(target);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;

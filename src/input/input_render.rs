//! Search box rendering
//!
//! Draws the input with the clear button glyph at its right edge and
//! records both areas for mouse hit testing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub const INPUT_HEIGHT: u16 = 3;
const CLEAR_BUTTON: &str = " ✕ ";
const CLEAR_BUTTON_WIDTH: u16 = 3;

/// Render the search input
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search products ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.layout_regions.input_field = Some(area);

    let show_clear = app.search.clear_button_visible() && inner.width > CLEAR_BUTTON_WIDTH;
    let text_area = if show_clear {
        let button = Rect {
            x: inner.x + inner.width - CLEAR_BUTTON_WIDTH,
            y: inner.y,
            width: CLEAR_BUTTON_WIDTH,
            height: 1.min(inner.height),
        };
        frame.render_widget(
            Paragraph::new(CLEAR_BUTTON).style(Style::default().fg(Color::Red)),
            button,
        );
        app.layout_regions.clear_button = Some(button);
        Rect {
            width: inner.width - CLEAR_BUTTON_WIDTH,
            ..inner
        }
    } else {
        app.layout_regions.clear_button = None;
        inner
    };

    frame.render_widget(&app.input.textarea, text_area);
}

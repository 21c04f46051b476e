use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::input_render::{self, INPUT_HEIGHT};
use crate::search::search_render;

const TITLE: &str = " Product Catalog";
const KEY_HINTS: [(&str, &str); 4] = [
    ("↑/↓", "navigate"),
    ("Enter", "open"),
    ("Esc", "close"),
    ("Ctrl+C", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let area = frame.area();
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
        let (title_area, input_area, footer_area) = (layout[0], layout[1], layout[3]);

        render_title(frame, title_area);
        input_render::render_field(self, frame, input_area);

        // The panel may grow down to the footer
        let bounds = Rect {
            height: footer_area.y.saturating_sub(area.y),
            ..area
        };
        self.layout_regions.suggestions =
            search_render::render_panel(&mut self.search, frame, input_area, bounds);

        render_footer(frame, footer_area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, action) in KEY_HINTS {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!("{} ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

//! Suggestions panel rendering
//!
//! Draws the panel as a bordered popup directly below the search input.
//! Each entry takes two rows: name on the first, badges and details on the
//! second. Record text is stripped of control characters before drawing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::escape;
use super::panel::{Panel, SuggestionEntry};
use super::search_state::SearchWidget;
use crate::widgets::popup;

pub const ENTRY_HEIGHT: u16 = 2;
const MAX_VISIBLE_ENTRIES: usize = 10;
const BORDER_HEIGHT: u16 = 2;
const CAPSULE_ICON: &str = "💊 ";
const NO_RESULTS_ICON: &str = "🔍 ";
const ELLIPSIS: char = '…';

/// Render the suggestions panel below `anchor`
///
/// Returns the area drawn, or None if the panel is hidden or does not fit.
pub fn render_panel(
    widget: &mut SearchWidget,
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
) -> Option<Rect> {
    let content_height = match widget.panel() {
        Panel::Hidden => return None,
        Panel::NoResults { .. } => 1,
        Panel::Results(entries) => {
            entries.len().min(MAX_VISIBLE_ENTRIES) as u16 * ENTRY_HEIGHT
        }
    };

    let area = popup::popup_below_anchor(anchor, bounds, content_height + BORDER_HEIGHT);
    if area.height <= BORDER_HEIGHT {
        return None;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let no_results_query = match widget.panel() {
        Panel::NoResults { query } => Some(query.clone()),
        _ => None,
    };

    let lines: Vec<Line> = match no_results_query {
        Some(query) => vec![no_results_line(&query, width)],
        None => {
            let visible = ((inner.height / ENTRY_HEIGHT) as usize).min(MAX_VISIBLE_ENTRIES);
            let len = widget.panel().len();
            widget.scroll_mut().set_viewport(visible);
            widget.scroll_mut().clamp(len);

            let offset = widget.scroll().offset;
            let highlighted = widget.highlighted();
            widget
                .panel()
                .entries()
                .iter()
                .skip(offset)
                .take(visible)
                .flat_map(|entry| entry_lines(entry, highlighted == Some(entry.index), width))
                .collect()
        }
    };

    popup::clear_area(frame, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
    Some(area)
}

/// Entry index under a screen row inside the drawn panel
pub fn entry_at_row(widget: &SearchWidget, panel_area: Rect, row: u16) -> Option<usize> {
    let inner_top = panel_area.y.saturating_add(1);
    let inner_bottom = panel_area.y.saturating_add(panel_area.height).saturating_sub(1);
    if row < inner_top || row >= inner_bottom {
        return None;
    }

    let index = widget.scroll().offset + ((row - inner_top) / ENTRY_HEIGHT) as usize;
    (index < widget.panel().len()).then_some(index)
}

fn no_results_line(query: &str, width: usize) -> Line<'static> {
    let text = format!("No products found for \"{}\"", escape::terminal(query));
    Line::from(vec![
        Span::raw(NO_RESULTS_ICON),
        Span::styled(
            truncate_to_width(&text, width.saturating_sub(NO_RESULTS_ICON.width())),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ])
}

fn entry_lines(entry: &SuggestionEntry, highlighted: bool, width: usize) -> [Line<'static>; 2] {
    let name_width = width.saturating_sub(CAPSULE_ICON.width());
    let header = Line::from(vec![
        Span::styled(CAPSULE_ICON, Style::default().fg(Color::Cyan)),
        Span::styled(
            truncate_to_width(&escape::terminal(&entry.name), name_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut details = vec![Span::styled(
        format!(" {} ", escape::terminal(&entry.category)),
        Style::default().fg(Color::White).bg(Color::DarkGray),
    )];
    if let Some(dosage_form) = &entry.dosage_form {
        details.push(Span::raw(" "));
        details.push(Span::styled(
            format!(" {} ", escape::terminal(dosage_form)),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    }
    let muted = Style::default().fg(Color::Gray);
    for text in [&entry.manufacturer, &entry.generic, &entry.strength]
        .into_iter()
        .flatten()
    {
        details.push(Span::styled(format!("  {}", escape::terminal(text)), muted));
    }

    let line_style = if highlighted {
        Style::default().bg(Color::Blue)
    } else {
        Style::default()
    };

    [header.style(line_style), Line::from(details).style(line_style)]
}

/// Cut `text` to at most `max_width` display columns, ending with an
/// ellipsis when shortened
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;

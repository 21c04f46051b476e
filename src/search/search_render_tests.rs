//! Tests for suggestions panel rendering

use std::time::{Duration, Instant};

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use super::*;
use crate::search::{FetchResponse, SuggestionRecord, WidgetKey, WidgetSettings};

const ANCHOR: Rect = Rect {
    x: 0,
    y: 0,
    width: 50,
    height: 3,
};

fn widget_with(records: Vec<SuggestionRecord>) -> SearchWidget {
    let mut widget = SearchWidget::new(WidgetSettings::default());
    let start = Instant::now();
    widget.on_input("query", start);
    let request = widget.poll_fetch(start + Duration::from_millis(300)).unwrap();
    widget.apply_response(FetchResponse {
        query: request.query,
        generation: request.generation,
        result: Ok(records),
    });
    widget
}

fn numbered(count: usize) -> Vec<SuggestionRecord> {
    (0..count)
        .map(|i| SuggestionRecord::new(i as i64, format!("Item{:02}", i)))
        .collect()
}

fn render(widget: &mut SearchWidget, height: u16) -> (Option<Rect>, Buffer) {
    let backend = TestBackend::new(50, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut drawn = None;
    terminal
        .draw(|frame| {
            let bounds = frame.area();
            drawn = render_panel(widget, frame, ANCHOR, bounds);
        })
        .unwrap();
    (drawn, terminal.backend().buffer().clone())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_hidden_panel_draws_nothing() {
    let mut widget = SearchWidget::new(WidgetSettings::default());
    let (drawn, _) = render(&mut widget, 20);
    assert!(drawn.is_none());
}

#[test]
fn test_no_results_line() {
    let mut widget = widget_with(vec![]);
    let (drawn, buffer) = render(&mut widget, 20);

    assert_eq!(drawn, Some(Rect::new(0, 3, 50, 3)));
    assert!(buffer_text(&buffer).contains("No products found for \"query\""));
}

#[test]
fn test_entry_shows_name_and_badges() {
    let mut record = SuggestionRecord::new(1, "Aspirin");
    record.category = Some("Pain Relief".to_string());
    record.manufacturer = Some("Acme".to_string());
    let mut widget = widget_with(vec![record]);

    let (drawn, buffer) = render(&mut widget, 20);
    let text = buffer_text(&buffer);

    assert_eq!(drawn, Some(Rect::new(0, 3, 50, 4)));
    assert!(text.contains("Aspirin"));
    assert!(text.contains(" Pain Relief "));
    assert!(text.contains("Acme"));
}

#[test]
fn test_control_characters_are_not_drawn() {
    let mut widget = widget_with(vec![SuggestionRecord::new(1, "Bad\u{1b}[2JName")]);
    let (_, buffer) = render(&mut widget, 20);
    let text = buffer_text(&buffer);

    assert!(text.contains("Bad[2JName"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_panel_limited_to_ten_entries() {
    let mut widget = widget_with(numbered(15));
    let (drawn, buffer) = render(&mut widget, 40);
    let text = buffer_text(&buffer);

    assert_eq!(drawn.unwrap().height, 10 * ENTRY_HEIGHT + 2);
    assert!(text.contains("Item09"));
    assert!(!text.contains("Item10"));
    assert_eq!(widget.scroll().viewport, 10);
}

#[test]
fn test_small_terminal_limits_viewport_and_scrolls() {
    let mut widget = widget_with(numbered(6));
    // 3 input rows + 2 border rows leave room for 2 entries in 9 rows
    render(&mut widget, 9);
    assert_eq!(widget.scroll().viewport, 2);

    widget.on_key(WidgetKey::ArrowUp);
    let (_, buffer) = render(&mut widget, 9);
    let text = buffer_text(&buffer);

    assert_eq!(widget.scroll().offset, 4);
    assert!(text.contains("Item05"));
    assert!(!text.contains("Item00"));
}

#[test]
fn test_entry_at_row_maps_two_rows_per_entry() {
    let mut widget = widget_with(numbered(3));
    let (drawn, _) = render(&mut widget, 20);
    let area = drawn.unwrap();

    assert_eq!(entry_at_row(&widget, area, area.y), None);
    assert_eq!(entry_at_row(&widget, area, area.y + 1), Some(0));
    assert_eq!(entry_at_row(&widget, area, area.y + 2), Some(0));
    assert_eq!(entry_at_row(&widget, area, area.y + 3), Some(1));
    assert_eq!(entry_at_row(&widget, area, area.y + 6), Some(2));
    assert_eq!(entry_at_row(&widget, area, area.y + 7), None);
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("Paracetamol", 20), "Paracetamol");
    assert_eq!(truncate_to_width("Paracetamol", 6), "Parac…");
    assert_eq!(truncate_to_width("Paracetamol", 0), "");
}

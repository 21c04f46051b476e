use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below `anchor`, as wide as the anchor, clipped to
/// the bottom of `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let available = bounds
        .y
        .saturating_add(bounds.height)
        .saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;

//! HTML rendering of the suggestions panel
//!
//! Produces the inner markup of the `searchSuggestions` container for hosts
//! that embed the widget in a web page. Every interpolated value is escaped.
//! Entries expose their bindings as `data-` attributes instead of inline
//! handlers.

use super::elements::{SEARCH_CONTAINER_CLASS, SUGGESTIONS_ID};
use super::escape;
use super::panel::{Panel, SuggestionEntry};

/// Render the search container holding the suggestions element, with its
/// display state set from the panel
pub fn render_container(panel: &Panel, highlighted: Option<usize>) -> String {
    let display = if panel.is_shown() { "block" } else { "none" };
    format!(
        "<div class=\"{}\">\n<div id=\"{}\" style=\"display: {}\">\n{}\n</div>\n</div>",
        SEARCH_CONTAINER_CLASS,
        SUGGESTIONS_ID,
        display,
        render_panel(panel, highlighted)
    )
}

/// Render the panel contents. A hidden panel renders as an empty string.
pub fn render_panel(panel: &Panel, highlighted: Option<usize>) -> String {
    match panel {
        Panel::Hidden => String::new(),
        Panel::NoResults { query } => render_no_results(query),
        Panel::Results(entries) => entries
            .iter()
            .map(|entry| render_entry(entry, highlighted == Some(entry.index)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_no_results(query: &str) -> String {
    format!(
        r#"<div class="suggestion-item no-results"><i class="bi bi-search me-2"></i><span>No products found for "{}"</span></div>"#,
        escape::html(query)
    )
}

fn render_entry(entry: &SuggestionEntry, highlighted: bool) -> String {
    let class = if highlighted {
        "suggestion-item highlighted"
    } else {
        "suggestion-item"
    };

    let mut details = format!(
        r#"<span class="badge bg-secondary me-2">{}</span>"#,
        escape::html(&entry.category)
    );
    if let Some(dosage_form) = &entry.dosage_form {
        details.push_str(&format!(
            r#"<span class="badge bg-info me-2"><i class="bi bi-capsule-pill me-1"></i>{}</span>"#,
            escape::html(dosage_form)
        ));
    }
    if let Some(manufacturer) = &entry.manufacturer {
        details.push_str(&format!(
            r#"<span class="text-muted"><i class="bi bi-building me-1"></i>{}</span>"#,
            escape::html(manufacturer)
        ));
    }
    if let Some(generic) = &entry.generic {
        details.push_str(&format!(
            r#"<span class="text-muted ms-2"><i class="bi bi-pill me-1"></i>{}</span>"#,
            escape::html(generic)
        ));
    }
    if let Some(strength) = &entry.strength {
        details.push_str(&format!(
            r#"<span class="text-muted ms-2"><i class="bi bi-info-circle me-1"></i>{}</span>"#,
            escape::html(strength)
        ));
    }

    format!(
        r#"<div class="{class}" data-product-id="{id}" data-index="{index}"><div class="suggestion-item-header"><i class="bi bi-capsule me-2 text-primary"></i><strong>{name}</strong></div><div class="suggestion-item-details">{details}</div></div>"#,
        class = class,
        id = entry.product_id,
        index = entry.index,
        name = escape::html(&entry.name),
        details = details,
    )
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;

//! Tests for the suggestions panel model

use super::*;

fn aspirin() -> SuggestionRecord {
    let mut record = SuggestionRecord::new(1, "Aspirin");
    record.category = Some("Pain Relief".to_string());
    record
}

#[test]
fn test_empty_records_give_no_results_placeholder() {
    let panel = Panel::from_records(&[], "zzz");
    assert_eq!(
        panel,
        Panel::NoResults {
            query: "zzz".to_string()
        }
    );
    assert!(panel.is_shown());
    assert!(!panel.is_navigable());
    assert!(panel.is_empty());
}

#[test]
fn test_records_become_indexed_entries() {
    let panel = Panel::from_records(&[aspirin(), SuggestionRecord::new(9, "Napa")], "a");

    assert!(panel.is_navigable());
    assert_eq!(panel.len(), 2);
    let second = panel.entry(1).unwrap();
    assert_eq!(second.index, 1);
    assert_eq!(second.product_id, 9);
    assert_eq!(second.category, "N/A");
}

#[test]
fn test_entry_fields_follow_display_fallbacks() {
    let panel = Panel::from_records(&[aspirin()], "aspirin");
    let entry = panel.entry(0).unwrap();

    assert_eq!(entry.name, "Aspirin");
    assert_eq!(entry.category, "Pain Relief");
    assert_eq!(entry.dosage_form, None);
    assert_eq!(entry.manufacturer, None);
    assert_eq!(entry.generic, None);
    assert_eq!(entry.strength, None);
}

#[test]
fn test_bindings_target_entry_index_and_product() {
    let panel = Panel::from_records(&[aspirin(), SuggestionRecord::new(42, "Zinc")], "z");
    let bindings = panel.entry(1).unwrap().bindings();

    assert_eq!(bindings.on_hover, EntryAction::Highlight(1));
    assert_eq!(bindings.on_click, EntryAction::Navigate(42));
}

#[test]
fn test_hidden_panel_has_no_entries() {
    let panel = Panel::default();
    assert!(!panel.is_shown());
    assert!(!panel.is_navigable());
    assert!(panel.entry(0).is_none());
}

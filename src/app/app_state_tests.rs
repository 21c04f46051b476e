//! Tests for app_state

use std::time::{Duration, Instant};

use mockito::Server;

use crate::config::Config;
use crate::navigation::NavigationTarget;
use crate::service::{SuggestionClient, endpoint, spawn_worker};
use crate::test_utils::test_helpers::{
    ASPIRIN_JSON, app_with_results, mock_search, records, test_app,
};

use super::*;

#[test]
fn test_new_app_starts_idle() {
    let app = test_app();

    assert_eq!(app.input.text(), "");
    assert!(!app.search.suggestions_visible());
    assert!(!app.should_quit());
    assert!(app.navigation().is_none());
}

#[test]
fn test_app_uses_configured_debounce() {
    let mut config = Config::default();
    config.search.debounce_ms = 50;
    let mut app = App::new(&config);
    let start = Instant::now();

    app.input.set_text("asp");
    app.handle_search_input(start);

    assert_eq!(app.search.time_until_fetch(start), Some(Duration::from_millis(50)));
}

#[test]
fn test_handle_search_input_forwards_input_text() {
    let mut app = test_app();
    app.input.set_text("napa");
    app.handle_search_input(Instant::now());

    assert_eq!(app.search.text(), "napa");
    assert!(app.search.clear_button_visible());
    assert!(app.search.has_pending_fetch());
}

#[test]
fn test_tick_before_due_keeps_fetch_pending() {
    let mut app = test_app();
    let start = Instant::now();
    app.input.set_text("napa");
    app.handle_search_input(start);

    app.tick(start + Duration::from_millis(100));

    assert!(app.search.has_pending_fetch());
}

#[test]
fn test_tick_without_worker_drops_due_fetch() {
    let mut app = test_app();
    let start = Instant::now();
    app.input.set_text("napa");
    app.handle_search_input(start);

    app.tick(start + Duration::from_millis(300));

    assert!(!app.search.has_pending_fetch());
    assert!(!app.search.suggestions_visible());
}

#[test]
fn test_poll_timeout_idle() {
    let app = test_app();
    assert_eq!(app.poll_timeout(Instant::now()), MAX_POLL);
}

#[test]
fn test_poll_timeout_bounded_by_pending_fetch() {
    let mut app = test_app();
    let start = Instant::now();
    app.input.set_text("napa");
    app.handle_search_input(start);

    assert_eq!(
        app.poll_timeout(start + Duration::from_millis(280)),
        Duration::from_millis(20)
    );
    assert_eq!(app.poll_timeout(start + Duration::from_millis(100)), MAX_POLL);
}

#[test]
fn test_navigate_sets_target_and_quits() {
    let mut app = app_with_results("prod", records(2));

    app.navigate(NavigationTarget::Product(2));

    assert!(app.should_quit());
    assert_eq!(app.take_navigation(), Some(NavigationTarget::Product(2)));
    assert_eq!(app.take_navigation(), None);
}

#[test]
fn test_tick_round_trip_through_worker() {
    let mut server = Server::new();
    let mock = mock_search(&mut server, "asp", 200, ASPIRIN_JSON);
    let base_url = endpoint::parse_base_url(&server.url()).unwrap();
    let client = SuggestionClient::new(base_url, Duration::from_secs(5)).unwrap();

    let mut app = test_app();
    app.set_worker(spawn_worker(client).unwrap());

    let start = Instant::now();
    app.input.set_text("asp");
    app.handle_search_input(start);
    app.tick(start + Duration::from_millis(300));

    let deadline = Instant::now() + Duration::from_secs(5);
    while !app.search.suggestions_visible() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
        app.tick(Instant::now());
    }

    assert!(app.search.suggestions_visible());
    assert_eq!(app.search.panel().entries()[0].name, "Aspirin");
    mock.assert();

    if let Some(worker) = app.take_worker() {
        worker.shutdown();
    }
}

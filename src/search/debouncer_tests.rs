//! Tests for the single-slot debouncer

use std::time::{Duration, Instant};

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_new_has_nothing_pending() {
    let debouncer: Debouncer<String> = Debouncer::new(300);
    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.delay(), ms(300));
    assert!(debouncer.time_until_due(Instant::now()).is_none());
}

#[test]
fn test_not_due_before_window() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule("as".to_string(), start);

    assert!(debouncer.take_due(start + ms(299)).is_none());
    assert!(debouncer.is_pending());
}

#[test]
fn test_due_at_window_and_fires_once() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule("as".to_string(), start);

    assert_eq!(debouncer.take_due(start + ms(300)), Some("as".to_string()));
    assert!(debouncer.take_due(start + ms(600)).is_none());
    assert!(!debouncer.is_pending());
}

#[test]
fn test_reschedule_replaces_payload_and_restarts_window() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule("as".to_string(), start);
    debouncer.schedule("asp".to_string(), start + ms(200));

    // The first window would have elapsed here, but it was replaced
    assert!(debouncer.take_due(start + ms(350)).is_none());
    assert_eq!(
        debouncer.take_due(start + ms(500)),
        Some("asp".to_string())
    );
}

#[test]
fn test_cancel_reports_whether_pending() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    assert!(!debouncer.cancel());

    debouncer.schedule(1u32, start);
    assert!(debouncer.cancel());
    assert!(debouncer.take_due(start + ms(1000)).is_none());
}

#[test]
fn test_time_until_due_counts_down_and_saturates() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule((), start);

    assert_eq!(debouncer.time_until_due(start + ms(100)), Some(ms(200)));
    assert_eq!(debouncer.time_until_due(start + ms(400)), Some(Duration::ZERO));
}

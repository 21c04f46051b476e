use std::time::{Duration, Instant};

use crate::config::Config;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::navigation::NavigationTarget;
use crate::search::{SearchWidget, WidgetSettings};
use crate::service::WorkerHandle;

/// Longest the event loop waits for input before ticking again
const MAX_POLL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub input: InputState,
    pub search: SearchWidget,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    navigation: Option<NavigationTarget>,
    worker: Option<WorkerHandle>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            search: SearchWidget::new(WidgetSettings::from(&config.search)),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            navigation: None,
            worker: None,
        }
    }

    /// Attach the worker that answers fetches. Without one, due fetches are
    /// dropped.
    pub fn set_worker(&mut self, worker: WorkerHandle) {
        self.worker = Some(worker);
    }

    pub fn take_worker(&mut self) -> Option<WorkerHandle> {
        self.worker.take()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn navigation(&self) -> Option<&NavigationTarget> {
        self.navigation.as_ref()
    }

    pub fn take_navigation(&mut self) -> Option<NavigationTarget> {
        self.navigation.take()
    }

    /// Leave the page for `target`
    pub(super) fn navigate(&mut self, target: NavigationTarget) {
        log::debug!("Navigation requested: {:?}", target);
        self.navigation = Some(target);
        self.should_quit = true;
    }

    /// Forward the input box text to the search widget
    pub fn handle_search_input(&mut self, now: Instant) {
        let text = self.input.text().to_string();
        self.search.on_input(&text, now);
    }

    /// Fire a due fetch and apply any finished ones
    pub fn tick(&mut self, now: Instant) {
        if let Some(request) = self.search.poll_fetch(now) {
            match &self.worker {
                Some(worker) => {
                    if !worker.send(request) {
                        log::warn!("Suggestion worker stopped, search not sent");
                    }
                }
                None => {
                    log::debug!("No suggestion worker, dropping search for {:?}", request.query)
                }
            }
        }

        while let Some(response) = self.worker.as_ref().and_then(WorkerHandle::try_recv) {
            self.search.apply_response(response);
        }
    }

    /// How long the event loop may block waiting for terminal input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.search
            .time_until_fetch(now)
            .map_or(MAX_POLL, |due| due.min(MAX_POLL))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

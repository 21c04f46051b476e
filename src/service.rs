//! Suggestion service access
//!
//! `client` talks HTTP to the catalog; `worker` runs fetches on a background
//! thread so the UI loop never blocks on the network.

mod client;
pub mod endpoint;
mod worker;

pub use client::SuggestionClient;
pub use worker::{WorkerHandle, spawn_worker};

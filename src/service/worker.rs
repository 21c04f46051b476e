//! Suggestion worker thread
//!
//! Owns a current-thread tokio runtime. Each request becomes its own task,
//! so a slow response never delays a newer one and in-flight requests are
//! never cancelled; the widget decides which responses still matter.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::client::SuggestionClient;
use crate::error::SearchError;
use crate::search::{FetchRequest, FetchResponse};

/// Main-thread side of the worker
pub struct WorkerHandle {
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    cancel_token: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Queue a fetch. Returns false if the worker has stopped.
    pub fn send(&self, request: FetchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Next finished fetch, if any
    pub fn try_recv(&self) -> Option<FetchResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("Suggestion worker disconnected");
                None
            }
        }
    }

    /// Stop the worker and wait for its thread to exit
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.cancel_token.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::warn!("Suggestion worker thread panicked");
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn the suggestion worker thread
pub fn spawn_worker(client: SuggestionClient) -> Result<WorkerHandle, SearchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let worker_token = cancel_token.clone();

    let thread = std::thread::Builder::new()
        .name("suggestion-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(client, request_rx, response_tx, worker_token));
            log::debug!("Suggestion worker shutting down");
        })?;

    Ok(WorkerHandle {
        request_tx,
        response_rx,
        cancel_token,
        thread: Some(thread),
    })
}

async fn worker_loop(
    client: SuggestionClient,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: mpsc::Sender<FetchResponse>,
    cancel_token: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else {
                    break;
                };
                let client = client.clone();
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let result = client.search(&request.query).await;
                    // The main thread may already be gone
                    let _ = response_tx.send(FetchResponse {
                        query: request.query,
                        generation: request.generation,
                        result,
                    });
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

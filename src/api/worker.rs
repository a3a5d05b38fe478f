//! Background sync worker
//!
//! Network calls run on a dedicated thread so the UI never blocks. The main
//! thread sends [`SyncRequest`]s over an unbounded channel and drains
//! [`SyncEvent`]s from a std channel on every tick. Requests are independent
//! of each other: a slow list fetch must not delay the next count poll, so
//! each request runs as its own task on the worker's runtime.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::ApiClient;
use super::types::{MarkAllRead, Notification, UnreadCount};

/// A request from the UI to the sync worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncRequest {
    /// Poll the unread counter (startup and every poll interval)
    FetchUnreadCount,
    /// Load the latest notifications (tray open, refresh, after mark-all-read)
    FetchLatest,
    /// Mark every notification as read
    MarkAllRead,
}

/// A completed request, reported back to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    UnreadCount(UnreadCount),
    Latest(Vec<Notification>),
    MarkedAllRead(MarkAllRead),
    /// The request failed; the UI logs and keeps its last-known state
    Failed {
        request: SyncRequest,
        message: String,
    },
}

/// Spawn the sync worker thread
///
/// The thread owns a single-threaded tokio runtime and lives until the
/// request channel is closed (i.e. the app dropped its sender).
pub fn spawn_worker(
    client: ApiClient,
    request_rx: UnboundedReceiver<SyncRequest>,
    event_tx: Sender<SyncEvent>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start sync runtime: {e}");
                return;
            }
        };

        runtime.block_on(worker_loop(client, request_rx, event_tx));
    })
}

/// Accept requests until the channel closes, spawning one task per request
async fn worker_loop(
    client: ApiClient,
    mut request_rx: UnboundedReceiver<SyncRequest>,
    event_tx: Sender<SyncEvent>,
) {
    while let Some(request) = request_rx.recv().await {
        let client = client.clone();
        let event_tx = event_tx.clone();

        tokio::spawn(async move {
            let event = execute(&client, request).await;
            if event_tx.send(event).is_err() {
                // Main thread is gone; the loop above will close soon as well
                log::debug!("Dropping sync event, UI receiver disconnected");
            }
        });
    }

    log::debug!("Sync worker shutting down");
}

/// Run one request against the API and fold the outcome into an event
async fn execute(client: &ApiClient, request: SyncRequest) -> SyncEvent {
    let result = match request {
        SyncRequest::FetchUnreadCount => client
            .unread_count()
            .await
            .map(SyncEvent::UnreadCount),
        SyncRequest::FetchLatest => client.latest().await.map(SyncEvent::Latest),
        SyncRequest::MarkAllRead => client.mark_all_read().await.map(SyncEvent::MarkedAllRead),
    };

    match result {
        Ok(event) => event,
        Err(e) => {
            log::warn!("Sync request {request:?} failed: {e}");
            SyncEvent::Failed {
                request,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

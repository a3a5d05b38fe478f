//! Client side of the admin portal's notification API
//!
//! `types` mirrors the JSON payloads, `client` speaks HTTP, and `worker`
//! runs the client on a background thread with channel plumbing to the UI.

mod client;
mod types;
mod worker;

pub use client::{ApiClient, ApiError};
pub use types::{LatestNotifications, MarkAllRead, Notification, Priority, UnreadCount};
pub use worker::{SyncEvent, SyncRequest, spawn_worker};

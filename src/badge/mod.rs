//! Unread-count badge
//!
//! The little counter in the header line: visible exactly while something is
//! unread, red once critical notifications are waiting, frozen at its
//! last-known value when the network goes away.

mod render;
mod state;

pub use render::{badge_spans, sync_status_span};
pub use state::BadgeState;

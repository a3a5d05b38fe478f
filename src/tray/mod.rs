//! Notification tray
//!
//! The dropdown under the badge. Lazily loaded: opening it (or pressing
//! refresh) fetches the latest notifications; the poll timer never touches
//! the list.

mod render;
mod state;

pub use render::render_popup;
pub use state::TrayState;

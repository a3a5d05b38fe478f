//! Transient alert banners
//!
//! Flash-message analog: short banner lines at the top of the screen that
//! dismiss themselves a few seconds after being raised. Used for the startup
//! notice and the mark-all-read confirmation.

mod render;
mod state;

pub use render::{alert_line, render_alerts};
pub use state::{Alert, AlertKind, AlertState};

//! Help popup with the key-binding reference

mod content;
mod render;
mod state;

pub use content::{HELP_ENTRIES, HELP_FOOTER};
pub use render::render_popup;
pub use state::HelpState;

mod events;
mod render;
mod state;
mod sync;

// Re-export public types
pub use state::App;

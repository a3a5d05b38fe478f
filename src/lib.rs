pub mod alert;
pub mod api;
pub mod app;
pub mod badge;
pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod tray;
pub mod widgets;


pub use app::App;
pub use error::BellhopError;

//! Configuration for bellhop
//!
//! Read from `~/.config/bellhop/config.toml`; every field has a default so
//! the tool runs without any file present. Session and CSRF secrets can come
//! from the environment instead of being written to disk.

mod storage;
mod types;

pub use storage::{
    ENV_CSRF_TOKEN, ENV_SESSION_ID, apply_secret_overrides, config_path, env_secret_overrides,
    load_config, load_config_from_path,
};
pub use types::{Config, PollConfig, ServerConfig, UiConfig};

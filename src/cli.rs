use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Command line flags; every flag overrides the corresponding config value
#[derive(Parser, Debug)]
#[command(name = "bellhop")]
#[command(about = "Terminal notification tray for the education center portal")]
#[command(version)]
pub struct Cli {
    /// Base URL of the portal, e.g. https://portal.example.de
    #[arg(short, long)]
    pub server: Option<String>,

    /// Read this config file instead of ~/.config/bellhop/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seconds between unread-count polls
    #[arg(short, long)]
    pub interval: Option<u64>,
}

impl Cli {
    /// Fold the flags into the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref server) = self.server {
            config.server.url = server.clone();
        }
        if let Some(interval) = self.interval {
            config.poll.interval_secs = interval;
        }
    }
}

//! wxmap core library
//!
//! Shared pieces for the feed and viewer crates:
//! - Configuration loading (XDG-compliant)
//! - Application-wide defaults

mod config;

pub use config::{find_config_file, get_xdg_config_path, load_config, ConfigSource};

/// Application name used for XDG paths
pub const APP_NAME: &str = "wxmap";

/// Default viewer port
pub const DEFAULT_VIEWER_PORT: u16 = 9810;

/// Default feed refresh interval (20 minutes)
pub const DEFAULT_REFRESH_INTERVAL: u64 = 1200;

/// Wall-clock period of one forecast slider playback tick, in milliseconds
pub const SLIDER_TICK_MILLIS: u64 = 1000;

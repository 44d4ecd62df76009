use clap::Parser;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use std::{env, time::Duration};
use time::{format_description::well_known::Iso8601, OffsetDateTime};
use wxmap_core::{
    find_config_file, load_config, ConfigSource, DEFAULT_REFRESH_INTERVAL, DEFAULT_VIEWER_PORT,
};

/// FIRs whose SIGMETs count as domestic when none is given in config.
pub const DEFAULT_DOMESTIC_FIRS: [&str; 4] = ["VIDF", "VABF", "VEGF", "VOMF"];

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "wxmap - Aviation weather map viewer (airports, METAR, TAF, SIGMET, forecast rasters)"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $WXMAP_CONFIG, ./viewer.toml,
    /// $XDG_CONFIG_HOME/wxmap/viewer.toml, /etc/wxmap/viewer.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "WXMAP_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(long, env = "WXMAP_HOST")]
    #[serde(alias = "domain")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WXMAP_PORT")]
    pub port: Option<String>,

    /// Where feeds are read from: an http(s) base URL or a local directory
    /// laid out as map/ and currentwx/
    #[arg(short, long, env = "WXMAP_FEED_BASE")]
    pub feed_base: Option<String>,

    /// Directory containing the viewer's static files (js, css, icons)
    #[arg(short, long, env = "WXMAP_UI_DIR")]
    pub ui_dir: Option<String>,

    /// Directory containing forecast raster images ({folder}/{hours}h_{suffix})
    #[arg(short, long, env = "WXMAP_IMAGE_DIR")]
    pub image_dir: Option<String>,

    /// Seconds between METAR/TAF refreshes
    #[arg(short, long, env = "WXMAP_REFRESH_INTERVAL")]
    pub refresh_interval: Option<u64>,

    /// HTTP User-Agent header for feed requests
    #[arg(long, env = "WXMAP_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Feed request timeout in seconds
    #[arg(long, env = "WXMAP_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    /// Comma separated FIR ids treated as domestic for the SIGMET placeholder
    #[arg(long, env = "WXMAP_DOMESTIC_FIRS", value_delimiter = ',')]
    pub domestic_firs: Option<Vec<String>>,
}

impl Cli {
    /// Get the effective configuration value with defaults
    pub fn host(&self) -> String {
        self.host.clone().unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_VIEWER_PORT.to_string())
    }

    pub fn feed_base(&self) -> String {
        self.feed_base
            .clone()
            .unwrap_or_else(|| "./feeds".to_string())
    }

    pub fn ui_dir(&self) -> String {
        self.ui_dir.clone().unwrap_or_else(|| "./ui".to_string())
    }

    pub fn image_dir(&self) -> String {
        self.image_dir
            .clone()
            .unwrap_or_else(|| "./images".to_string())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval.unwrap_or(DEFAULT_REFRESH_INTERVAL))
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("wxmap/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout.unwrap_or(30))
    }

    pub fn domestic_firs(&self) -> Vec<String> {
        match &self.domestic_firs {
            Some(firs) if !firs.is_empty() => firs
                .iter()
                .map(|fir| fir.trim().to_uppercase())
                .filter(|fir| !fir.is_empty())
                .collect(),
            _ => DEFAULT_DOMESTIC_FIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("WXMAP_CONFIG", "viewer.toml")
    };

    if let Some(path) = source.path() {
        log::info!("Loading config from: {}", path.display());
    }

    let file_config: Cli = load_config(&source).unwrap_or_default();
    merge_config(cli_args, file_config)
}

/// CLI args override file config (env vars are handled by clap)
fn merge_config(cli_args: Cli, file_config: Cli) -> Cli {
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        host: cli_args.host.or(file_config.host),
        port: cli_args.port.or(file_config.port),
        feed_base: cli_args.feed_base.or(file_config.feed_base),
        ui_dir: cli_args.ui_dir.or(file_config.ui_dir),
        image_dir: cli_args.image_dir.or(file_config.image_dir),
        refresh_interval: cli_args.refresh_interval.or(file_config.refresh_interval),
        user_agent: cli_args.user_agent.or(file_config.user_agent),
        request_timeout: cli_args.request_timeout.or(file_config.request_timeout),
        domestic_firs: cli_args.domestic_firs.or(file_config.domestic_firs),
    }
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let now = OffsetDateTime::now_utc()
                .format(&Iso8601::DEFAULT)
                .unwrap_or_default();
            out.finish(format_args!(
                "[{} {}] {}: {}",
                now,
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}

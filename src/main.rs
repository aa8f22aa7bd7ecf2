// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

mod app;

use app::{App, Command};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use flora_admin::logging::{self, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use flora_admin::session::{default_session_path, SessionStore};
use flora_admin::user_config::{load_user_config, UserConfig};
use flora_admin::{ApiClient, HttpTransport};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Chez Flora back-office from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend base URL (overrides `[api] base_url` in config.toml)
    #[arg(long, env = "FLORA_API_URL")]
    api_url: Option<String>,

    /// Session file (default: ~/.flora-admin/session.json)
    #[arg(long, env = "FLORA_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Enable JSON log format (for log aggregation)
    #[arg(long, env = "FLORA_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "FLORA_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.flora-admin/logs)
    #[arg(long, env = "FLORA_LOG_DIR")]
    log_dir: Option<String>,

    /// Mirror log lines to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let defaults = LogConfig::default();
    let log_dir = args.log_dir.map_or(defaults.log_dir, PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        console: args.verbose,
        ..LogConfig::default()
    };

    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Load user-level config (~/.flora-admin/config.toml); file is optional.
    let user_cfg = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let base_url = args
        .api_url
        .unwrap_or_else(|| user_cfg.api.base_url.clone());
    let timeout = user_cfg.api.timeout()?;

    let session_path = match args.session_file {
        Some(path) => path,
        None => default_session_path()?,
    };
    let session = SessionStore::init(&session_path)
        .await
        .wrap_err_with(|| format!("Failed to read session from {}", session_path.display()))?;

    let transport = HttpTransport::new(&base_url, timeout)?;
    let client = ApiClient::new(Arc::new(transport), Arc::new(session));
    info!("Using back-office API at {}", base_url);

    App::new(client, user_cfg.reorder).run(args.command).await
}

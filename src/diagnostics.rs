//! Diagnostics helpers.
//!
//! Provides:
//! - **About info**: build metadata plus the resolved API URL, currency and log dir
//! - **Log rotation helpers**: used by `lib.rs` to configure rolling log files.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::api::normalize_base_url;
use crate::config::ClientConfig;

/// Maximum number of log files to retain.
pub const MAX_LOG_FILES: usize = 10;

/// File name prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "food-order";

const APP_DIR_NAME: &str = "com.thesmall.food-order";
const ENV_LOG_DIR: &str = "FOOD_ORDER_LOG_DIR";

/// Build metadata plus the API endpoint and currency this client runs with.
pub fn get_about_info(config: &ClientConfig) -> Value {
    json!({
        "version": env!("CARGO_PKG_VERSION"),
        "buildTimestamp": env!("BUILD_TIMESTAMP"),
        "gitSha": env!("BUILD_GIT_SHA"),
        "platform": std::env::consts::OS,
        "apiUrl": normalize_base_url(&config.base_url),
        "timeoutSecs": config.timeout.as_secs(),
        "currency": {
            "symbol": config.currency.symbol,
            "sample": config.currency.format(1234.5),
        },
        "logDir": get_log_dir().display().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Log rotation
// ---------------------------------------------------------------------------

/// Log directory: `FOOD_ORDER_LOG_DIR` when set, otherwise the per-user
/// application data directory.
pub fn get_log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(ENV_LOG_DIR).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let data_home = std::env::var_os("LOCALAPPDATA")
        .or_else(|| std::env::var_os("XDG_DATA_HOME"))
        .map(PathBuf::from);
    let base = match data_home {
        Some(base) => base,
        #[cfg(target_os = "windows")]
        None => PathBuf::from(std::env::var_os("USERPROFILE").unwrap_or_else(|| ".".into()))
            .join("AppData")
            .join("Local"),
        #[cfg(not(target_os = "windows"))]
        None => PathBuf::from(std::env::var_os("HOME").unwrap_or_else(|| ".".into()))
            .join(".local")
            .join("share"),
    };
    base.join(APP_DIR_NAME).join("logs")
}

/// Prune old log files in the default log directory.
pub fn prune_old_logs() {
    prune_logs_in(&get_log_dir(), MAX_LOG_FILES);
}

/// Keep only the `keep` most recently modified log files in `log_dir`.
pub fn prune_logs_in(log_dir: &Path, keep: usize) {
    if !log_dir.exists() {
        return;
    }

    let mut log_files: Vec<(PathBuf, std::time::SystemTime)> = Vec::new();
    if let Ok(entries) = fs::read_dir(log_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let is_log = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|name| name.starts_with(LOG_FILE_PREFIX))
                .unwrap_or(false);
            if is_log {
                let modified = entry
                    .metadata()
                    .ok()
                    .and_then(|m| m.modified().ok())
                    .unwrap_or(std::time::UNIX_EPOCH);
                log_files.push((path, modified));
            }
        }
    }

    // Sort newest first
    log_files.sort_by(|a, b| b.1.cmp(&a.1));

    for (path, _) in log_files.iter().skip(keep) {
        if let Err(e) = fs::remove_file(path) {
            warn!("Failed to prune log file {}: {e}", path.display());
        }
    }
}

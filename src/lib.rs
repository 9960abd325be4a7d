//! Food ordering client core.
//!
//! Controller logic for the order-history and food-detail/checkout screens:
//! fetch from the food REST API, shape the data for display, keep the cart
//! quantities for one visit, and submit the finished order. Rendering and
//! routing stay with the host, which plugs in through [`api::FoodApi`] and
//! [`navigation::Navigator`].

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod api;
pub mod config;
pub mod currency;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod navigation;
pub mod pricing;
pub mod screens;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{FoodApi, HttpFoodApi};
pub use config::ClientConfig;
pub use currency::{format_currency, CurrencyFormat};
pub use error::{ApiError, ScreenError};
pub use navigation::{LogNavigator, Navigator, Screen};
pub use pricing::Selection;
pub use screens::{FoodDetailScreen, OrderHistoryScreen};

const DEFAULT_LOG_FILTER: &str = "info,food_order_client=debug";

/// Initialize structured logging (console + rolling file).
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for as long as the process should log to disk.
pub fn init_logging() -> WorkerGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Prune old log files before setting up the appender
    diagnostics::prune_old_logs();

    let log_dir = diagnostics::get_log_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&log_dir, diagnostics::LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    info!("Starting food-order client v{}", env!("CARGO_PKG_VERSION"));
    guard
}

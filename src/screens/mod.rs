//! Screen controllers: fetch, shape, and hold render-ready state.
//!
//! Each controller owns its state exclusively and is driven through
//! `&mut self`, so there is at most one in-flight load per screen. The host
//! cancels the handle returned by `unmount_handle()` when the screen goes
//! away; responses arriving after that are dropped without touching state.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub mod food_detail;
pub mod order_history;

pub use food_detail::{ExtraLine, FoodDetailScreen, FoodDetailView};
pub use order_history::{OrderHistoryScreen, OrderRow};

/// Mount lifetime of one screen instance.
#[derive(Debug, Clone)]
pub(crate) struct Lifecycle {
    token: CancellationToken,
    session_id: Uuid,
}

impl Lifecycle {
    pub(crate) fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            session_id: Uuid::new_v4(),
        }
    }

    pub(crate) fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub(crate) fn handle(&self) -> CancellationToken {
        self.token.clone()
    }

    pub(crate) fn is_unmounted(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run `fut` unless the screen is unmounted first. `None` means the
    /// result must be discarded.
    pub(crate) async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            out = fut => Some(out),
        }
    }
}

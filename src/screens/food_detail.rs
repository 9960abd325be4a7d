//! Food detail / checkout screen.
//!
//! Loads a food with its extras catalog and the favorites collection, keeps
//! the quantities for the current visit, and submits the finished order.

use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::Lifecycle;
use crate::api::FoodApi;
use crate::currency::CurrencyFormat;
use crate::error::{Result, ScreenError};
use crate::models::{Extra, ExtraId, Food, FoodId, OrderSubmission};
use crate::navigation::{Navigator, Screen};
use crate::pricing::Selection;

/// Screen the navigation history is reset to after a finished order.
pub const LANDING_SCREEN: Screen = Screen::Dashboard;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtraLine {
    #[serde(flatten)]
    pub extra: Extra,
    pub formatted_value: String,
}

/// Render-ready snapshot of the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodDetailView {
    pub food: Option<Food>,
    pub formatted_price: Option<String>,
    pub extras: Vec<ExtraLine>,
    pub food_quantity: u32,
    pub is_favorite: bool,
    pub total: f64,
    pub display_total: String,
}

pub struct FoodDetailScreen<A, N> {
    api: Arc<A>,
    navigator: Arc<N>,
    currency: CurrencyFormat,
    food: Option<Food>,
    selection: Selection,
    is_favorite: bool,
    loaded_id: Option<FoodId>,
    lifecycle: Lifecycle,
}

impl<A: FoodApi, N: Navigator> FoodDetailScreen<A, N> {
    pub fn new(api: Arc<A>, navigator: Arc<N>, currency: CurrencyFormat) -> Self {
        Self {
            api,
            navigator,
            currency,
            food: None,
            selection: Selection::default(),
            is_favorite: false,
            loaded_id: None,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Fetch the food and the favorites collection concurrently.
    ///
    /// Either fetch may fail independently; failures are logged and the
    /// screen keeps whatever part did load. A failed food fetch leaves no
    /// food (placeholder render) and an empty selection.
    pub async fn load(&mut self, food_id: FoodId) {
        let session = self.lifecycle.session_id();
        let api = &self.api;
        let fetched = self
            .lifecycle
            .guard(async { tokio::join!(api.get_food(food_id), api.list_favorites()) })
            .await;
        let Some((food, favorites)) = fetched else {
            debug!(%session, food_id, "food detail unmounted, discarding response");
            return;
        };

        match food {
            Ok(mut food) => {
                let extras = std::mem::take(&mut food.extras);
                info!(%session, food_id, extras = extras.len(), "food loaded");
                self.selection = Selection::with_extras(extras);
                self.food = Some(food);
                self.loaded_id = Some(food_id);
            }
            Err(e) => {
                error!(%session, food_id, error = %e, "failed to load food");
                self.selection = Selection::default();
                self.food = None;
                self.loaded_id = None;
            }
        }

        match favorites {
            Ok(favorites) => {
                self.is_favorite = favorites.iter().any(|f| f.id == food_id);
            }
            Err(e) => {
                error!(%session, food_id, error = %e, "failed to load favorites");
                self.is_favorite = false;
            }
        }
    }

    /// Route parameter changed. Reloads only when `food_id` differs from
    /// the last successfully loaded food; returns whether a load ran.
    pub async fn set_food_id(&mut self, food_id: FoodId) -> bool {
        if self.loaded_id == Some(food_id) {
            return false;
        }
        self.load(food_id).await;
        true
    }

    pub fn increment_extra(&mut self, id: ExtraId) {
        self.selection = self.selection.increment_extra(id);
    }

    pub fn decrement_extra(&mut self, id: ExtraId) {
        self.selection = self.selection.decrement_extra(id);
    }

    pub fn increment_food(&mut self) {
        self.selection = self.selection.increment_food();
    }

    pub fn decrement_food(&mut self) {
        self.selection = self.selection.decrement_food();
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn extras(&self) -> &[Extra] {
        self.selection.extras()
    }

    pub fn food_quantity(&self) -> u32 {
        self.selection.food_quantity()
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn total(&self) -> f64 {
        let price = self.food.as_ref().map(|f| f.price).unwrap_or(0.0);
        self.selection.total(price)
    }

    pub fn display_total(&self) -> String {
        self.currency.format(self.total())
    }

    pub fn view(&self) -> FoodDetailView {
        let extras = self
            .selection
            .extras()
            .iter()
            .map(|extra| ExtraLine {
                formatted_value: self.currency.format(extra.value),
                extra: extra.clone(),
            })
            .collect();
        FoodDetailView {
            formatted_price: self.food.as_ref().map(|f| self.currency.format(f.price)),
            food: self.food.clone(),
            extras,
            food_quantity: self.selection.food_quantity(),
            is_favorite: self.is_favorite,
            total: self.total(),
            display_total: self.display_total(),
        }
    }

    /// Add or remove the food from favorites.
    ///
    /// The local flag flips only after the remote call succeeds; on failure
    /// it stays as it was and the error is returned. Returns the new flag.
    pub async fn toggle_favorite(&mut self) -> Result<bool> {
        if self.lifecycle.is_unmounted() {
            return Err(ScreenError::Unmounted);
        }
        let food = self.food.as_ref().ok_or(ScreenError::FoodNotLoaded)?;
        let session = self.lifecycle.session_id();
        let food_id = food.id;
        let was_favorite = self.is_favorite;

        let api = &self.api;
        let call = async {
            if was_favorite {
                api.remove_favorite(food_id).await
            } else {
                api.add_favorite(&food.favorite_snapshot()).await
            }
        };
        let result = self
            .lifecycle
            .guard(call)
            .await
            .ok_or(ScreenError::Unmounted)?;

        match result {
            Ok(()) => {
                self.is_favorite = !was_favorite;
                info!(%session, food_id, favorite = self.is_favorite, "favorite toggled");
                Ok(self.is_favorite)
            }
            Err(e) => {
                warn!(%session, food_id, error = %e, "favorite toggle failed, keeping state");
                Err(e.into())
            }
        }
    }

    /// Submit the order, then reset navigation to the landing screen.
    ///
    /// Navigation happens only after the create call resolved successfully.
    pub async fn finish_order(&self) -> Result<OrderSubmission> {
        if self.lifecycle.is_unmounted() {
            return Err(ScreenError::Unmounted);
        }
        let food = self.food.as_ref().ok_or(ScreenError::FoodNotLoaded)?;
        let session = self.lifecycle.session_id();
        let submission = self.selection.submission(food);

        let result = self
            .lifecycle
            .guard(self.api.create_order(&submission))
            .await
            .ok_or(ScreenError::Unmounted)?;

        match result {
            Ok(()) => {
                info!(
                    %session,
                    product_id = submission.product_id,
                    quantity = submission.quantity,
                    extras = submission.extras.len(),
                    total = %self.display_total(),
                    "order submitted"
                );
                self.navigator.reset_to(LANDING_SCREEN);
                Ok(submission)
            }
            Err(e) => {
                error!(%session, product_id = submission.product_id, error = %e, "order submission failed");
                Err(e.into())
            }
        }
    }

    pub fn unmount_handle(&self) -> CancellationToken {
        self.lifecycle.handle()
    }
}

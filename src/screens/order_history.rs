//! Order history: `GET /orders` plus a display price per row.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::Lifecycle;
use crate::api::FoodApi;
use crate::currency::CurrencyFormat;
use crate::error::ApiError;
use crate::models::Order;

/// One display-ready history entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    #[serde(flatten)]
    pub order: Order,
    pub formatted_price: String,
}

pub struct OrderHistoryScreen<A> {
    api: Arc<A>,
    currency: CurrencyFormat,
    rows: Vec<OrderRow>,
    last_error: Option<ApiError>,
    loaded_at: Option<DateTime<Utc>>,
    lifecycle: Lifecycle,
}

impl<A: FoodApi> OrderHistoryScreen<A> {
    pub fn new(api: Arc<A>, currency: CurrencyFormat) -> Self {
        Self {
            api,
            currency,
            rows: Vec::new(),
            last_error: None,
            loaded_at: None,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Fetch the order list. Never fails: on error the list is emptied and
    /// the error is logged and kept in [`last_error`](Self::last_error).
    pub async fn load(&mut self) -> &[OrderRow] {
        let session = self.lifecycle.session_id();
        let Some(result) = self.lifecycle.guard(self.api.list_orders()).await else {
            debug!(%session, "order history unmounted, discarding response");
            return &self.rows;
        };

        match result {
            Ok(orders) => {
                self.rows = format_rows(orders, &self.currency);
                self.last_error = None;
                self.loaded_at = Some(Utc::now());
                info!(%session, count = self.rows.len(), "order history loaded");
            }
            Err(e) => {
                error!(%session, error = %e, "failed to load order history");
                self.rows.clear();
                self.last_error = Some(e);
            }
        }
        &self.rows
    }

    pub fn rows(&self) -> &[OrderRow] {
        &self.rows
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// Time of the last successful load.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn unmount_handle(&self) -> CancellationToken {
        self.lifecycle.handle()
    }
}

/// Attach a display price to each order, keeping response order.
pub fn format_rows(orders: Vec<Order>, currency: &CurrencyFormat) -> Vec<OrderRow> {
    orders
        .into_iter()
        .map(|order| OrderRow {
            formatted_price: currency.format(order.price),
            order,
        })
        .collect()
}

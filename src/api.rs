//! Food API client.
//!
//! [`FoodApi`] is the seam the screen controllers depend on; [`HttpFoodApi`]
//! is the `reqwest` implementation talking JSON to the REST backend.

use std::future::Future;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{FavoriteFood, Food, FoodId, Order, OrderSubmission};

/// REST resources consumed by the screens.
pub trait FoodApi: Send + Sync {
    /// `GET /orders`
    fn list_orders(&self) -> impl Future<Output = Result<Vec<Order>, ApiError>> + Send;

    /// `GET /foods/{id}`
    fn get_food(&self, id: FoodId) -> impl Future<Output = Result<Food, ApiError>> + Send;

    /// `GET /favorites`
    fn list_favorites(&self) -> impl Future<Output = Result<Vec<FavoriteFood>, ApiError>> + Send;

    /// `POST /favorites`
    fn add_favorite(&self, food: &FavoriteFood)
        -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `DELETE /favorites/{id}`
    fn remove_favorite(&self, id: FoodId) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `POST /orders`
    fn create_order(
        &self,
        order: &OrderSubmission,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

// ---------------------------------------------------------------------------
// URL normalisation
// ---------------------------------------------------------------------------

/// Normalise the API base URL:
/// - ensure a scheme is present (https, or http for localhost)
/// - strip trailing slashes
pub fn normalize_base_url(url: &str) -> String {
    let mut url = url.trim().to_string();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        if url.starts_with("localhost") || url.starts_with("127.0.0.1") {
            url = format!("http://{url}");
        } else {
            url = format!("https://{url}");
        }
    }

    while url.ends_with('/') {
        url.pop();
    }

    url
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// Convert a `reqwest::Error` into a user-friendly transport error.
fn transport_error(url: &str, err: &reqwest::Error) -> ApiError {
    let message = if err.is_connect() {
        format!("Cannot reach food API at {url}")
    } else if err.is_timeout() {
        format!("Connection to {url} timed out")
    } else if err.is_builder() {
        format!("Invalid food API URL: {url}")
    } else {
        format!("Network error communicating with {url}: {err}")
    };
    ApiError::Transport {
        url: url.to_string(),
        message,
    }
}

/// Convert an HTTP status code into a user-friendly message.
fn status_message(status: StatusCode) -> String {
    match status.as_u16() {
        401 => "Not authorized by food API".to_string(),
        404 => "Resource not found".to_string(),
        s if s >= 500 => "Food API server error".to_string(),
        _ => "Unexpected response from food API".to_string(),
    }
}

/// Prefer the server's own `error`/`message` text when the body is JSON.
fn status_error(status: StatusCode, body_text: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body_text)
        .ok()
        .and_then(|json| {
            json.get("error")
                .or_else(|| json.get("message"))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| status_message(status));
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    base_url: String,
    client: Client,
}

impl HttpFoodApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            base_url: normalize_base_url(&config.base_url),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the raw body text of a 2xx response.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let full_url = format!("{}{path}", self.base_url);
        debug!(method = %method, url = %full_url, "food api request");

        let mut req = self
            .client
            .request(method.clone(), &full_url)
            .header("Accept", "application/json");
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| transport_error(&self.base_url, &e))?;
        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(
                method = %method,
                url = %full_url,
                status = status.as_u16(),
                "food api request failed"
            );
            return Err(status_error(status, &body_text));
        }
        Ok(body_text)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send::<()>(Method::GET, path, None).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
    }
}

impl FoodApi for HttpFoodApi {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("/orders").await
    }

    async fn get_food(&self, id: FoodId) -> Result<Food, ApiError> {
        self.get_json(&format!("/foods/{id}")).await
    }

    async fn list_favorites(&self) -> Result<Vec<FavoriteFood>, ApiError> {
        self.get_json("/favorites").await
    }

    async fn add_favorite(&self, food: &FavoriteFood) -> Result<(), ApiError> {
        self.send(Method::POST, "/favorites", Some(food)).await?;
        Ok(())
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, &format!("/favorites/{id}"), None)
            .await?;
        Ok(())
    }

    async fn create_order(&self, order: &OrderSubmission) -> Result<(), ApiError> {
        self.send(Method::POST, "/orders", Some(order)).await?;
        Ok(())
    }
}

//! Error types shared by the API client and the screen controllers.

use thiserror::Error;

/// Failure talking to the food API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, timeout, bad URL).
    #[error("{message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Invalid response from food API: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure of a user-triggered screen action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("No food is loaded on this screen")]
    FoodNotLoaded,

    #[error("Screen has been unmounted")]
    Unmounted,
}

pub type Result<T> = std::result::Result<T, ScreenError>;

use crate::types::order_status::OrderStatus;
use thiserror::Error;

/// Failure talking to one of the remote collaborators (backend, geocoder, router).
///
/// Payloads are kept as strings so the error can be cloned into actor messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

/// Errors surfaced to the user by the status dialog and the delivery tracker.
/// None of them is fatal: hosts show them as a transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KitchenError {
    #[error("cannot move order from '{from}' to '{to}'")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("could not locate the delivery address: {0}")]
    GeocodingFailed(String),
    #[error("could not fetch the driver location: {0}")]
    LocationFetchFailed(String),
    #[error("no route available between driver and destination")]
    RouteUnavailable,
    #[error("tracking stopped after {failures} consecutive failures")]
    TrackingAbandoned { failures: u32 },
    #[error("could not load the order: {0}")]
    OrderUnavailable(ApiError),
    #[error("could not update the order: {0}")]
    UpdateFailed(ApiError),
    #[error("order has not been loaded yet")]
    OrderNotLoaded,
}

/// Malformed value in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for {var}: '{value}'")]
pub struct ConfigError {
    pub var: String,
    pub value: String,
}

//! Clients for the remote collaborators: the kitchen backend, the address
//! geocoder and the routing engine. Responses are decoded into explicit
//! schemas and validated here, so callers only ever see typed values.

pub mod geocoder;
pub mod kitchen;
pub mod router;

use crate::constants::USER_AGENT;
use crate::errors::ApiError;
use crate::types::dtos::OrderDTO;
use crate::types::geo::{Coordinates, Route};
use crate::types::order_status::OrderStatus;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub use geocoder::NominatimGeocoder;
pub use kitchen::KitchenApiClient;
pub use router::OsrmRouter;

#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn fetch_order(&self, order_id: &str) -> Result<OrderDTO, ApiError>;

    async fn update_order_status(&self, order_id: &str, status: OrderStatus)
    -> Result<(), ApiError>;

    async fn fetch_driver_location(&self, order_id: &str) -> Result<Coordinates, ApiError>;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a free-text address to the first matching point.
    async fn geocode(&self, address: &str) -> Result<Coordinates, ApiError>;
}

#[async_trait]
pub trait RouteEngine: Send + Sync {
    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<Route, ApiError>;
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(ApiError::from)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        code: status.as_u16(),
        body,
    })
}

pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    ensure_success(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(join_url("http://a/api/", "/orders/1"), "http://a/api/orders/1");
        assert_eq!(join_url("http://a/api", "orders/1"), "http://a/api/orders/1");
    }
}

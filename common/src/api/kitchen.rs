use crate::api::{OrdersApi, decode_json, ensure_success, http_client};
use crate::errors::ApiError;
use crate::types::dtos::{DriverLocationResponse, OrderDTO, StatusUpdateRequest};
use crate::types::geo::Coordinates;
use crate::types::order_status::OrderStatus;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use std::time::Duration;

/// REST client for the kitchen backend.
///
/// The bearer token comes from the session; do not log it.
#[derive(Debug, Clone)]
pub struct KitchenApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl KitchenApiClient {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            http: http_client(timeout)?,
            base_url: base_url.into(),
            token,
        })
    }

    /// `{base}/orders/{id}[/{tail}]`, with the id percent-encoded as a single segment.
    fn order_url(&self, order_id: &str, tail: Option<&str>) -> Result<Url, ApiError> {
        let invalid_base =
            |reason: String| ApiError::Request(format!("invalid base url '{}': {}", self.base_url, reason));
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid_base(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid_base("cannot carry a path".into()))?;
            segments.pop_if_empty().push("orders").push(order_id);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl OrdersApi for KitchenApiClient {
    async fn fetch_order(&self, order_id: &str) -> Result<OrderDTO, ApiError> {
        let response = self
            .authorized(self.http.get(self.order_url(order_id, None)?))
            .send()
            .await?;
        decode_json(response).await
    }

    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        let response = self
            .authorized(self.http.patch(self.order_url(order_id, None)?))
            .json(&StatusUpdateRequest { status })
            .send()
            .await?;
        ensure_success(response).await.map(|_| ())
    }

    async fn fetch_driver_location(&self, order_id: &str) -> Result<Coordinates, ApiError> {
        let url = self.order_url(order_id, Some("location"))?;
        let response = self.authorized(self.http.get(url)).send().await?;
        let body: DriverLocationResponse = decode_json(response).await?;
        Coordinates::try_from(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::PATCH;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer, token: Option<&str>) -> KitchenApiClient {
        KitchenApiClient::new(
            server.base_url(),
            token.map(str::to_string),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn fetches_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/orders/a1")
                    .header("authorization", "Bearer tkn");
                then.status(200).json_body(json!({
                    "id": "a1",
                    "status": "preparing",
                    "delivery_address": "Calle Falsa 123"
                }));
            })
            .await;

        let order = client(&server, Some("tkn")).fetch_order("a1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.delivery_address, "Calle Falsa 123");
    }

    #[tokio::test]
    async fn patches_status_with_wire_name() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/orders/a1")
                    .json_body(json!({ "status": "in-delivery" }));
                then.status(204);
            })
            .await;

        client(&server, None)
            .update_order_status("a1", OrderStatus::InDelivery)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_failure_carries_status_code() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PATCH).path("/orders/a1");
                then.status(409).body("order already delivered");
            })
            .await;

        let err = client(&server, None)
            .update_order_status("a1", OrderStatus::Cancelled)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                code: 409,
                body: "order already delivered".into()
            }
        );
    }

    #[tokio::test]
    async fn decodes_and_validates_driver_location() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/orders/a1/location");
                then.status(200).json_body(json!({ "location": [-34.61, -58.42] }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/orders/b2/location");
                then.status(200).json_body(json!({ "location": [200.0, -58.42] }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/orders/c3/location");
                then.status(200).json_body(json!({ "position": "unknown" }));
            })
            .await;

        let api = client(&server, None);
        let ok = api.fetch_driver_location("a1").await.unwrap();
        assert_eq!(ok, Coordinates::from((-34.61, -58.42)));
        assert!(matches!(
            api.fetch_driver_location("b2").await,
            Err(ApiError::InvalidPayload(_))
        ));
        assert!(matches!(
            api.fetch_driver_location("c3").await,
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn order_ids_are_a_single_path_segment() {
        let api = KitchenApiClient::new("http://kitchen.local/api/", None, Duration::from_secs(1))
            .unwrap();

        assert_eq!(
            api.order_url("a1", None).unwrap().as_str(),
            "http://kitchen.local/api/orders/a1"
        );
        assert_eq!(
            api.order_url("a/b?c#d", Some("location")).unwrap().as_str(),
            "http://kitchen.local/api/orders/a%2Fb%3Fc%23d/location"
        );
    }

    #[test]
    fn unusable_base_url_is_a_request_error() {
        let api = KitchenApiClient::new("not a url", None, Duration::from_secs(1)).unwrap();
        assert!(matches!(api.order_url("a1", None), Err(ApiError::Request(_))));
    }
}

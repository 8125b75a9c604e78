use crate::api::{RouteEngine, decode_json, http_client, join_url};
use crate::errors::ApiError;
use crate::types::geo::{Coordinates, Route, RouteSummary};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// OSRM `route` service, driving profile.
#[derive(Debug, Clone)]
pub struct OsrmRouter {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString: pares `[lon, lat]`.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl OsrmRouter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            http: http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    fn route_url(&self, from: Coordinates, to: Coordinates) -> String {
        join_url(
            &self.base_url,
            &format!(
                "route/v1/driving/{},{};{},{}",
                from.lon, from.lat, to.lon, to.lat
            ),
        )
    }
}

#[async_trait]
impl RouteEngine for OsrmRouter {
    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<Route, ApiError> {
        let response = self
            .http
            .get(self.route_url(from, to))
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;
        let body: OsrmResponse = decode_json(response).await?;
        if body.code != "Ok" {
            return Err(ApiError::InvalidPayload(format!(
                "routing engine answered '{}'",
                body.code
            )));
        }
        let best = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::InvalidPayload("routing engine returned no routes".into()))?;
        let path = best
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| Coordinates::new(lat, lon))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Route {
            summary: RouteSummary {
                distance_m: best.distance,
                duration_s: best.duration,
            },
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn router(server: &MockServer) -> OsrmRouter {
        OsrmRouter::new(server.base_url(), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn decodes_best_route_and_flips_coordinates() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path_contains("/route/v1/driving/")
                    .query_param("geometries", "geojson");
                then.status(200).json_body(json!({
                    "code": "Ok",
                    "routes": [{
                        "distance": 2437.2,
                        "duration": 418.9,
                        "geometry": {
                            "type": "LineString",
                            "coordinates": [[-58.45, -34.60], [-58.40, -34.61]]
                        }
                    }]
                }));
            })
            .await;

        let route = router(&server)
            .route(
                Coordinates::from((-34.60, -58.45)),
                Coordinates::from((-34.61, -58.40)),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(route.summary.distance_m, 2437.2);
        assert_eq!(route.path.first(), Some(&Coordinates::from((-34.60, -58.45))));
        assert_eq!(route.path.len(), 2);
    }

    #[tokio::test]
    async fn no_route_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/route/v1/driving/");
                then.status(200).json_body(json!({ "code": "NoRoute", "routes": [] }));
            })
            .await;

        let err = router(&server)
            .route(Coordinates::from((0.0, 0.0)), Coordinates::from((0.0, 1.0)))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidPayload(msg) if msg.contains("NoRoute")));
    }
}

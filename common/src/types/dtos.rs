use crate::errors::ApiError;
use crate::types::geo::Coordinates;
use crate::types::order_status::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDTO {
    /// ID de la orden.
    #[serde(rename = "id", alias = "_id")]
    pub order_id: String,
    /// Estado de la orden.
    pub status: OrderStatus,
    /// Dirección de entrega, tal como la cargó el cliente.
    #[serde(alias = "address")]
    pub delivery_address: String,
    /// ID del cliente que realizó la orden.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// ID del repartidor asignado, si lo hay.
    #[serde(default)]
    pub rider_id: Option<String>,
    /// Marca de tiempo de la última actualización.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Eq for OrderDTO {}

impl PartialEq for OrderDTO {
    fn eq(&self, other: &Self) -> bool {
        self.order_id == other.order_id && self.status == other.status
    }
}

/// Body of the order update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
}

/// Response of the driver location endpoint: `{"location": [lat, lon]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverLocationResponse {
    pub location: [f64; 2],
}

impl TryFrom<DriverLocationResponse> for Coordinates {
    type Error = ApiError;

    fn try_from(response: DriverLocationResponse) -> Result<Self, Self::Error> {
        let [lat, lon] = response.location;
        Coordinates::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_accepts_backend_id_alias() {
        let order: OrderDTO = serde_json::from_str(
            r#"{"_id":"65f1","status":"ready","address":"Av. Corrientes 1234"}"#,
        )
        .unwrap();
        assert_eq!(order.order_id, "65f1");
        assert_eq!(order.status, OrderStatus::Ready);
        assert_eq!(order.delivery_address, "Av. Corrientes 1234");
        assert!(order.rider_id.is_none());
    }

    #[test]
    fn location_outside_the_globe_is_rejected() {
        let ok: Result<Coordinates, _> = DriverLocationResponse {
            location: [-34.6, -58.4],
        }
        .try_into();
        assert_eq!(ok.unwrap(), Coordinates::from((-34.6, -58.4)));

        let bad: Result<Coordinates, _> = DriverLocationResponse {
            location: [-358.4, -34.6],
        }
        .try_into();
        assert!(matches!(bad, Err(ApiError::InvalidPayload(_))));
    }
}

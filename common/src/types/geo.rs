use crate::errors::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Punto geográfico en grados decimales.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Builds a point from remote data, rejecting anything outside the globe.
    pub fn new(lat: f64, lon: f64) -> Result<Self, ApiError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(ApiError::InvalidPayload(format!(
                "non finite coordinates ({}, {})",
                lat, lon
            )));
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ApiError::InvalidPayload(format!(
                "coordinates out of range ({}, {})",
                lat, lon
            )));
        }
        Ok(Self { lat, lon })
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

/// Orientación del ícono del repartidor en el mapa.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriverIcon {
    Normal,
    Mirrored,
}

impl DriverIcon {
    /// The icon faces the destination: a driver west of home is drawn mirrored.
    pub fn facing(driver: Coordinates, home: Coordinates) -> Self {
        if driver.lon < home.lon {
            DriverIcon::Mirrored
        } else {
            DriverIcon::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RouteSummary {
    /// Distancia total en metros.
    pub distance_m: f64,
    /// Duración estimada en segundos.
    pub duration_s: f64,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = (self.duration_s / 60.0).round() as u64;
        if self.distance_m < 1000.0 {
            write!(f, "{} m, {} min", self.distance_m.round() as u64, minutes)
        } else {
            write!(f, "{:.1} km, {} min", self.distance_m / 1000.0, minutes)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub summary: RouteSummary,
    pub path: Vec<Coordinates>,
}

pub const POLL_INTERVAL_MILLIS: u64 = 5000;
pub const HTTP_TIMEOUT_SECONDS: u64 = 10;

pub const KITCHEN_API_URL: &str = "http://127.0.0.1:3000/api";
pub const GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const ROUTER_URL: &str = "https://router.project-osrm.org";
pub const USER_AGENT: &str = concat!("kitchen-ops/", env!("CARGO_PKG_VERSION"));

/// Posición inicial del repartidor hasta recibir la primera ubicación real (la cocina).
pub const KITCHEN_POSITION: (f64, f64) = (-34.6037, -58.3816);

pub const LOG_LEVEL_ENV: &str = "KITCHEN_LOG";

use crate::types::geo::Coordinates;
use colored::*;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distancia en línea recta (haversine), en metros.
pub fn straight_line_distance(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

pub fn print_welcome_message(title: &str) {
    let line = "=".repeat(title.len() + 8);
    println!("{}", line.bright_blue());
    println!("{}", format!("    {}    ", title).bold().bright_white());
    println!("{}", line.bright_blue());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_same_point_is_zero() {
        let p = Coordinates::from((-34.6037, -58.3816));
        assert!(straight_line_distance(p, p).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinates::from((0.0, 0.0));
        let b = Coordinates::from((1.0, 0.0));
        let d = straight_line_distance(a, b);
        assert!((d - 111_195.0).abs() < 100.0, "{d}");
    }
}

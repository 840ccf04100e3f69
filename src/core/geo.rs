use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Latitude limit of the Web Mercator projection
const MAX_LATITUDE: f64 = 85.0511287798;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from a GeoJSON position (`[lng, lat, ...]`).
    ///
    /// Returns `None` when the position has fewer than two components or
    /// either of them is null.
    pub fn from_position(position: &[Option<f64>]) -> Option<Self> {
        match position {
            [Some(lng), Some(lat), ..] => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Clamps latitude to the range Web Mercator can represent
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Projects to normalized Web Mercator space, both axes in `[0, 1]` with
    /// the origin at the north-west corner.
    pub fn to_unit_mercator(&self) -> (f64, f64) {
        let x = (self.lng + 180.0) / 360.0;
        let lat_rad = Self::clamp_lat(self.lat).to_radians();
        let y = (1.0 - (PI / 4.0 + lat_rad / 2.0).tan().ln() / PI) / 2.0;
        (x, y)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_position_swaps_axis_order() {
        let point = LatLng::from_position(&[Some(-122.4194), Some(37.7749), Some(8.2)]).unwrap();
        assert_eq!(point, LatLng::new(37.7749, -122.4194));
        assert!(LatLng::from_position(&[Some(1.0)]).is_none());
        assert!(LatLng::from_position(&[None, Some(1.0)]).is_none());
    }

    #[test]
    fn test_unit_mercator_corners() {
        let (x, y) = LatLng::new(0.0, 0.0).to_unit_mercator();
        assert!((x - 0.5).abs() < 1e-12);
        assert!((y - 0.5).abs() < 1e-12);

        let (x, y) = LatLng::new(90.0, -180.0).to_unit_mercator();
        assert!(x.abs() < 1e-12);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_validity() {
        assert!(LatLng::new(37.09, -95.71).is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
    }
}

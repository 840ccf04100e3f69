//! Turns typed features into layer descriptors.
//!
//! Composition is pure: output order equals input order and nothing here
//! touches a rendering widget.

use crate::data::feature::{EarthquakeFeature, PlateBoundaryFeature};
use crate::data::geojson::GeoJson;
use crate::layers::descriptor::LayerDescriptor;
use crate::style::marker::{derive_style, LineStyle};
use crate::Result;

/// One circle marker per earthquake, in input order
pub fn compose_earthquake_layer(features: &[EarthquakeFeature]) -> Vec<LayerDescriptor> {
    features
        .iter()
        .map(|quake| {
            LayerDescriptor::marker(
                quake.position,
                derive_style(quake.depth_km, quake.magnitude),
                popup_text(quake),
            )
        })
        .collect()
}

/// One orange polyline per plate boundary, geometry untouched
pub fn compose_plate_layer(features: &[PlateBoundaryFeature]) -> Vec<LayerDescriptor> {
    let style = LineStyle::default();
    features
        .iter()
        .map(|plate| LayerDescriptor::line(plate.geometry.clone(), style))
        .collect()
}

/// Extracts and composes an earthquake feed in one step
pub fn compose_earthquakes_from_geojson(geojson: &GeoJson) -> Result<Vec<LayerDescriptor>> {
    let quakes = EarthquakeFeature::collect(geojson)?;
    Ok(compose_earthquake_layer(&quakes))
}

/// Extracts and composes a plate boundary document in one step
pub fn compose_plates_from_geojson(geojson: &GeoJson) -> Result<Vec<LayerDescriptor>> {
    let plates = PlateBoundaryFeature::collect(geojson)?;
    Ok(compose_plate_layer(&plates))
}

/// `Magnitude: 4.2<br>Depth: 10 km<br>Location: 10km N of X`
pub fn popup_text(quake: &EarthquakeFeature) -> String {
    let magnitude = quake
        .magnitude
        .map(raw_number)
        .unwrap_or_else(|| "null".to_string());

    format!(
        "Magnitude: {}<br>Depth: {} km<br>Location: {}",
        magnitude,
        raw_number(quake.depth_km),
        quake.place
    )
}

/// Shortest rendering of a number, the way the feed's consumers print it:
/// `10` rather than `10.0`, no rounding, and exponent form (`1e-7`, `1e+21`)
/// outside `1e-6 <= |x| < 1e21`.
fn raw_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // Covers -0.0 as well.
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::layers::descriptor::{LayerGeometry, LayerKind};
    use crate::style::color::DepthColor;

    fn quake(mag: Option<f64>, depth: f64, place: &str) -> EarthquakeFeature {
        EarthquakeFeature::new(mag, depth, LatLng::new(61.2, -150.5), place)
    }

    #[test]
    fn test_popup_text_is_exact() {
        let text = popup_text(&quake(Some(4.2), 10.0, "10km N of X"));
        assert_eq!(text, "Magnitude: 4.2<br>Depth: 10 km<br>Location: 10km N of X");
    }

    #[test]
    fn test_popup_text_without_magnitude() {
        let text = popup_text(&quake(None, -0.0, "Offshore"));
        assert_eq!(text, "Magnitude: null<br>Depth: 0 km<br>Location: Offshore");
    }

    #[test]
    fn test_popup_keeps_full_precision() {
        let text = popup_text(&quake(Some(1.73), 12.345678, "Ridge"));
        assert_eq!(text, "Magnitude: 1.73<br>Depth: 12.345678 km<br>Location: Ridge");
    }

    #[test]
    fn test_raw_number_switches_to_exponent_form() {
        assert_eq!(raw_number(1e-7), "1e-7");
        assert_eq!(raw_number(-2.5e-8), "-2.5e-8");
        assert_eq!(raw_number(1e21), "1e+21");
        assert_eq!(raw_number(1.5e22), "1.5e+22");
        assert_eq!(raw_number(0.000001), "0.000001");
        assert_eq!(raw_number(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn test_earthquake_layer_preserves_order() {
        let features = vec![quake(Some(1.0), 95.0, "first"), quake(Some(2.0), 5.0, "second")];
        let layer = compose_earthquake_layer(&features);

        assert_eq!(layer.len(), 2);
        assert!(layer[0].popup_text.as_deref().unwrap().ends_with("first"));
        assert!(layer[1].popup_text.as_deref().unwrap().ends_with("second"));
        assert_eq!(layer[0].marker_style().unwrap().fill_color, DepthColor::Red);
        assert_eq!(layer[1].marker_style().unwrap().radius, 8.0);
        assert!(layer.iter().all(|d| d.kind == LayerKind::Point));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compose_earthquake_layer(&[]).is_empty());
        assert!(compose_plate_layer(&[]).is_empty());
    }

    #[test]
    fn test_plate_layer_style_and_geometry() {
        let path = vec![LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0)];
        let layer = compose_plate_layer(&[PlateBoundaryFeature::new(path.clone())]);

        assert_eq!(layer[0].kind, LayerKind::Line);
        assert_eq!(layer[0].geometry, LayerGeometry::Line(path));
        let style = layer[0].line_style().unwrap();
        assert_eq!(style.color, "orange");
        assert_eq!(style.weight, 2.0);
        assert!(layer[0].popup_text.is_none());
    }
}

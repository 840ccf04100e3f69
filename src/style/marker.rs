use crate::core::constants::{
    DEPTH_THRESHOLDS_DESC, MAGNITUDE_RADIUS_SCALE, MARKER_FILL_OPACITY, MARKER_OPACITY,
    MARKER_STROKE_COLOR, MARKER_STROKE_WEIGHT, MIN_MARKER_RADIUS, PLATE_LINE_COLOR,
    PLATE_LINE_WEIGHT,
};
use crate::style::color::DepthColor;
use serde::Serialize;

/// Circle marker style for one earthquake
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub fill_color: DepthColor,
    pub radius: f64,
    pub stroke: bool,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn new(fill_color: DepthColor, radius: f64) -> Self {
        Self {
            fill_color,
            radius,
            stroke: true,
            stroke_color: MARKER_STROKE_COLOR,
            stroke_weight: MARKER_STROKE_WEIGHT,
            opacity: MARKER_OPACITY,
            fill_opacity: MARKER_FILL_OPACITY,
        }
    }
}

/// Line style for plate boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: PLATE_LINE_COLOR,
            weight: PLATE_LINE_WEIGHT,
        }
    }
}

/// Palette color for a hypocenter depth.
///
/// Thresholds are tested from the deepest down, each exclusive: a depth of
/// exactly 90 km falls in the 70–90 tier. Depths of 10 km or less, negative
/// depths and NaN all land in the shallowest tier.
pub fn color_for_depth(depth_km: f64) -> DepthColor {
    let descending = DepthColor::ASCENDING.iter().rev();
    DEPTH_THRESHOLDS_DESC
        .iter()
        .zip(descending)
        .find(|(threshold, _)| depth_km > **threshold)
        .map(|(_, color)| *color)
        .unwrap_or(DepthColor::Lime)
}

/// Marker radius for a magnitude: four pixels per unit, or the minimal
/// radius when there is no usable positive magnitude.
pub fn radius_for_magnitude(magnitude: Option<f64>) -> f64 {
    match magnitude {
        Some(mag) if mag.is_finite() && mag > 0.0 => mag * MAGNITUDE_RADIUS_SCALE,
        _ => MIN_MARKER_RADIUS,
    }
}

/// Full marker style for an earthquake
pub fn derive_style(depth_km: f64, magnitude: Option<f64>) -> MarkerStyle {
    MarkerStyle::new(color_for_depth(depth_km), radius_for_magnitude(magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        assert_eq!(color_for_depth(90.0001), DepthColor::Red);
        assert_eq!(color_for_depth(90.0), DepthColor::Orange);
        assert_eq!(color_for_depth(70.0), DepthColor::Amber);
        assert_eq!(color_for_depth(50.0), DepthColor::Yellow);
        assert_eq!(color_for_depth(30.0), DepthColor::Chartreuse);
        assert_eq!(color_for_depth(10.0), DepthColor::Lime);
        assert_eq!(color_for_depth(10.5), DepthColor::Chartreuse);
    }

    #[test]
    fn test_negative_and_nan_depths_are_shallowest() {
        assert_eq!(color_for_depth(-3.2), DepthColor::Lime);
        assert_eq!(color_for_depth(f64::NEG_INFINITY), DepthColor::Lime);
        assert_eq!(color_for_depth(f64::NAN), DepthColor::Lime);
    }

    #[test]
    fn test_radius() {
        assert_eq!(radius_for_magnitude(Some(2.5)), 10.0);
        assert_eq!(radius_for_magnitude(None), 1.0);
        assert_eq!(radius_for_magnitude(Some(0.0)), 1.0);
        assert_eq!(radius_for_magnitude(Some(f64::NAN)), 1.0);
        assert_eq!(radius_for_magnitude(Some(-0.4)), 1.0);
    }

    #[test]
    fn test_derive_style_constants() {
        let style = derive_style(50.0, Some(2.5));
        assert_eq!(style.radius, 10.0);
        assert_eq!(style.fill_color, DepthColor::Yellow);
        assert_eq!(style.stroke_color, "#000");
        assert_eq!(style.stroke_weight, 0.5);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.fill_opacity, 0.8);
        assert!(style.stroke);

        assert_eq!(derive_style(50.0, None).radius, 1.0);
    }
}

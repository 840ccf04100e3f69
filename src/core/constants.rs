//! Styling constants and feed locations shared across the crate.
//! Keeping them in a single place makes the depth/color table easy to audit.

/// Lower bounds of the legend buckets, ascending (km).
pub const DEPTH_LEGEND_BOUNDS: [f64; 6] = [-10.0, 10.0, 30.0, 50.0, 70.0, 90.0];

/// Depth thresholds tested from deepest to shallowest. A depth strictly above
/// a threshold takes that tier's color.
pub const DEPTH_THRESHOLDS_DESC: [f64; 5] = [90.0, 70.0, 50.0, 30.0, 10.0];

/// Marker radius per unit of magnitude.
pub const MAGNITUDE_RADIUS_SCALE: f64 = 4.0;

/// Radius used when the magnitude is absent, zero or not a number.
pub const MIN_MARKER_RADIUS: f64 = 1.0;

/// Marker outline color.
pub const MARKER_STROKE_COLOR: &str = "#000";

/// Marker outline width.
pub const MARKER_STROKE_WEIGHT: f64 = 0.5;

/// Marker outline opacity.
pub const MARKER_OPACITY: f64 = 1.0;

/// Marker fill opacity.
pub const MARKER_FILL_OPACITY: f64 = 0.8;

/// Plate boundary line color.
pub const PLATE_LINE_COLOR: &str = "orange";

/// Plate boundary line width.
pub const PLATE_LINE_WEIGHT: f64 = 2.0;

/// Base URL of the USGS GeoJSON summary feeds.
pub const USGS_SUMMARY_FEED_BASE: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// PB2002 plate boundary model, as published by fraxen/tectonicplates.
pub const PLATE_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

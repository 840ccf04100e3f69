//! # quakemap
//!
//! Style derivation and layer composition for earthquake maps.
//!
//! Earthquake features are colored by depth and sized by magnitude, tectonic
//! plate boundaries become styled lines, and both are emitted as
//! widget-agnostic [`LayerDescriptor`]s that a rendering adapter can draw.
//! Feeds are pulled through the [`FeatureSource`] trait so the transport stays
//! outside the core.

pub mod background;
pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod style;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{FeedThreshold, FeedWindow, QuakeMapConfig, UsgsFeed},
    geo::LatLng,
    map::{Overlay, OverlayGroup, OverlayStatus, QuakeMap},
};

pub use crate::data::{
    feature::{EarthquakeFeature, PlateBoundaryFeature},
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
};

pub use crate::layers::{
    composer::{
        compose_earthquake_layer, compose_earthquakes_from_geojson, compose_plate_layer,
        compose_plates_from_geojson,
    },
    descriptor::{DescriptorStyle, LayerDescriptor, LayerGeometry, LayerKind},
};

pub use crate::style::{
    color::DepthColor,
    legend::{build_legend, LegendBucket},
    marker::{color_for_depth, derive_style, radius_for_magnitude, LineStyle, MarkerStyle},
};

pub use crate::background::sources::{HttpFeatureSource, StaticFeatureSource};
pub use crate::rendering::{render_overlays, OverlayRenderer};
pub use crate::traits::FeatureSource;

/// Installs `env_logger` as the `log` backend, honoring `RUST_LOG` and
/// defaulting to `info`. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feature {feature} is missing field `{field}`")]
    MissingField { feature: String, field: &'static str },

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Background task error: {0}")]
    Task(String),
}

/// Error type alias for convenience
pub type Error = MapError;

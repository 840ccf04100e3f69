//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

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

#[cfg(feature = "tokio-runtime")]
pub use crate::background::overlays::spawn_overlay_loads;

pub use crate::rendering::{render_overlays, OverlayRenderer};

#[cfg(feature = "egui")]
pub use crate::rendering::egui_painter::EguiOverlayPainter;

pub use crate::traits::FeatureSource;

pub use crate::{Error as MapError, Result};

pub use std::sync::{Arc, Mutex};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use futures::Future;

//! Typed features extracted from GeoJSON documents.
//!
//! Extraction is strict about the fields styling depends on: a feature
//! without a depth or a place is reported as [`MapError::MissingField`]
//! rather than defaulted. Only the magnitude is optional.

use crate::core::geo::LatLng;
use crate::data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry, Position};
use crate::{MapError, Result};
use serde::Serialize;

/// One earthquake event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeFeature {
    pub id: Option<String>,
    /// `None` when the feed reports no magnitude
    pub magnitude: Option<f64>,
    /// Hypocenter depth; negative values are above sea level
    pub depth_km: f64,
    pub position: LatLng,
    pub place: String,
}

impl EarthquakeFeature {
    pub fn new(
        magnitude: Option<f64>,
        depth_km: f64,
        position: LatLng,
        place: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            magnitude,
            depth_km,
            position,
            place: place.into(),
        }
    }

    /// Extracts an earthquake from a GeoJSON point feature.
    ///
    /// `index` is the feature's position in its collection and only appears
    /// in error messages when the feature has no id.
    pub fn from_geojson(feature: &GeoJsonFeature, index: usize) -> Result<Self> {
        let label = feature.label(index);
        let missing = |field: &'static str| MapError::MissingField {
            feature: label.clone(),
            field,
        };

        let coordinates = match &feature.geometry {
            Some(GeoJsonGeometry::Point { coordinates }) => coordinates,
            Some(other) => {
                return Err(MapError::UnsupportedGeometry(format!(
                    "earthquake {} has {} geometry, expected Point",
                    label,
                    other.type_name()
                )))
            }
            None => return Err(missing("geometry")),
        };

        let position = LatLng::from_position(coordinates).ok_or_else(|| missing("coordinates"))?;
        let depth_km = coordinates
            .get(2)
            .copied()
            .flatten()
            .ok_or_else(|| missing("depth"))?;

        // Some feeds quote numbers; anything else non-numeric counts as absent
        let magnitude = feature.property("mag").and_then(|mag| {
            mag.as_f64()
                .or_else(|| mag.as_str().and_then(|text| text.trim().parse().ok()))
        });

        let place = feature
            .property("place")
            .map(|place| match place {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .ok_or_else(|| missing("place"))?;

        Ok(Self {
            id: feature.id.as_ref().map(|_| label.clone()),
            magnitude,
            depth_km,
            position,
            place,
        })
    }

    /// Extracts every feature of a collection, failing on the first malformed one
    pub fn collect(geojson: &GeoJson) -> Result<Vec<Self>> {
        geojson
            .features()
            .iter()
            .enumerate()
            .map(|(index, feature)| Self::from_geojson(feature, index))
            .collect()
    }
}

/// One plate boundary path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateBoundaryFeature {
    /// Ordered vertices of the boundary line or ring
    pub geometry: Vec<LatLng>,
}

impl PlateBoundaryFeature {
    pub fn new(geometry: Vec<LatLng>) -> Self {
        Self { geometry }
    }

    /// Extracts the boundary paths of a feature.
    ///
    /// Multi-part geometries yield one boundary per part, polygons contribute
    /// their exterior ring, and a feature without geometry yields nothing.
    pub fn from_geojson(feature: &GeoJsonFeature, index: usize) -> Result<Vec<Self>> {
        let Some(geometry) = &feature.geometry else {
            return Ok(Vec::new());
        };

        let mut boundaries = Vec::new();
        Self::push_geometry(geometry, &feature.label(index), &mut boundaries)?;
        Ok(boundaries)
    }

    /// Extracts the boundaries of every feature in document order
    pub fn collect(geojson: &GeoJson) -> Result<Vec<Self>> {
        let mut boundaries = Vec::new();
        for (index, feature) in geojson.features().iter().enumerate() {
            boundaries.extend(Self::from_geojson(feature, index)?);
        }
        Ok(boundaries)
    }

    fn push_geometry(geometry: &GeoJsonGeometry, label: &str, out: &mut Vec<Self>) -> Result<()> {
        match geometry {
            GeoJsonGeometry::LineString { coordinates } => {
                out.push(Self::from_path(coordinates, label)?);
            }
            GeoJsonGeometry::Polygon { coordinates } => {
                if let Some(exterior) = coordinates.first() {
                    out.push(Self::from_path(exterior, label)?);
                }
            }
            GeoJsonGeometry::MultiLineString { coordinates } => {
                for line in coordinates {
                    out.push(Self::from_path(line, label)?);
                }
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    if let Some(exterior) = polygon.first() {
                        out.push(Self::from_path(exterior, label)?);
                    }
                }
            }
            GeoJsonGeometry::GeometryCollection { geometries } => {
                for geom in geometries {
                    Self::push_geometry(geom, label, out)?;
                }
            }
            GeoJsonGeometry::Point { .. } | GeoJsonGeometry::MultiPoint { .. } => {
                return Err(MapError::UnsupportedGeometry(format!(
                    "plate boundary {} has {} geometry",
                    label,
                    geometry.type_name()
                )));
            }
        }
        Ok(())
    }

    fn from_path(path: &[Position], label: &str) -> Result<Self> {
        path.iter()
            .map(|position| {
                LatLng::from_position(position).ok_or_else(|| MapError::MissingField {
                    feature: label.to_string(),
                    field: "coordinates",
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

use crate::prelude::HashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A GeoJSON position: `[longitude, latitude]` with an optional third
/// component (depth in km for seismic feeds, elevation elsewhere).
///
/// Components are nullable so a feed with `[lng, lat, null]` still parses and
/// the missing value can be reported against its feature.
pub type Position = Vec<Option<f64>>;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

impl GeoJsonGeometry {
    /// GeoJSON type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point { .. } => "Point",
            Self::LineString { .. } => "LineString",
            Self::Polygon { .. } => "Polygon",
            Self::MultiPoint { .. } => "MultiPoint",
            Self::MultiLineString { .. } => "MultiLineString",
            Self::MultiPolygon { .. } => "MultiPolygon",
            Self::GeometryCollection { .. } => "GeometryCollection",
        }
    }
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    /// Looks up a property, treating JSON `null` as absent
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .filter(|value| !value.is_null())
    }

    /// Human-readable identifier for error messages: the feature id when
    /// present, otherwise its index in the collection.
    pub fn label(&self, index: usize) -> String {
        match &self.id {
            Some(serde_json::Value::String(id)) => id.clone(),
            Some(id) if !id.is_null() => id.to_string(),
            _ => format!("#{}", index),
        }
    }
}

/// Root GeoJSON object
///
/// A bare geometry document is normalized into a single feature without
/// properties, so consumers only ever deal with features.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJson {
    /// All features in document order
    pub fn features(&self) -> &[GeoJsonFeature] {
        match self {
            GeoJson::Feature(feature) => std::slice::from_ref(feature),
            GeoJson::FeatureCollection { features } => features,
        }
    }

    pub fn len(&self) -> usize {
        self.features().len()
    }

    pub fn is_empty(&self) -> bool {
        self.features().is_empty()
    }
}

impl TryFrom<serde_json::Value> for GeoJson {
    type Error = crate::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let kind = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| crate::Error::ParseError("GeoJSON object has no `type`".to_string()))?
            .to_string();

        match kind.as_str() {
            "FeatureCollection" => {
                let features = match value.get("features") {
                    Some(features) => Vec::<GeoJsonFeature>::deserialize(features)?,
                    None => {
                        return Err(crate::Error::ParseError(
                            "FeatureCollection has no `features`".to_string(),
                        ))
                    }
                };
                Ok(GeoJson::FeatureCollection { features })
            }
            "Feature" => Ok(GeoJson::Feature(serde_json::from_value(value)?)),
            _ => {
                let geometry: GeoJsonGeometry = serde_json::from_value(value)?;
                Ok(GeoJson::Feature(GeoJsonFeature {
                    id: None,
                    geometry: Some(geometry),
                    properties: None,
                }))
            }
        }
    }
}

impl FromStr for GeoJson {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_collection_parsing() {
        let geojson: GeoJson = r#"
        {
            "type": "FeatureCollection",
            "metadata": { "count": 1 },
            "features": [
                {
                    "type": "Feature",
                    "id": "us7000abcd",
                    "properties": { "mag": 4.2, "place": "10km N of X" },
                    "geometry": { "type": "Point", "coordinates": [-74.006, 40.7128, 10] }
                }
            ]
        }
        "#
        .parse()
        .unwrap();

        assert_eq!(geojson.len(), 1);
        let feature = &geojson.features()[0];
        assert_eq!(feature.label(0), "us7000abcd");
        assert_eq!(
            feature.geometry,
            Some(GeoJsonGeometry::Point {
                coordinates: vec![Some(-74.006), Some(40.7128), Some(10.0)]
            })
        );
    }

    #[test]
    fn test_null_property_is_absent() {
        let geojson: GeoJson = r#"
        {
            "type": "Feature",
            "properties": { "mag": null },
            "geometry": null
        }
        "#
        .parse()
        .unwrap();

        let feature = &geojson.features()[0];
        assert!(feature.property("mag").is_none());
        assert!(feature.geometry.is_none());
        assert_eq!(feature.label(3), "#3");
    }

    #[test]
    fn test_bare_geometry_becomes_feature() {
        let geojson: GeoJson = r#"{ "type": "LineString", "coordinates": [[0, 0], [1, 1]] }"#
            .parse()
            .unwrap();

        assert_eq!(geojson.len(), 1);
        assert!(geojson.features()[0].properties.is_none());
    }

    #[test]
    fn test_missing_type_is_rejected() {
        assert!("{ \"features\": [] }".parse::<GeoJson>().is_err());
        assert!("not json".parse::<GeoJson>().is_err());
    }
}

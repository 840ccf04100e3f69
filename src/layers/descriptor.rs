use crate::core::geo::LatLng;
use crate::style::marker::{LineStyle, MarkerStyle};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LayerKind {
    Point,
    Line,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Point => write!(f, "point"),
            LayerKind::Line => write!(f, "line"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DescriptorStyle {
    Marker(MarkerStyle),
    Line(LineStyle),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerGeometry {
    Point(LatLng),
    Line(Vec<LatLng>),
}

/// Widget-agnostic description of one drawable map element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerDescriptor {
    pub kind: LayerKind,
    pub style: DescriptorStyle,
    pub geometry: LayerGeometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup_text: Option<String>,
}

impl LayerDescriptor {
    /// A circle marker with a popup
    pub fn marker(position: LatLng, style: MarkerStyle, popup_text: String) -> Self {
        Self {
            kind: LayerKind::Point,
            style: DescriptorStyle::Marker(style),
            geometry: LayerGeometry::Point(position),
            popup_text: Some(popup_text),
        }
    }

    /// A styled polyline
    pub fn line(path: Vec<LatLng>, style: LineStyle) -> Self {
        Self {
            kind: LayerKind::Line,
            style: DescriptorStyle::Line(style),
            geometry: LayerGeometry::Line(path),
            popup_text: None,
        }
    }

    pub fn marker_style(&self) -> Option<&MarkerStyle> {
        match &self.style {
            DescriptorStyle::Marker(style) => Some(style),
            DescriptorStyle::Line(_) => None,
        }
    }

    pub fn line_style(&self) -> Option<&LineStyle> {
        match &self.style {
            DescriptorStyle::Line(style) => Some(style),
            DescriptorStyle::Marker(_) => None,
        }
    }
}

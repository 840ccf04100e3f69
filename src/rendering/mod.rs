//! Boundary between the composed descriptors and a drawing widget
//!
//! A widget implements [`OverlayRenderer`]; [`render_overlays`] walks the
//! visible overlays of a [`QuakeMap`] and forwards each descriptor.

#[cfg(feature = "egui")]
pub mod egui_painter;

use crate::core::geo::LatLng;
use crate::core::map::{Overlay, QuakeMap};
use crate::layers::descriptor::{DescriptorStyle, LayerDescriptor, LayerGeometry};
use crate::style::marker::{LineStyle, MarkerStyle};

/// Drawing primitives a map widget has to provide
pub trait OverlayRenderer {
    /// Draw a circle marker, optionally bound to popup text
    fn draw_marker(&mut self, position: LatLng, style: &MarkerStyle, popup: Option<&str>);

    /// Draw a polyline
    fn draw_line(&mut self, path: &[LatLng], style: &LineStyle);
}

/// Draws every visible overlay, plate lines below earthquake markers.
///
/// Returns the number of descriptors drawn.
pub fn render_overlays(map: &QuakeMap, renderer: &mut dyn OverlayRenderer) -> usize {
    let mut drawn = 0;
    for overlay in [Overlay::TectonicPlates, Overlay::Earthquakes] {
        for descriptor in map.visible_descriptors(overlay) {
            if draw_descriptor(descriptor, renderer) {
                drawn += 1;
            }
        }
    }
    drawn
}

/// Forwards one descriptor; false when its geometry and style disagree
fn draw_descriptor(descriptor: &LayerDescriptor, renderer: &mut dyn OverlayRenderer) -> bool {
    match (&descriptor.geometry, &descriptor.style) {
        (LayerGeometry::Point(position), DescriptorStyle::Marker(style)) => {
            renderer.draw_marker(*position, style, descriptor.popup_text.as_deref());
            true
        }
        (LayerGeometry::Line(path), DescriptorStyle::Line(style)) => {
            renderer.draw_line(path, style);
            true
        }
        _ => {
            log::warn!("Skipping {} descriptor with mismatched style", descriptor.kind);
            false
        }
    }
}

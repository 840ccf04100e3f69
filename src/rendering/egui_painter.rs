use crate::core::geo::LatLng;
use crate::rendering::OverlayRenderer;
use crate::style::marker::{LineStyle, MarkerStyle};
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

/// Size of the zoom-0 world in pixels, as for slippy-map tiles
const WORLD_SIZE: f64 = 256.0;

/// Paints descriptors onto an egui `Painter` using Web Mercator.
///
/// egui has no popup binding, so marker hit areas are collected and can be
/// queried with [`EguiOverlayPainter::popup_at`] when the pointer is clicked.
pub struct EguiOverlayPainter<'a> {
    painter: &'a Painter,
    rect: Rect,
    center: LatLng,
    zoom: f64,
    popups: Vec<(Pos2, f32, String)>,
}

impl<'a> EguiOverlayPainter<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, center: LatLng, zoom: f64) -> Self {
        Self {
            painter,
            rect,
            center,
            zoom,
            popups: Vec::new(),
        }
    }

    /// Screen position of a coordinate
    pub fn project(&self, point: LatLng) -> Pos2 {
        let scale = WORLD_SIZE * 2f64.powf(self.zoom);
        let (x, y) = point.to_unit_mercator();
        let (cx, cy) = self.center.to_unit_mercator();
        let origin = self.rect.center();
        Pos2::new(
            origin.x + ((x - cx) * scale) as f32,
            origin.y + ((y - cy) * scale) as f32,
        )
    }

    /// Popup of the topmost marker under `pos`
    pub fn popup_at(&self, pos: Pos2) -> Option<&str> {
        self.popups
            .iter()
            .rev()
            .find(|(center, radius, _)| center.distance(pos) <= *radius)
            .map(|(_, _, text)| text.as_str())
    }
}

fn parse_css_color(color: &str) -> Color32 {
    match color {
        "orange" => Color32::from_rgb(255, 165, 0),
        "#000" | "black" => Color32::BLACK,
        _ => Color32::GRAY,
    }
}

fn with_opacity(color: Color32, opacity: f64) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

impl OverlayRenderer for EguiOverlayPainter<'_> {
    fn draw_marker(&mut self, position: LatLng, style: &MarkerStyle, popup: Option<&str>) {
        let center = self.project(position);
        let radius = style.radius as f32;
        let [r, g, b] = style.fill_color.rgb();
        let fill = with_opacity(Color32::from_rgb(r, g, b), style.fill_opacity);
        let stroke = if style.stroke {
            Stroke::new(
                style.stroke_weight as f32,
                with_opacity(parse_css_color(style.stroke_color), style.opacity),
            )
        } else {
            Stroke::NONE
        };

        self.painter.circle(center, radius, fill, stroke);

        if let Some(text) = popup {
            self.popups.push((center, radius, text.to_string()));
        }
    }

    fn draw_line(&mut self, path: &[LatLng], style: &LineStyle) {
        if path.len() < 2 {
            return;
        }
        let points: Vec<Pos2> = path.iter().map(|p| self.project(*p)).collect();
        let stroke = Stroke::new(style.weight as f32, parse_css_color(style.color));
        self.painter.add(Shape::line(points, stroke));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::marker::derive_style;

    #[test]
    fn test_projection_and_popup_hits() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(512.0, 512.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let mut overlay = EguiOverlayPainter::new(&painter, rect, LatLng::new(0.0, 0.0), 1.0);

        assert_eq!(overlay.project(LatLng::new(0.0, 0.0)), Pos2::new(256.0, 256.0));
        assert_eq!(overlay.project(LatLng::new(0.0, 180.0)).x, 512.0);

        overlay.draw_marker(
            LatLng::new(0.0, 0.0),
            &derive_style(5.0, Some(3.0)),
            Some("Magnitude: 3"),
        );
        assert_eq!(overlay.popup_at(Pos2::new(260.0, 256.0)), Some("Magnitude: 3"));
        assert_eq!(overlay.popup_at(Pos2::new(300.0, 256.0)), None);
    }
}

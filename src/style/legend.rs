use crate::core::constants::DEPTH_LEGEND_BOUNDS;
use crate::style::color::DepthColor;
use serde::Serialize;

/// One row of the depth legend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendBucket {
    pub lower_bound: f64,
    /// Next bucket's lower bound, `None` for the open-ended deepest bucket
    pub upper_bound: Option<f64>,
    pub color: DepthColor,
}

impl LegendBucket {
    /// Range text shown next to the swatch, e.g. `10–30` or `90+`
    pub fn label(&self) -> String {
        match self.upper_bound {
            Some(upper) => format!("{}\u{2013}{}", self.lower_bound, upper),
            None => format!("{}+", self.lower_bound),
        }
    }
}

/// The fixed six-entry legend, ascending by depth
pub fn build_legend() -> Vec<LegendBucket> {
    DEPTH_LEGEND_BOUNDS
        .iter()
        .zip(DepthColor::ASCENDING)
        .enumerate()
        .map(|(index, (&lower_bound, color))| LegendBucket {
            lower_bound,
            upper_bound: DEPTH_LEGEND_BOUNDS.get(index + 1).copied(),
            color,
        })
        .collect()
}

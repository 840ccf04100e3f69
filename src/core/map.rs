//! Map context: the two overlay groups, their load state and the legend.
//!
//! One `QuakeMap` is created per session and handed to loaders and renderers
//! explicitly. Each overlay is a separate slot, so a feed only ever writes to
//! its own group.

use crate::core::config::QuakeMapConfig;
use crate::layers::descriptor::LayerDescriptor;
use crate::style::legend::{build_legend, LegendBucket};
use crate::Result;
use log::{info, warn};
use std::fmt;

/// The overlays offered in the layer control, in control order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Earthquakes,
    TectonicPlates,
}

impl Overlay {
    pub const ALL: [Overlay; 2] = [Overlay::Earthquakes, Overlay::TectonicPlates];

    /// Name shown in the layer control
    pub fn display_name(self) -> &'static str {
        match self {
            Overlay::Earthquakes => "Earthquakes",
            Overlay::TectonicPlates => "Tectonic Plates",
        }
    }

    /// Noun used in load error messages
    fn data_name(self) -> &'static str {
        match self {
            Overlay::Earthquakes => "earthquake",
            Overlay::TectonicPlates => "tectonic plates",
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayStatus {
    /// Feed not resolved yet
    Pending,
    /// Feed loaded; descriptors available
    Ready,
    /// Feed failed; terminal for the session
    Failed(String),
}

/// One toggle-able group of descriptors
#[derive(Debug, Clone)]
pub struct OverlayGroup {
    overlay: Overlay,
    visible: bool,
    status: OverlayStatus,
    descriptors: Vec<LayerDescriptor>,
}

impl OverlayGroup {
    pub fn new(overlay: Overlay, visible: bool) -> Self {
        Self {
            overlay,
            visible,
            status: OverlayStatus::Pending,
            descriptors: Vec::new(),
        }
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn name(&self) -> &'static str {
        self.overlay.display_name()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn status(&self) -> &OverlayStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == OverlayStatus::Ready
    }

    /// All descriptors, regardless of visibility
    pub fn descriptors(&self) -> &[LayerDescriptor] {
        &self.descriptors
    }

    /// Records the outcome of this group's feed.
    ///
    /// Only the first outcome is kept; returns `false` if the group was
    /// already resolved.
    pub fn resolve(&mut self, outcome: Result<Vec<LayerDescriptor>>) -> bool {
        if self.status != OverlayStatus::Pending {
            warn!("Ignoring repeated load result for {}", self.overlay);
            return false;
        }

        match outcome {
            Ok(descriptors) => {
                info!("{}: {} layers ready", self.overlay, descriptors.len());
                self.descriptors = descriptors;
                self.status = OverlayStatus::Ready;
            }
            Err(e) => {
                log::error!("Error loading the {} data: {}", self.overlay.data_name(), e);
                self.status = OverlayStatus::Failed(e.to_string());
            }
        }
        true
    }
}

/// Session context owning both overlays and the legend
#[derive(Debug, Clone)]
pub struct QuakeMap {
    earthquakes: OverlayGroup,
    tectonic_plates: OverlayGroup,
    legend: Vec<LegendBucket>,
}

impl QuakeMap {
    /// Both overlays pending and checked
    pub fn new() -> Self {
        Self::from_config(&QuakeMapConfig::default())
    }

    pub fn from_config(config: &QuakeMapConfig) -> Self {
        Self {
            earthquakes: OverlayGroup::new(Overlay::Earthquakes, config.show_earthquakes),
            tectonic_plates: OverlayGroup::new(
                Overlay::TectonicPlates,
                config.show_tectonic_plates,
            ),
            legend: build_legend(),
        }
    }

    pub fn group(&self, overlay: Overlay) -> &OverlayGroup {
        match overlay {
            Overlay::Earthquakes => &self.earthquakes,
            Overlay::TectonicPlates => &self.tectonic_plates,
        }
    }

    pub fn group_mut(&mut self, overlay: Overlay) -> &mut OverlayGroup {
        match overlay {
            Overlay::Earthquakes => &mut self.earthquakes,
            Overlay::TectonicPlates => &mut self.tectonic_plates,
        }
    }

    /// Overlay groups in layer-control order
    pub fn overlays(&self) -> [&OverlayGroup; 2] {
        [&self.earthquakes, &self.tectonic_plates]
    }

    pub fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool) {
        self.group_mut(overlay).set_visible(visible);
    }

    /// Flips an overlay's checkbox and returns the new state
    pub fn toggle_overlay(&mut self, overlay: Overlay) -> bool {
        let group = self.group_mut(overlay);
        group.set_visible(!group.is_visible());
        group.is_visible()
    }

    /// Descriptors to draw for an overlay: empty until its feed has loaded,
    /// and while it is toggled off.
    pub fn visible_descriptors(&self, overlay: Overlay) -> &[LayerDescriptor] {
        let group = self.group(overlay);
        if group.is_ready() && group.is_visible() {
            group.descriptors()
        } else {
            &[]
        }
    }

    /// Legend table, shown once earthquake data is on the map
    pub fn legend(&self) -> Option<&[LegendBucket]> {
        self.earthquakes.is_ready().then_some(self.legend.as_slice())
    }

    /// True once neither overlay is pending
    pub fn is_settled(&self) -> bool {
        self.overlays()
            .iter()
            .all(|group| *group.status() != OverlayStatus::Pending)
    }
}

impl Default for QuakeMap {
    fn default() -> Self {
        Self::new()
    }
}

pub mod overlays;
pub mod sources;

pub use overlays::load_overlay;
#[cfg(feature = "tokio-runtime")]
pub use overlays::spawn_overlay_loads;
pub use sources::{HttpFeatureSource, StaticFeatureSource};

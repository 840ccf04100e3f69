//! Independent loading of the earthquake and plate boundary overlays
//!
//! Each feed is fetched, extracted and composed on its own; the outcome is
//! written only into that feed's overlay slot. A failure is logged and
//! recorded on the slot, never returned to the caller, so one feed can not
//! block or spoil the other.

use crate::core::map::{Overlay, QuakeMap};
use crate::layers::composer::{compose_earthquakes_from_geojson, compose_plates_from_geojson};
use crate::layers::descriptor::LayerDescriptor;
use crate::traits::FeatureSource;
use crate::Result;
use log::{debug, info};

/// Fetches a source and composes its features for the given overlay
pub async fn load_overlay(
    overlay: Overlay,
    source: &dyn FeatureSource,
) -> Result<Vec<LayerDescriptor>> {
    debug!("Loading {} from {}", overlay, source.name());
    let geojson = source.fetch().await?;
    debug!("{} returned {} features", source.name(), geojson.len());

    match overlay {
        Overlay::Earthquakes => compose_earthquakes_from_geojson(&geojson),
        Overlay::TectonicPlates => compose_plates_from_geojson(&geojson),
    }
}

impl QuakeMap {
    /// Loads both overlays concurrently and records each outcome.
    ///
    /// Suspends until both feeds have resolved; use
    /// [`spawn_overlay_loads`] when each overlay should appear as soon as its
    /// own feed completes.
    pub async fn load_overlays(
        &mut self,
        earthquakes: &dyn FeatureSource,
        plates: &dyn FeatureSource,
    ) {
        let (quake_result, plate_result) = futures::join!(
            load_overlay(Overlay::Earthquakes, earthquakes),
            load_overlay(Overlay::TectonicPlates, plates)
        );

        self.group_mut(Overlay::Earthquakes).resolve(quake_result);
        self.group_mut(Overlay::TectonicPlates).resolve(plate_result);
        info!("Overlay loading settled");
    }
}

/// Spawns one tokio task per feed.
///
/// Each task takes the map lock only after its own fetch and composition are
/// done, and writes only its own overlay group. Await the handles to know
/// when a feed has settled; dropping them leaves the loads running.
#[cfg(feature = "tokio-runtime")]
pub fn spawn_overlay_loads(
    map: std::sync::Arc<std::sync::Mutex<QuakeMap>>,
    earthquakes: std::sync::Arc<dyn FeatureSource>,
    plates: std::sync::Arc<dyn FeatureSource>,
) -> [tokio::task::JoinHandle<()>; 2] {
    let spawn_one = |overlay: Overlay, source: std::sync::Arc<dyn FeatureSource>| {
        let map = std::sync::Arc::clone(&map);
        tokio::spawn(async move {
            let outcome = load_overlay(overlay, source.as_ref()).await;
            match map.lock() {
                Ok(mut map) => {
                    map.group_mut(overlay).resolve(outcome);
                }
                Err(_) => log::error!("Map context poisoned; dropping {} result", overlay),
            }
        })
    };

    [
        spawn_one(Overlay::Earthquakes, earthquakes),
        spawn_one(Overlay::TectonicPlates, plates),
    ]
}

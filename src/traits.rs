//! Shared trait abstractions at the crate's external seams

use crate::{data::geojson::GeoJson, Result};
use async_trait::async_trait;

/// An asynchronous provider of a GeoJSON document.
///
/// The core never performs I/O itself; feeds are pulled through this trait so
/// the transport (HTTP, files, fixtures) stays swappable.
#[async_trait]
pub trait FeatureSource: Send + Sync {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Fetch and parse the document
    async fn fetch(&self) -> Result<GeoJson>;
}

//! Feature sources: HTTP feeds and in-memory documents

use crate::data::geojson::GeoJson;
use crate::traits::FeatureSource;
use crate::Result;
use async_trait::async_trait;
use log::debug;

/// Parses GeoJSON text, off the async executor when tokio is available
async fn parse_geojson(data: String, source: String) -> Result<GeoJson> {
    #[cfg(feature = "tokio-runtime")]
    let result = tokio::task::spawn_blocking(move || {
        debug!("Parsing {} bytes of GeoJSON from {}", data.len(), source);
        data.parse::<GeoJson>()
    })
    .await
    .map_err(|e| crate::Error::Task(format!("GeoJSON parse task failed: {}", e)))?;

    #[cfg(not(feature = "tokio-runtime"))]
    let result = {
        debug!("Parsing {} bytes of GeoJSON from {}", data.len(), source);
        data.parse::<GeoJson>()
    };

    result
}

/// Loads a GeoJSON document over HTTP
pub struct HttpFeatureSource {
    name: String,
    url: String,
    client: reqwest::Client,
}

impl HttpFeatureSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_client(name, url, reqwest::Client::new())
    }

    /// Shares an existing client (connection pool) between sources
    pub fn with_client(
        name: impl Into<String>,
        url: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeatureSource for HttpFeatureSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<GeoJson> {
        debug!("Requesting {} from {}", self.name, self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                debug!("Request to {} failed: {}", self.url, e);
                e
            })?;

        let data = response.text().await?;
        debug!("Downloaded {} bytes from {}", data.len(), self.url);

        parse_geojson(data, self.url.clone()).await
    }
}

/// Serves a fixed GeoJSON text, for fixtures and offline runs
pub struct StaticFeatureSource {
    name: String,
    data: String,
}

impl StaticFeatureSource {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Reads the document from disk up front
    pub fn from_file(name: impl Into<String>, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self::new(name, data))
    }
}

#[async_trait]
impl FeatureSource for StaticFeatureSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<GeoJson> {
        parse_geojson(self.data.clone(), self.name.clone()).await
    }
}

//! Configuration for the data feeds and initial overlay state
//!
//! Earthquake feeds are described by a USGS summary preset (magnitude
//! threshold plus time window) that resolves to a feed URL, or by a custom
//! URL. Everything can be loaded from a JSON file; missing keys fall back to
//! the defaults, which reproduce the week-long "all earthquakes" feed and the
//! PB2002 plate boundary model.

use crate::core::constants::{PLATE_BOUNDARIES_URL, USGS_SUMMARY_FEED_BASE};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minimum magnitude included in a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedThreshold {
    All,
    #[serde(rename = "1.0")]
    M1_0,
    #[serde(rename = "2.5")]
    M2_5,
    #[serde(rename = "4.5")]
    M4_5,
    Significant,
}

impl FeedThreshold {
    fn path_segment(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::M1_0 => "1.0",
            Self::M2_5 => "2.5",
            Self::M4_5 => "4.5",
            Self::Significant => "significant",
        }
    }
}

/// Time window covered by a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedWindow {
    Hour,
    Day,
    Week,
    Month,
}

impl FeedWindow {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

/// Earthquake feed selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UsgsFeed {
    Summary {
        threshold: FeedThreshold,
        window: FeedWindow,
    },
    Custom {
        url: String,
    },
}

impl UsgsFeed {
    pub fn summary(threshold: FeedThreshold, window: FeedWindow) -> Self {
        Self::Summary { threshold, window }
    }

    /// Resolves the preset into a concrete feed URL
    pub fn url(&self) -> String {
        match self {
            Self::Summary { threshold, window } => format!(
                "{}/{}_{}.geojson",
                USGS_SUMMARY_FEED_BASE,
                threshold.path_segment(),
                window.path_segment()
            ),
            Self::Custom { url } => url.clone(),
        }
    }
}

impl Default for UsgsFeed {
    fn default() -> Self {
        Self::summary(FeedThreshold::All, FeedWindow::Week)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuakeMapConfig {
    /// Earthquake feed to load
    pub earthquake_feed: UsgsFeed,
    /// Plate boundary GeoJSON location
    pub plate_boundaries_url: String,
    /// Whether the earthquake overlay starts checked in the layer control
    pub show_earthquakes: bool,
    /// Whether the plate overlay starts checked in the layer control
    pub show_tectonic_plates: bool,
}

impl Default for QuakeMapConfig {
    fn default() -> Self {
        Self {
            earthquake_feed: UsgsFeed::default(),
            plate_boundaries_url: PLATE_BOUNDARIES_URL.to_string(),
            show_earthquakes: true,
            show_tectonic_plates: true,
        }
    }
}

impl QuakeMapConfig {
    /// Parses a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if let UsgsFeed::Custom { url } = &self.earthquake_feed {
            if url.trim().is_empty() {
                return Err(MapError::Config("earthquake feed URL is empty".to_string()));
            }
        }
        if self.plate_boundaries_url.trim().is_empty() {
            return Err(MapError::Config(
                "plate boundaries URL is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feed_is_all_week() {
        assert_eq!(
            UsgsFeed::default().url(),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson"
        );
    }

    #[test]
    fn test_summary_presets_resolve() {
        let feed = UsgsFeed::summary(FeedThreshold::M4_5, FeedWindow::Day);
        assert!(feed.url().ends_with("/4.5_day.geojson"));

        let feed = UsgsFeed::summary(FeedThreshold::Significant, FeedWindow::Month);
        assert!(feed.url().ends_with("/significant_month.geojson"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = QuakeMapConfig::from_json(
            r#"{
                "earthquake_feed": { "kind": "summary", "threshold": "2.5", "window": "hour" },
                "show_tectonic_plates": false
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.earthquake_feed,
            UsgsFeed::summary(FeedThreshold::M2_5, FeedWindow::Hour)
        );
        assert_eq!(config.plate_boundaries_url, PLATE_BOUNDARIES_URL);
        assert!(config.show_earthquakes);
        assert!(!config.show_tectonic_plates);
    }

    #[test]
    fn test_empty_custom_url_is_rejected() {
        let result = QuakeMapConfig::from_json(
            r#"{ "earthquake_feed": { "kind": "custom", "url": " " } }"#,
        );
        assert!(matches!(result, Err(MapError::Config(_))));
    }
}

use anyhow::Context;
use clap::Parser;
use quakemap::{
    background::spawn_overlay_loads, FeatureSource, HttpFeatureSource, Overlay, OverlayStatus,
    QuakeMap, QuakeMapConfig,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Fetch earthquake and plate boundary feeds and print the composed layers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print visible descriptors and the legend as JSON
    #[arg(long)]
    json: bool,
}

/// Headless loader: fetches both feeds and prints the composed layers
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quakemap::init_logging();

    let options = Options::parse();
    let config = match &options.config {
        Some(path) => QuakeMapConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => QuakeMapConfig::default(),
    };

    let client = reqwest::Client::new();
    let earthquakes: Arc<dyn FeatureSource> = Arc::new(HttpFeatureSource::with_client(
        "earthquake feed",
        config.earthquake_feed.url(),
        client.clone(),
    ));
    let plates: Arc<dyn FeatureSource> = Arc::new(HttpFeatureSource::with_client(
        "plate boundaries",
        config.plate_boundaries_url.clone(),
        client,
    ));

    let map = Arc::new(Mutex::new(QuakeMap::from_config(&config)));
    let handles = spawn_overlay_loads(Arc::clone(&map), earthquakes, plates);

    tokio::select! {
        _ = wait_for_loads(handles) => {}
        _ = tokio::signal::ctrl_c() => {
            log::warn!("Interrupted before both feeds settled");
        }
    }

    let map = map
        .lock()
        .map_err(|_| anyhow::anyhow!("map context poisoned"))?;

    if options.json {
        let layers = serde_json::json!({
            "earthquakes": map.visible_descriptors(Overlay::Earthquakes),
            "tectonic_plates": map.visible_descriptors(Overlay::TectonicPlates),
            "legend": map.legend(),
        });
        println!("{}", serde_json::to_string_pretty(&layers)?);
        return Ok(());
    }

    print_summary(&map);
    Ok(())
}

async fn wait_for_loads(handles: [tokio::task::JoinHandle<()>; 2]) {
    for handle in handles {
        if let Err(e) = handle.await {
            log::error!("Overlay task failed: {}", e);
        }
    }
}

fn print_summary(map: &QuakeMap) {
    println!("Overlays:");
    for group in map.overlays() {
        let state = match group.status() {
            OverlayStatus::Pending => "pending".to_string(),
            OverlayStatus::Ready => format!("{} layers", group.descriptors().len()),
            OverlayStatus::Failed(reason) => format!("failed ({})", reason),
        };
        let check = if group.is_visible() { "x" } else { " " };
        println!("  [{}] {:<16} {}", check, group.name(), state);
    }

    if let Some(legend) = map.legend() {
        println!("Depth (km):");
        for bucket in legend {
            println!("  {} {}", bucket.color, bucket.label());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_parse() {
        let options = Options::try_parse_from(["quakemap-app", "--config", "feeds.json", "--json"])
            .unwrap();
        assert_eq!(options.config, Some(PathBuf::from("feeds.json")));
        assert!(options.json);

        let options = Options::try_parse_from(["quakemap-app"]).unwrap();
        assert!(options.config.is_none());
        assert!(!options.json);

        assert!(Options::try_parse_from(["quakemap-app", "--bogus"]).is_err());
    }
}

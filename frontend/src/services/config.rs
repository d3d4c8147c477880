use anyhow::{Context, Result};
use shared::{StorageBackend, TrackerConfig};

use super::logging::Logger;

/// Load config overrides saved under [`TrackerConfig::OVERRIDES_KEY`].
/// Missing overrides are normal; unreadable ones are reported and ignored.
pub fn load_config(backend: &dyn StorageBackend) -> TrackerConfig {
    match read_overrides(backend) {
        Ok(Some(config)) => config,
        Ok(None) => TrackerConfig::default(),
        Err(e) => {
            Logger::warn_with_component("config", &format!("Using default config: {:#}", e));
            TrackerConfig::default()
        }
    }
}

fn read_overrides(backend: &dyn StorageBackend) -> Result<Option<TrackerConfig>> {
    let raw = backend
        .get_item(TrackerConfig::OVERRIDES_KEY)
        .context("failed to read config overrides")?;

    raw.map(|raw| {
        serde_json::from_str::<TrackerConfig>(&raw)
            .with_context(|| format!("invalid JSON under '{}'", TrackerConfig::OVERRIDES_KEY))
    })
    .transpose()
}

//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::blind::BlindConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Named blind configurations.
    pub blinds: FnvIndexMap<String<32>, BlindConfig, 8>,
}

impl SystemConfig {
    /// Get a blind configuration by key.
    pub fn blind(&self, name: &str) -> Option<&BlindConfig> {
        self.blinds
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all blind keys.
    pub fn blind_names(&self) -> impl Iterator<Item = &str> {
        self.blinds.keys().map(|s| s.as_str())
    }
}

//! Activity display names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL: &str = "Art Workshop";

/// Maps activity keys (as stored on a booking) to human-readable labels.
///
/// Injected into the encoder through `EncoderConfig` so deployments and
/// tests can supply their own activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityCatalog {
    /// Label used for keys missing from `activities`
    pub default_label: String,
    pub activities: BTreeMap<String, String>,
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        let activities = [
            ("onesie", "Onesie Workshop"),
            ("fluid-art", "Fluid Art Workshop"),
            ("canvas", "Canvas Workshop"),
        ]
        .into_iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect();

        ActivityCatalog {
            default_label: DEFAULT_LABEL.to_string(),
            activities,
        }
    }
}

impl ActivityCatalog {
    pub fn new(default_label: impl Into<String>, activities: BTreeMap<String, String>) -> Self {
        ActivityCatalog {
            default_label: default_label.into(),
            activities,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.activities.contains_key(key)
    }

    /// Label for `key`, falling back to the default label.
    pub fn label(&self, key: &str) -> &str {
        self.activities
            .get(key)
            .map(String::as_str)
            .unwrap_or(&self.default_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_labels() {
        let catalog = ActivityCatalog::default();
        assert_eq!(catalog.label("onesie"), "Onesie Workshop");
        assert_eq!(catalog.label("fluid-art"), "Fluid Art Workshop");
        assert_eq!(catalog.label("canvas"), "Canvas Workshop");
    }

    #[test]
    fn unknown_key_falls_back() {
        let catalog = ActivityCatalog::default();
        assert!(!catalog.contains("unknown-key"));
        assert_eq!(catalog.label("unknown-key"), DEFAULT_LABEL);
    }

    #[test]
    fn custom_catalog_replaces_defaults() {
        let mut activities = BTreeMap::new();
        activities.insert("pottery".to_string(), "Pottery Evening".to_string());
        let catalog = ActivityCatalog::new("Studio Session", activities);

        assert_eq!(catalog.label("pottery"), "Pottery Evening");
        assert_eq!(catalog.label("canvas"), "Studio Session");
    }
}

//! Encoder configuration at ~/.config/artcal/config.toml
//!
//! Every field has a default, so the file is optional. `ARTCAL_*`
//! environment variables override file values (e.g. `ARTCAL_YEAR=2026`).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::catalog::ActivityCatalog;
use crate::device::DEFAULT_MOBILE_MARKERS;
use crate::error::{ArtCalError, ArtCalResult};

/// Year bookings are interpreted in. Bookings only carry "DD/MM".
pub const DEFAULT_YEAR: i32 = 2025;

static DEFAULT_UID_DOMAIN: &str = "event-manager";
static DEFAULT_CURRENCY_SYMBOL: &str = "₹";
static DEFAULT_DOWNLOAD_DIR: &str = "~/Downloads";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub year: i32,

    /// Suffix after the `@` in generated UIDs
    pub uid_domain: String,

    /// Prefix for the per-person charge in descriptions
    pub currency_symbol: String,

    /// User-agent substrings that mark a mobile device
    pub mobile_markers: Vec<String>,

    /// Where saved .ics files go
    pub download_dir: PathBuf,

    pub catalog: ActivityCatalog,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            year: DEFAULT_YEAR,
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            mobile_markers: DEFAULT_MOBILE_MARKERS.iter().map(|m| m.to_string()).collect(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            catalog: ActivityCatalog::default(),
        }
    }
}

impl EncoderConfig {
    pub fn config_path() -> ArtCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ArtCalError::Config("Could not determine config directory".into()))?
            .join("artcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first if
    /// no config file exists yet.
    pub fn load() -> ArtCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) plus environment overrides.
    pub fn load_from(path: &Path) -> ArtCalResult<Self> {
        let config: EncoderConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("ARTCAL"))
            .build()
            .map_err(|e| ArtCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ArtCalError::Config(e.to_string()))?;

        log::debug!("Loaded config from {} (year {})", path.display(), config.year);

        Ok(config)
    }

    /// `download_dir` with `~` expanded.
    pub fn download_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.download_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn to_toml(&self) -> ArtCalResult<String> {
        toml::to_string_pretty(self).map_err(|e| ArtCalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ArtCalResult<()> {
        let contents = format!(
            "\
# artcal configuration

# Year used for bookings (they only store DD/MM):
# year = {DEFAULT_YEAR}

# Suffix for generated event UIDs:
# uid_domain = \"{DEFAULT_UID_DOMAIN}\"

# Currency prefix for the per-person charge:
# currency_symbol = \"{DEFAULT_CURRENCY_SYMBOL}\"

# Where .ics files are saved for mobile delivery:
# download_dir = \"{DEFAULT_DOWNLOAD_DIR}\"

# User-agent markers that count as a mobile device:
# mobile_markers = [\"Android\", \"iPhone\", \"iPad\", \"iPod\"]

# Activity labels:
# [catalog]
# default_label = \"Art Workshop\"
#
# [catalog.activities]
# onesie = \"Onesie Workshop\"
# fluid-art = \"Fluid Art Workshop\"
# canvas = \"Canvas Workshop\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ArtCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ArtCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

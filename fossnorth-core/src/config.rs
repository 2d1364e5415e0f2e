//! Configuration shared by the foss-north tools.

use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, File, FileFormat};
use serde::Deserialize;

use crate::error::{FossNorthError, FossNorthResult};

/// Configuration at `~/.config/fossnorth/config.toml`.
///
/// Every key is optional; missing keys fall back to the values for the
/// 2025 edition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarSettings,
    pub pass: PassSettings,
}

/// Metadata written into the generated calendar.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    pub name: String,
    pub prod_id: String,
    pub uid_prefix: String,
    pub venue: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        CalendarSettings {
            name: "foss-north 2025".to_string(),
            prod_id: "-//net.zegnat//foss-north 2025 Calendar//EN".to_string(),
            uid_prefix: "net.zegnat.se.foss-north.2025".to_string(),
            venue: "Chalmersplatsen 1, 412 58 Göteborg".to_string(),
        }
    }
}

/// Where the ticket lives and what the wallet card looks like.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PassSettings {
    pub ticket_url: String,
    pub share_url: String,
    pub store: String,
    pub header_color: String,
}

impl Default for PassSettings {
    fn default() -> Self {
        PassSettings {
            ticket_url: "https://foss-north.se/events/2025/register/viewticket/".to_string(),
            share_url: "https://catima.app/share".to_string(),
            store: "foss-north 2025".to_string(),
            header_color: "-464712".to_string(),
        }
    }
}

impl Config {
    pub fn config_path() -> FossNorthResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FossNorthError::Config("Could not determine config directory".into()))?
            .join("fossnorth");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicitly given file must exist. Without one, the default location
    /// is read if present and the built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> FossNorthResult<Self> {
        let source = match explicit {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path()?)
                .format(FileFormat::Toml)
                .required(false),
        };

        let config: Config = ConfigBuilder::builder()
            .add_source(source)
            .build()
            .map_err(|e| FossNorthError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FossNorthError::Config(e.to_string()))?;

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }
}

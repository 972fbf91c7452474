//! Configuration file support.
//!
//! Settings live in an INI file under the user's configuration directory:
//!
//! ```text
//! ~/.config/tourguide/config.ini
//!
//! [session]
//! waypoint_radius = 10
//! waypoint_separation = 25
//! ```
//!
//! Missing keys fall back to their defaults; a missing file is equivalent to
//! an empty one.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use thiserror::Error;

use crate::controller::{
    check_distance, ControllerConfig, DEFAULT_WAYPOINT_RADIUS, DEFAULT_WAYPOINT_SEPARATION,
};

const SESSION_SECTION: &str = "session";

/// Errors loading, saving or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or parsed.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    /// The file could not be written.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration directory could not be created.
    #[error("failed to create directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value is malformed or out of range.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// No such configuration key.
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),
}

/// Path of the configuration file.
///
/// Falls back to the working directory when the platform has no
/// configuration directory.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tourguide")
        .join("config.ini")
}

/// `[session]` settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub waypoint_radius: f64,
    pub waypoint_separation: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            waypoint_radius: DEFAULT_WAYPOINT_RADIUS,
            waypoint_separation: DEFAULT_WAYPOINT_SEPARATION,
        }
    }
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub session: SessionSettings,
}

impl ConfigFile {
    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        for key in ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key_name()));
            if let Some(value) = value {
                key.set(&mut config, value)?;
            }
        }
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }
        ini.write_to_file(path).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Controller settings described by this file.
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig::new(
            self.session.waypoint_radius,
            self.session.waypoint_separation,
        )
    }
}

/// A settable configuration key, named `section.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    WaypointRadius,
    WaypointSeparation,
}

impl ConfigKey {
    /// All keys, in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[ConfigKey::WaypointRadius, ConfigKey::WaypointSeparation]
    }

    /// Full name, e.g. `session.waypoint_radius`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// INI section holding this key.
    pub fn section(&self) -> &'static str {
        SESSION_SECTION
    }

    /// Key name within its section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::WaypointRadius => "waypoint_radius",
            ConfigKey::WaypointSeparation => "waypoint_separation",
        }
    }

    /// Current value as text.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::WaypointRadius => config.session.waypoint_radius.to_string(),
            ConfigKey::WaypointSeparation => config.session.waypoint_separation.to_string(),
        }
    }

    /// Parse and store a value.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let parsed: f64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason: "not a number".to_string(),
        })?;
        check_distance(&self.name(), parsed)?;

        match self {
            ConfigKey::WaypointRadius => config.session.waypoint_radius = parsed,
            ConfigKey::WaypointSeparation => config.session.waypoint_separation = parsed,
        }
        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

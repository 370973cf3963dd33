//! Application configuration.
//!
//! Sources, lowest priority first: built-in defaults, `kegtrack.toml` in the
//! working directory, an explicit file, then `KEGTRACK__*` environment
//! variables (`KEGTRACK__ASSIGNMENT__RESELECT=reset_session`).

use crate::domain::{DriverProfile, ReselectPolicy, SupportContact};
use crate::error::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KegTrackConfig {
    /// Default tracing level when `RUST_LOG` is unset.
    pub log_level: LogLevel,
    pub assignment: AssignmentConfig,
    pub directory: DirectoryConfig,
    pub driver: DriverProfile,
    pub support: SupportContact,
    pub activity: ActivityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".into())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssignmentConfig {
    pub reselect: ReselectPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// JSON file of outlets for the assignment screen.
    pub assignment_path: Option<PathBuf>,
    /// JSON file of outlets with pickup lists for the collection screen.
    pub collection_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub capacity: usize,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self { capacity: 10 }
    }
}

impl KegTrackConfig {
    /// Loads configuration, layering an optional explicit file over `kegtrack.toml`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::with_name("kegtrack").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("KEGTRACK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

// std imports
use std::include_str;
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub wildcard: char,
    pub output: OutputSettings,
    pub automaton: AutomatonSettings,
}

impl Settings {
    /// Loads settings from the embedded defaults, the user configuration file
    /// if it exists, and `custom` files in order, later sources taking precedence.
    pub fn load<I, P>(user: Option<&Path>, custom: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(user) = user {
            log::debug!("user configuration: {}", user.display());
            builder = builder.add_source(File::from(user).required(false));
        }
        for path in custom {
            let path = path.as_ref();
            log::debug!("custom configuration: {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Default location of the user configuration file.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(crate::config::APP_NAME).join("config.yaml"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputSettings {
    pub show_count: bool,
    pub separator: String,
}

// ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AutomatonSettings {
    pub precompute: bool,
}

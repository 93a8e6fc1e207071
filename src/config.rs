// std imports
use std::path::{Path, PathBuf};

// third-party imports
use once_cell::sync::{Lazy, OnceCell};

// local imports
use crate::error::Result;
use crate::settings::Settings;

// ---

pub const APP_NAME: &str = "fuzzmatch";

static GLOBAL: OnceCell<Settings> = OnceCell::new();
static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the global settings, or the defaults if they were never initialized.
pub fn get() -> &'static Settings {
    GLOBAL.get().unwrap_or(&DEFAULT)
}

pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Sets the global settings, keeping the first value if called more than once.
pub fn initialize(settings: Settings) {
    if GLOBAL.set(settings).is_err() {
        log::debug!("global settings are already initialized");
    }
}

/// Loads settings from the defaults, the user configuration and `custom` files.
pub fn load<I, P>(custom: I) -> Result<Settings>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let user: Option<PathBuf> = Settings::user_config_path();
    Settings::load(user.as_deref(), custom)
}

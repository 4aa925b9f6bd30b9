//! Cabinetr Settings Crate
//!
//! Handles application configuration: frame stock defaults, the cutlist
//! formula, and where projects and exports live.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, Config, ExportSettings, StorageSettings, APP_DIR_NAME,
    CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};

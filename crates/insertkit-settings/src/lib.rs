//! # InsertKit Settings
//!
//! Configuration file handling for InsertKit: derivation defaults, remembered
//! dialog state, and the insert table, loaded from a TOML or JSON file and
//! validated eagerly. A malformed file aborts the load; no partial catalog is
//! ever produced.

pub mod config;
pub mod persistence;

pub use config::{Config, DialogDefaults, HoleDefaults, InsertEntry};
pub use persistence::{default_config_path, SettingsStore};

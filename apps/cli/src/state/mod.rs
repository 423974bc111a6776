//! # Application State
//!
//! State owned by the running app.
//!
//! - [`InventoryManager`]: the product collection, the edit marker and the
//!   snapshot writer handle. Exactly one instance, built at startup and
//!   passed by `&mut` to the command layer.
//! - [`AppConfig`]: settings from `stockroom.toml` and the environment.

pub mod config;
pub mod inventory;

pub use config::{AppConfig, ConfigError, ConfigResult, LoggingSettings, StorageSettings};
pub use inventory::InventoryManager;

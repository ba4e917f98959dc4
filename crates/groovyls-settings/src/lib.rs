//! Editor settings store for the Groovy classpath tools
//!
//! Models the host editor's merged configuration as an explicit value that
//! callers pass around, instead of process-wide state.

pub mod error;
pub mod layered;
pub mod loader;
pub mod store;

pub use error::{Error, Result};
pub use layered::{LayeredSettings, SettingsScope};
pub use loader::{WORKSPACE_SETTINGS_PATH, default_user_settings_path};
pub use store::{ConfigurationStore, Settings};

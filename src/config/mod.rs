//! Configuration module - settings file loading and types

pub mod loader;
pub mod types;

pub use loader::load_config;
pub use types::{AppConfig, MailConfig, MonitorSettings, ProviderConfig};

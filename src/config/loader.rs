//! Configuration loader

use config::{Config, Environment, File, FileFormat};

use super::types::AppConfig;
use crate::common::errors::{MonitorError, Result};

/// Load configuration from the settings file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with QUOTEALERT_)
/// 2. Settings file (JSON format)
/// 3. Default values
///
/// A missing or malformed settings file is a startup error; the monitor
/// never runs without one.
pub fn load_config(config_path: &str) -> Result<AppConfig> {
    let builder = Config::builder()
        .add_source(File::new(config_path, FileFormat::Json).required(true))
        .add_source(
            Environment::with_prefix("QUOTEALERT")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build().map_err(|e| {
        MonitorError::Configuration(format!(
            "Arquivo de configuração não encontrado ou inválido ({config_path}): {e}"
        ))
    })?;

    let mut app: AppConfig = config.try_deserialize().map_err(|e| {
        MonitorError::Configuration(format!(
            "Falha ao desserializar o arquivo de configuração: {e}"
        ))
    })?;

    // The provider key may be injected through the environment instead of
    // being written into the settings file.
    if app.provider.api_key.is_none() {
        app.provider.api_key = std::env::var("ALPHAVANTAGE_API_KEY").ok();
    }

    Ok(app)
}

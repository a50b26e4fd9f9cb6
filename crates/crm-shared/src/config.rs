//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Directory for rolling log files; stderr only when unset.
    pub directory: Option<String>,
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("CRM_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("api.base_url", constants::DEFAULT_API_BASE_URL)?
            .set_default("api.timeout_seconds", constants::DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("session.file", constants::DEFAULT_SESSION_FILE)?
            .set_default("logging.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CRM").separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_files() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.session.file.ends_with(".crm-session.json"));
    }
}

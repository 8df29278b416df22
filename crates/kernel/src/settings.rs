use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "ORDERDB_ENV";
const CONFIG_DIR_ENV: &str = "ORDERDB_CONFIG_DIR";

/// Deployment environment the bootstrap is running against.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub app_user: AppUserSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Default to repo root `config` directory.
                std::env::current_dir()
                    .map(|cwd| cwd.join("config"))
                    .expect("unable to resolve current directory")
            });

        let base_path = config_dir.join("base.toml");
        let environment_filename = format!("{}.toml", environment);
        let environment_path = config_dir.join(environment_filename);

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(config::Environment::with_prefix("ORDERDB").separator("_"));

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // Override environment field with parsed enum variant.
        settings.environment = match environment.as_str() {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(anyhow!(
                    "unsupported environment '{}'; expected local/staging/production",
                    other
                ));
            }
        };

        Ok(settings)
    }
}

/// Connection coordinates for the target document store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "StoreSettings::default_uri")]
    pub uri: String,
    #[serde(default = "StoreSettings::default_database")]
    pub database: String,
}

impl StoreSettings {
    fn default_uri() -> String {
        "mongodb://localhost:27017".to_string()
    }

    fn default_database() -> String {
        "order_db".to_string()
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            uri: Self::default_uri(),
            database: Self::default_database(),
        }
    }
}

/// Credential provisioned for the application, scoped to the target database.
#[derive(Debug, Clone, Deserialize)]
pub struct AppUserSettings {
    #[serde(default = "AppUserSettings::default_username")]
    pub username: String,
    #[serde(default = "AppUserSettings::default_password")]
    pub password: String,
}

impl AppUserSettings {
    fn default_username() -> String {
        "order_user".to_string()
    }

    fn default_password() -> String {
        "order_password".to_string()
    }
}

impl Default for AppUserSettings {
    fn default() -> Self {
        Self {
            username: Self::default_username(),
            password: Self::default_password(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_store_targets_local_order_db() {
        let settings = Settings::default();
        assert_eq!(settings.store.uri, "mongodb://localhost:27017");
        assert_eq!(settings.store.database, "order_db");
    }

    #[test]
    fn default_app_user_matches_provisioned_credential() {
        let settings = Settings::default();
        assert_eq!(settings.app_user.username, "order_user");
        assert_eq!(settings.app_user.password, "order_password");
    }

    #[test]
    fn default_telemetry_is_pretty_info() {
        let settings = Settings::default();
        assert_eq!(settings.telemetry.log_level, "info");
        assert_eq!(settings.telemetry.log_format, LogFormat::Pretty);
    }
}

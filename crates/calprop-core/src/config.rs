use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::constants::DEFAULT_CALENDAR_COLOR;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub context: ContextConfig,
    pub logging: LoggingConfig,
}

/// Caller context the descriptors are resolved against.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextConfig {
    /// Principal URL of the acting user, compared against ACL hrefs.
    pub principal_url: String,
    /// User id of the acting user, compared against resolved owners.
    pub current_user: Option<String>,
    pub public_mode: bool,
    pub default_color: String,
    /// Address the client is currently served from.
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be stored.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("context.principal_url", "")?
            .set_default("context.public_mode", false)?
            .set_default("context.default_color", DEFAULT_CALENDAR_COLOR)?
            .set_default("context.location", "")?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(
                config::Environment::with_prefix("CALPROP")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn defaults_deserialize() {
        let settings = Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        tracing::debug!(settings = ?settings, "Default settings");

        assert_eq!(settings.context.default_color, DEFAULT_CALENDAR_COLOR);
        assert!(!settings.context.public_mode);
        assert!(settings.context.current_user.is_none());
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn overrides_take_precedence() {
        let settings = Settings::defaults()
            .unwrap()
            .set_override("context.current_user", "alice")
            .unwrap()
            .set_override("context.public_mode", true)
            .unwrap()
            .set_override(
                "context.principal_url",
                "/remote.php/dav/principals/users/alice/",
            )
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.context.current_user.as_deref(), Some("alice"));
        assert!(settings.context.public_mode);
        assert_eq!(
            settings.context.principal_url,
            "/remote.php/dav/principals/users/alice/"
        );
    }
}

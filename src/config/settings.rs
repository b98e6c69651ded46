//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::models::ReferenceEntry;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    #[serde(default)]
    pub admin_ids: Vec<i64>,
}

/// Booking store configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// JSON snapshot of bookings loaded once at start-up
    pub seed_path: Option<String>,
}

/// Reference tables used to resolve booking foreign keys
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub barbers: Vec<ReferenceEntry>,
    #[serde(default)]
    pub services: Vec<ReferenceEntry>,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    #[serde(default = "default_translations_dir")]
    pub translations_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    /// Write the log file as JSON lines
    #[serde(default)]
    pub json: bool,
}

/// Mini-app host theme
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Applied to both the host header and background
    pub color: String,
}

fn default_translations_dir() -> String {
    "translations".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { color: crate::host::DEFAULT_THEME_COLOR.to_string() }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from the named file (extension optional) and the environment
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("BARBERDESK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("bot.admin_ids")
                    .with_list_parse_key("i18n.supported_languages")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BarberDeskError> {
        super::validation::validate_settings(self)
    }

    /// Whether a Telegram user may open the admin dashboard
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.bot.admin_ids.contains(&user_id)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_ids: vec![],
            },
            store: StoreConfig::default(),
            catalog: CatalogConfig::default(),
            i18n: I18nConfig {
                default_language: "ru".to_string(),
                supported_languages: vec!["ru".to_string(), "en".to_string()],
                translations_dir: default_translations_dir(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
                json: false,
            },
            theme: ThemeConfig::default(),
        }
    }
}

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub offline: OfflineConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// URL the terminal client loads the menu document from.
    #[serde(default = "default_menu_url")]
    pub url: String,
    /// Document variant the board serves when none is requested.
    #[serde(default = "default_menu_variant")]
    pub variant: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            url: default_menu_url(),
            variant: default_menu_variant(),
        }
    }
}

fn default_menu_url() -> String {
    "http://127.0.0.1:3000/static/menu-veg.json".to_string()
}

fn default_menu_variant() -> String {
    "veg".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct OfflineConfig {
    #[serde(default = "default_offline_enabled")]
    pub enabled: bool,
    /// Where the cache store lives.
    #[serde(default = "default_offline_database_url")]
    pub database_url: String,
    /// Origin the relative asset manifest is rooted at.
    #[serde(default = "default_offline_origin")]
    pub origin: String,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            enabled: default_offline_enabled(),
            database_url: default_offline_database_url(),
            origin: default_offline_origin(),
        }
    }
}

fn default_offline_enabled() -> bool {
    true
}

fn default_offline_database_url() -> String {
    "sqlite:messboard-cache.db?mode=rwc".to_string()
}

fn default_offline_origin() -> String {
    "http://127.0.0.1:3000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub const MENU_VARIANTS: [&str; 2] = ["veg", "nonveg"];

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MESSBOARD__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults cover a bare checkout.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MESSBOARD")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.menu.url.is_empty() {
            return Err("Menu URL must not be empty".to_string());
        }
        if !MENU_VARIANTS.contains(&self.menu.variant.as_str()) {
            return Err(format!(
                "Menu variant must be one of {MENU_VARIANTS:?}, got '{}'",
                self.menu.variant
            ));
        }
        if self.offline.enabled {
            if self.offline.database_url.is_empty() {
                return Err("Offline cache database URL must not be empty".to_string());
            }
            if url::Url::parse(&self.offline.origin).is_err() {
                return Err(format!(
                    "Offline origin must be an absolute URL, got '{}'",
                    self.offline.origin
                ));
            }
        }
        Ok(())
    }
}

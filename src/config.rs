use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use jungdam_contact::{Limits, RequiredFields};
use jungdam_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Tag in the mail subject, `[<site_tag> 문의]`
    #[serde(default = "default_site_tag")]
    pub site_tag: String,
    /// Canonical required-field set of this deployment
    #[serde(default)]
    pub required_fields: RequiredFields,
    #[serde(flatten)]
    pub limits: Limits,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            site_tag: default_site_tag(),
            required_fields: RequiredFields::default(),
            limits: Limits::default(),
        }
    }
}

fn default_site_tag() -> String {
    "JUNGDAM".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    [
        "http://localhost:5500",
        "http://127.0.0.1:5500",
        "http://localhost:3000",
        "http://127.0.0.1:3000",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Plain environment names kept for deployments configured before the
/// `JUNGDAM__` prefix existed.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("SMTP_USER", "email.smtp_username"),
    ("EMAIL_USER", "email.smtp_username"),
    ("SMTP_PASS", "email.smtp_password"),
    ("EMAIL_PASS", "email.smtp_password"),
    ("TO_EMAIL", "email.contact_address"),
];

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (TO_EMAIL, EMAIL_USER, ...)
    /// 2. Environment variables (JUNGDAM__EMAIL__CONTACT_ADDRESS, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("JUNGDAM")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("contact.required_fields")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        for (name, key) in LEGACY_ENV {
            if let Ok(value) = env::var(name) {
                builder = builder.set_override(*key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Delivery credentials are deliberately not checked here: their absence
    /// is reported per request as a server error.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.limits.max_files == 0 {
            return Err("contact.max_files must be at least 1".to_string());
        }
        if self.contact.limits.max_file_size == 0 {
            return Err("contact.max_file_size must be greater than 0".to_string());
        }
        if self.contact.required_fields.is_empty() {
            return Err("contact.required_fields must name at least one field".to_string());
        }
        Ok(())
    }
}

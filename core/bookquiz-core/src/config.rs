use serde::Deserialize;
use std::env;

use crate::models::session::SessionRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Redis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub redis_uri: Option<String>,
    pub key_prefix: String,
    pub log_filter: String,
    pub log_format: LogFormat,
    pub rules: SessionRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::Memory,
            redis_uri: None,
            key_prefix: String::new(),
            log_filter: "bookquiz_core=debug".to_string(),
            log_format: LogFormat::Pretty,
            rules: SessionRules::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("BOOKQUIZ").separator("__"))
            .build()?;

        let defaults = Config::default();

        let storage_backend = match settings
            .get_string("storage.backend")
            .or_else(|_| env::var("STORAGE_BACKEND"))
            .unwrap_or_else(|_| "memory".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => StorageBackend::Memory,
            "redis" => StorageBackend::Redis,
            other => {
                return Err(config::ConfigError::Message(format!(
                    "unknown storage backend '{}'",
                    other
                )))
            }
        };

        let redis_uri = settings
            .get_string("storage.redis_uri")
            .or_else(|_| env::var("REDIS_URI"))
            .ok();

        if storage_backend == StorageBackend::Redis && redis_uri.is_none() {
            return Err(config::ConfigError::Message(
                "storage.redis_uri must be set for the redis backend".to_string(),
            ));
        }

        let key_prefix = settings
            .get_string("storage.key_prefix")
            .unwrap_or(defaults.key_prefix);

        let log_filter = settings
            .get_string("log.filter")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or(defaults.log_filter);

        let log_format = match settings.get_string("log.format").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let rules = SessionRules {
            pack_size: read_positive(&settings, "rules.pack_size", defaults.rules.pack_size as i64)?
                as usize,
            starting_lives: read_positive(
                &settings,
                "rules.starting_lives",
                i64::from(defaults.rules.starting_lives),
            )? as u32,
            win_multiplier: read_positive(
                &settings,
                "rules.win_multiplier",
                defaults.rules.win_multiplier as i64,
            )? as u64,
        };
        rules
            .validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(Config {
            storage_backend,
            redis_uri,
            key_prefix,
            log_filter,
            log_format,
            rules,
        })
    }
}

fn read_positive(
    settings: &config::Config,
    key: &str,
    default: i64,
) -> Result<i64, config::ConfigError> {
    match settings.get_int(key) {
        Ok(value) if value > 0 && value <= i64::from(u32::MAX) => Ok(value),
        Ok(value) => Err(config::ConfigError::Message(format!(
            "{} must be a positive integer, got {}",
            key, value
        ))),
        Err(config::ConfigError::NotFound(_)) => Ok(default),
        Err(e) => Err(e),
    }
}

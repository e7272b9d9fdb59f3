use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub cors_allowed_origin: String,
    pub cors_max_age_secs: u64,
    pub seed_on_startup: bool,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:8080".to_string(),
            database_url: "sqlite://trood.db".to_string(),
            database_max_connections: 5,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            cors_max_age_secs: 12 * 60 * 60,
            seed_on_startup: true,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", defaults.server_address),
            database_url: get_env_or("DATABASE_URL", defaults.database_url),
            database_max_connections: get_env_parse_or(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            cors_allowed_origin: get_env_or("CORS_ALLOWED_ORIGIN", defaults.cors_allowed_origin),
            cors_max_age_secs: get_env_parse_or("CORS_MAX_AGE_SECS", defaults.cors_max_age_secs)?,
            seed_on_startup: get_env_parse_or("SEED_ON_STARTUP", defaults.seed_on_startup)?,
            log_json: get_env_parse_or("LOG_JSON", defaults.log_json)?,
        })
    }

    pub fn cors_max_age(&self) -> Duration {
        Duration::from_secs(self.cors_max_age_secs)
    }
}

fn get_env_or(name: &str, default: String) -> String {
    env::var(name).unwrap_or(default)
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

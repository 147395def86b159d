use anyhow::{Context, Result};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub listen_addr: String,
    pub log_level: String,
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env` if present.
    pub fn init() -> Result<Config> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let db_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let listen_addr = lookup("LISTEN_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let log_level = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            db_url,
            listen_addr,
            log_level,
        })
    }
}

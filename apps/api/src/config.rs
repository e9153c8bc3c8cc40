use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::render::DEFAULT_EMPTY_SKILLS_MESSAGE;

/// Where saved portfolios live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON file under `PORTFOLIO_DATA_DIR`.
    File,
    /// Process memory only; lost on restart.
    Memory,
}

impl StorageBackend {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("PORTFOLIO_STORAGE must be 'file' or 'memory', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on invalid values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub storage: StorageBackend,
    pub empty_skills_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            data_dir: PathBuf::from("./data"),
            storage_key: "portfolioData".to_string(),
            storage: StorageBackend::File,
            empty_skills_message: DEFAULT_EMPTY_SKILLS_MESSAGE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let storage_key = env_or("PORTFOLIO_STORAGE_KEY", &defaults.storage_key);
        if storage_key.trim().is_empty() || storage_key.contains(['/', '\\']) {
            bail!("PORTFOLIO_STORAGE_KEY must be a plain, non-empty file stem");
        }

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", &defaults.rust_log),
            data_dir: std::env::var_os("PORTFOLIO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_key,
            storage: StorageBackend::parse(&env_or("PORTFOLIO_STORAGE", "file"))
                .context("Invalid storage backend")?,
            empty_skills_message: env_or(
                "PORTFOLIO_EMPTY_SKILLS_MESSAGE",
                &defaults.empty_skills_message,
            ),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

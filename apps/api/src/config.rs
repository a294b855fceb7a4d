use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; everything has a usable default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Audit log database. When unset, generations are only logged.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Fixed seed for the idea generator, making every response repeatable.
    pub generator_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: optional_env("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            generator_seed: optional_env("GENERATOR_SEED")
                .map(|raw| raw.parse::<u64>())
                .transpose()
                .context("GENERATOR_SEED must be an unsigned 64-bit integer")?,
        })
    }

    /// Default tracing directives: this crate plus tower-http's request lines.
    pub fn log_filter(&self) -> String {
        format!(
            "{}={level},tower_http={level}",
            env!("CARGO_PKG_NAME"),
            level = self.rust_log
        )
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

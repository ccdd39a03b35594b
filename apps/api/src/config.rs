use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, enables the seeded tie-breaking jitter on the confidence
    /// scorer. Unset means fully deterministic scoring.
    pub scorer_jitter_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scorer_jitter_seed: match std::env::var("SCORER_JITTER_SEED") {
                Ok(raw) => Some(
                    raw.parse::<u64>()
                        .context("SCORER_JITTER_SEED must be a u64")?,
                ),
                Err(_) => None,
            },
        })
    }
}

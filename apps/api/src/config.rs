use std::time::Duration;

use anyhow::{Context, Result};

use crate::repository::LatencyProfile;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Uniform override for the mock repository delays. `None` keeps the
    /// standard per-operation profile; `Some(0)` disables delays.
    pub simulated_latency_ms: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            simulated_latency_ms: optional_env("SIMULATED_LATENCY_MS")
                .map(|raw| {
                    raw.parse::<u64>()
                        .context("SIMULATED_LATENCY_MS must be a whole number of milliseconds")
                })
                .transpose()?,
        })
    }

    pub fn latency(&self) -> LatencyProfile {
        match self.simulated_latency_ms {
            Some(ms) => LatencyProfile::uniform(Duration::from_millis(ms)),
            None => LatencyProfile::standard(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

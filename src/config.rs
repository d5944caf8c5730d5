use std::env;
use anyhow::{bail, Result};

pub const DEFAULT_CORE_HOST: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub core_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let core_host = lookup("CORE_HOST")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_CORE_HOST.to_string());

        if !core_host.starts_with("http://") && !core_host.starts_with("https://") {
            bail!(
                "CORE_HOST must be an http:// or https:// URL, got '{}'",
                core_host
            );
        }

        Ok(Config { core_host })
    }

    /// Absolute URL for a catalog path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.core_host.trim_end_matches('/'), path)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Core host: {}", self.core_host);
    }
}

use std::env;
use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = match lookup("SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| {
                    format!("SERVICE_PORT must be a valid port number (0-65535), got '{}'", raw)
                })?,
            None => DEFAULT_PORT,
        };

        let service_host = lookup("SERVICE_HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Config {
            service_host,
            service_port,
        })
    }

    /// Address string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service host: {}", self.service_host);
        tracing::info!("  Service port: {}", self.service_port);
    }
}

use std::env;
use anyhow::{Context, Result};

pub const DEFAULT_ENVIRONMENT: &str = "development";
/// The service always listens on every interface.
pub const BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let environment = env::var("NODE_ENV")
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Ok(Config {
            service_port,
            environment,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", BIND_HOST, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

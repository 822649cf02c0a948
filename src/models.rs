use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "devops-assignment-api";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const WELCOME_MESSAGE: &str = "DevOps Assignment - Node.js App";

/// Formats a UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Response type for the root endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub timestamp: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since process start
    pub uptime: f64,
    pub timestamp: String,
    pub environment: String,
}

/// Response type for status endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

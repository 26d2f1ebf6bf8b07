use crate::domain::error::ServiceError;
use std::env;

/// Process configuration, read once in main and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub max_body_bytes: usize,
    /// Enables the 31-character truncation repair in the extractor.
    pub repair_truncated_ids: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServiceError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ServiceError::Validation("DATABASE_URL must be set".into()))?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(v) => v.parse().map_err(|_| {
                ServiceError::Validation(format!("DB_MAX_CONNECTIONS is not a number: {v}"))
            })?,
            Err(_) => 20,
        };

        let repair_truncated_ids = env::var("SEPAY_REPAIR_TRUNCATED_IDS")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            // SePay payloads are small JSON documents.
            max_body_bytes: 64 * 1024,
            repair_truncated_ids,
        })
    }
}

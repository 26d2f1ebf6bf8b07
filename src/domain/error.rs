use thiserror::Error;

/// System-level failures only. Business outcomes (outbound transfer, no
/// identifier, order not found) are ordinary `ReconcileOutcome` values and
/// never travel through this type.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

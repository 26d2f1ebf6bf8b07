use {super::error::ServiceError, serde::{Deserialize, Serialize}};

/// SePay reports direction as `transferType: "in" | "out"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransferDirection {
    In,
    Out,
}

impl TransferDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl TryFrom<&str> for TransferDirection {
    type Error = ServiceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            other => Err(ServiceError::Validation(format!(
                "unknown transfer direction: {other}"
            ))),
        }
    }
}

/// One bank transfer event, already mapped from the transport payload.
/// `description` and `content` are the two free-text fields that may carry
/// the order identifier; `description` is checked first. The remaining
/// fields are passthrough metadata the core does not interpret.
#[derive(Debug, Clone)]
pub struct TransferNotification {
    pub direction: TransferDirection,
    /// VND has no minor unit, so the amount is a whole number.
    /// Absent in some gateway payloads; only a supplied non-positive
    /// amount blocks processing.
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub gateway: Option<String>,
    pub transaction_date: Option<String>,
    pub reference_code: Option<String>,
}

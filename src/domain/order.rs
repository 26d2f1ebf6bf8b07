use {
    super::error::ServiceError,
    chrono::{DateTime, Utc},
    derive_more::Display,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Order identifier recovered from bank transfer text: either 32 hex
/// characters or the hyphenated 8-4-4-4-12 GUID form. Lowercased on
/// construction so comparison against the store is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self, ServiceError> {
        let id = id.into().to_ascii_lowercase();
        let valid = match id.len() {
            32 => id.bytes().all(|b| b.is_ascii_hexdigit()),
            36 => {
                id.split('-').map(str::len).eq([8usize, 4, 4, 4, 12])
                    && id.bytes().all(|b| b.is_ascii_hexdigit() || b == b'-')
            }
            _ => false,
        };
        if !valid {
            return Err(ServiceError::Validation(format!(
                "OrderId must be 32 hex chars or a hyphenated GUID, got: {id}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Unpaid,
    Paid,
}

impl PaymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for PaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for PaymentState {
    type Error = ServiceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "unpaid" => Ok(Self::Unpaid),
            "paid" => Ok(Self::Paid),
            other => Err(ServiceError::Validation(format!(
                "unknown payment state: {other}"
            ))),
        }
    }
}

/// Order read model. The service never creates or deletes orders; it only
/// reads them and flips `payment_state`/`updated_at` on reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub order_id: OrderId,
    pub status: String,
    pub payment_state: PaymentState,
    pub shipping_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

use {super::order::OrderId, serde::Serialize};

/// Why a reconciliation attempt ended the way it did.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileReason {
    /// Outbound or non-positive transfer. An expected no-op, not a failure.
    NotInbound,
    /// No identifier in either text field. Terminal: re-running the same
    /// text cannot help.
    NoIdentifier,
    /// Identifier extracted but no such order in the store.
    OrderNotFound,
    /// Order found unpaid and flipped to paid.
    MarkedPaid,
    /// Order was already paid — a redelivered webhook converging on the
    /// same state. Treated as satisfied, not as failure.
    AlreadyPaid,
    /// Conditional update affected zero rows while the order is present
    /// and not paid. Should not happen; surfaced for investigation.
    UpdateNotApplied,
}

impl ReconcileReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInbound => "not_inbound",
            Self::NoIdentifier => "no_identifier",
            Self::OrderNotFound => "order_not_found",
            Self::MarkedPaid => "marked_paid",
            Self::AlreadyPaid => "already_paid",
            Self::UpdateNotApplied => "update_not_applied",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NotInbound => "not an inbound transfer",
            Self::NoIdentifier => "no order identifier found in transfer text",
            Self::OrderNotFound => "order not found",
            Self::MarkedPaid => "payment status updated",
            Self::AlreadyPaid => "order already marked paid",
            Self::UpdateNotApplied => "update did not apply",
        }
    }
}

/// Structured business result of one reconciliation attempt. The transport
/// adapter decides what status code this maps to; the core has no opinion.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileOutcome {
    pub accepted: bool,
    pub reason: ReconcileReason,
    pub order_id: Option<OrderId>,
}

impl ReconcileOutcome {
    pub fn accepted(reason: ReconcileReason, order_id: Option<OrderId>) -> Self {
        Self { accepted: true, reason, order_id }
    }

    pub fn rejected(reason: ReconcileReason, order_id: Option<OrderId>) -> Self {
        Self { accepted: false, reason, order_id }
    }
}

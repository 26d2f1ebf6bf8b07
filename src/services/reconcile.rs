use {
    crate::domain::error::ServiceError,
    crate::domain::notification::{TransferDirection, TransferNotification},
    crate::domain::order::PaymentState,
    crate::domain::outcome::{ReconcileOutcome, ReconcileReason},
    crate::domain::store::OrderStore,
    crate::extract::Extractor,
};

/// Matches one transfer notification to an order and marks it paid.
///
/// A linear gate sequence, short-circuiting on the first gate that fails:
/// direction/amount filter, identifier extraction (description first, then
/// raw content), then a single conditional mark-paid against the store.
/// Every business result comes back as a `ReconcileOutcome` value; `Err` is
/// reserved for store failures.
pub struct Reconciler {
    extractor: Extractor,
}

impl Reconciler {
    pub fn new(extractor: Extractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub async fn reconcile(
        &self,
        store: &dyn OrderStore,
        notification: &TransferNotification,
    ) -> Result<ReconcileOutcome, ServiceError> {
        // Outbound transfers and reversals are frequent and expected; they
        // are a no-op, not a failure. A supplied non-positive amount gets
        // the same treatment.
        if notification.direction != TransferDirection::In
            || notification.amount.is_some_and(|a| a <= 0)
        {
            tracing::info!(
                direction = notification.direction.as_str(),
                amount = notification.amount,
                "skipping non-inbound transfer"
            );
            return Ok(ReconcileOutcome::accepted(ReconcileReason::NotInbound, None));
        }

        let order_id = notification
            .description
            .as_deref()
            .and_then(|text| self.extractor.extract(text))
            .or_else(|| {
                notification
                    .content
                    .as_deref()
                    .and_then(|text| self.extractor.extract(text))
            });

        let Some(order_id) = order_id else {
            tracing::warn!("no order identifier in description or content");
            return Ok(ReconcileOutcome::rejected(ReconcileReason::NoIdentifier, None));
        };

        // The write carries its own `payment_state <> 'paid'` predicate, so
        // the happy path is one round trip and concurrent redelivery cannot
        // double-apply.
        if store.mark_paid(&order_id).await? {
            tracing::info!(order_id = %order_id, "order marked paid");
            return Ok(ReconcileOutcome::accepted(
                ReconcileReason::MarkedPaid,
                Some(order_id),
            ));
        }

        // Zero rows affected: the order is missing, or it was already paid
        // (a redelivered webhook), or something stranger. One read tells
        // them apart.
        match store.find_order(&order_id).await? {
            None => {
                tracing::warn!(order_id = %order_id, "order not found");
                Ok(ReconcileOutcome::rejected(
                    ReconcileReason::OrderNotFound,
                    Some(order_id),
                ))
            }
            Some(order) if order.payment_state == PaymentState::Paid => {
                tracing::info!(order_id = %order_id, "order already paid, converging");
                Ok(ReconcileOutcome::accepted(
                    ReconcileReason::AlreadyPaid,
                    Some(order_id),
                ))
            }
            Some(order) => {
                tracing::warn!(
                    order_id = %order_id,
                    payment_state = %order.payment_state,
                    "conditional update affected no rows on an unpaid order"
                );
                Ok(ReconcileOutcome::rejected(
                    ReconcileReason::UpdateNotApplied,
                    Some(order_id),
                ))
            }
        }
    }
}

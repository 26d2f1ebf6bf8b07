use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::notification::{TransferDirection, TransferNotification},
        domain::outcome::{ReconcileOutcome, ReconcileReason},
    },
    axum::{Json, extract::State},
    serde::Deserialize,
};

/// SePay webhook payload, as delivered. Everything except `transferType` is
/// optional in practice; the adapter validates here so the core only ever
/// sees a typed `TransferNotification`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SepayWebhook {
    pub transfer_type: String,
    pub transfer_amount: Option<i64>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub gateway: Option<String>,
    pub transaction_date: Option<String>,
    pub reference_code: Option<String>,
    pub account_number: Option<String>,
    pub sub_account: Option<String>,
    pub code: Option<String>,
}

#[tracing::instrument(
    name = "sepay_webhook",
    skip_all,
    fields(gateway = tracing::field::Empty, transfer_type = %payload.transfer_type)
)]
pub async fn sepay_webhook_handler(
    State(state): State<AppState>,
    Json(payload): Json<SepayWebhook>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Some(gateway) = &payload.gateway {
        tracing::Span::current().record("gateway", tracing::field::display(gateway));
    }

    // Unknown transfer types get the same treatment as outbound ones:
    // acknowledged and ignored, so the gateway does not keep redelivering.
    let direction = match TransferDirection::try_from(payload.transfer_type.as_str()) {
        Ok(direction) => direction,
        Err(_) => {
            tracing::info!(transfer_type = %payload.transfer_type, "ignoring unknown transfer type");
            return Ok(Json(outcome_body(
                &ReconcileOutcome::accepted(ReconcileReason::NotInbound, None),
                &payload,
            )));
        }
    };

    let notification = TransferNotification {
        direction,
        amount: payload.transfer_amount,
        description: payload.description.clone(),
        content: payload.content.clone(),
        gateway: payload.gateway.clone(),
        transaction_date: payload.transaction_date.clone(),
        reference_code: payload.reference_code.clone(),
    };

    let outcome = state
        .reconciler
        .reconcile(state.store.as_ref(), &notification)
        .await?;

    tracing::info!(
        accepted = outcome.accepted,
        reason = outcome.reason.as_str(),
        "webhook processed"
    );
    Ok(Json(outcome_body(&outcome, &payload)))
}

fn outcome_body(outcome: &ReconcileOutcome, payload: &SepayWebhook) -> serde_json::Value {
    let mut body = serde_json::json!({
        "success": outcome.accepted,
        "message": outcome.reason.message(),
        "reason": outcome.reason.as_str(),
    });

    if matches!(
        outcome.reason,
        ReconcileReason::MarkedPaid | ReconcileReason::AlreadyPaid
    ) {
        body["data"] = serde_json::json!({
            "order_id": &outcome.order_id,
            "payment_status": "paid",
            "amount": payload.transfer_amount,
            "gateway": &payload.gateway,
            "transaction_date": &payload.transaction_date,
        });
    }

    body
}

#![allow(dead_code)]

use {
    sepay_recon::{
        AppState,
        domain::notification::{TransferDirection, TransferNotification},
        domain::order::OrderId,
        extract::Extractor,
        infra::memory::InMemoryOrderStore,
        services::reconcile::Reconciler,
    },
    std::sync::Arc,
};

/// Real reconciliation string from an ACB transfer, identifier embedded in
/// the MBVCB envelope.
pub const ACB_TEXT: &str = "MBVCB.9737451341.677798.47b79bbde90d46f7af6724c12a575d56.CT tu \
     1020608460 DANG HA NHU THIEN toi 20499761 DANG HA NHU THIEN tai ACB GD 677798-060425 22:32:01";

pub const ORDER_ID: &str = "47b79bbde90d46f7af6724c12a575d56";

pub fn order_id(s: &str) -> OrderId {
    OrderId::new(s).expect("valid order id")
}

pub fn notification(
    direction: TransferDirection,
    amount: Option<i64>,
    description: Option<&str>,
    content: Option<&str>,
) -> TransferNotification {
    TransferNotification {
        direction,
        amount,
        description: description.map(str::to_string),
        content: content.map(str::to_string),
        gateway: Some("ACB".to_string()),
        transaction_date: Some("2025-06-04 22:32:01".to_string()),
        reference_code: None,
    }
}

pub fn inbound(description: Option<&str>, content: Option<&str>) -> TransferNotification {
    notification(TransferDirection::In, Some(677_798), description, content)
}

/// App state wired to an in-memory store; returns the store handle so tests
/// can seed orders and inspect call counters.
pub fn test_state() -> (AppState, InMemoryOrderStore) {
    let store = InMemoryOrderStore::new();
    let state = AppState {
        store: Arc::new(store.clone()),
        reconciler: Arc::new(Reconciler::new(Extractor::default())),
    };
    (state, store)
}

pub mod adapters;
pub mod config;
pub mod domain;
pub mod extract;
pub mod infra;
pub mod services;

use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    },
    domain::store::OrderStore,
    services::reconcile::Reconciler,
    std::{sync::Arc, time::Duration},
    tower_http::timeout::TimeoutLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
    pub reconciler: Arc<Reconciler>,
}

pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(|| async { "SePay reconciliation service" }))
        .route("/sepay-webhook", post(adapters::webhook::sepay_webhook_handler))
        .route("/api/orders/{order_id}", get(adapters::orders::get_order_handler))
        .route("/api/extract", post(adapters::orders::test_extract_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .with_state(state)
}

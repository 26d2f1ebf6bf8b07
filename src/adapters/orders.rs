use {
    crate::{AppState, adapters::api_errors::ApiError, domain::order::OrderId},
    axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    },
    serde::Deserialize,
};

/// Order lookup passthrough. The reconciler never reads these fields; this
/// exists so operators can check what a notification did to an order.
pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Response, ApiError> {
    let order_id = OrderId::new(order_id)?;

    match state.store.find_order(&order_id).await? {
        Some(order) => Ok(Json(order).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "order not found"})),
        )
            .into_response()),
    }
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub content: String,
}

/// Extraction dry-run, handy when debugging what a bank message resolves to.
pub async fn test_extract_handler(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<serde_json::Value> {
    let order_id = state.reconciler.extractor().extract(&request.content);
    let found = order_id.is_some();

    Json(serde_json::json!({
        "content": request.content,
        "order_id": order_id,
        "found": found,
    }))
}

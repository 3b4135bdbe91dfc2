use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::{error, warn};

use crate::error::AppError;

use super::domain::{PointsView, ProcessedReceiptView, Receipt, ReceiptId};
use super::repository::PointsRepository;
use super::service::ReceiptService;

/// Router builder exposing the receipt processing and points lookup endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: PointsRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .fallback(not_found_handler)
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<axum::Json<Receipt>, JsonRejection>,
) -> Result<axum::Json<ProcessedReceiptView>, AppError>
where
    R: PointsRepository + 'static,
{
    let axum::Json(receipt) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected receipt payload");
        AppError::from(rejection)
    })?;

    let record = service.process(receipt).map_err(|err| {
        error!(error = %err, "failed to store receipt points");
        AppError::from(err)
    })?;

    Ok(axum::Json(record.processed_view()))
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Result<axum::Json<PointsView>, AppError>
where
    R: PointsRepository + 'static,
{
    let id = ReceiptId(receipt_id);
    let points = service.points(&id).map_err(|err| {
        if !err.is_not_found() {
            error!(error = %err, receipt_id = %id, "failed to read receipt points");
        }
        AppError::from(err)
    })?;

    Ok(axum::Json(PointsView { points }))
}

pub(crate) async fn not_found_handler() -> Response {
    let payload = json!({
        "error": "not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

// Receipt handlers - decode, call domain logic, map the result to HTTP

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::error::{ApiError, ApiResult, RECEIPT_NOT_FOUND_MESSAGE};
use crate::domain;
use crate::models::{PointsResponse, ProcessReceiptResponse, Receipt};
use crate::store::{ReceiptId, ReceiptStore};

/// Validate and score a submitted receipt, returning the id its points are stored under
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that every decode failure, including a missing content type, is a plain 400.
#[tracing::instrument(skip(store, body), fields(body_len = body.len()))]
pub async fn process_receipt_handler(
    State(store): State<Arc<ReceiptStore>>,
    body: Bytes,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Failed to decode receipt");
        ApiError::from(e)
    })?;

    if let Err(e) = domain::validate(&receipt) {
        warn!(error = %e, retailer = %receipt.retailer, "Receipt failed validation");
        return Err(e.into());
    }

    let breakdown = domain::score_breakdown(&receipt);
    debug!(?breakdown, "Scored receipt");

    let points = breakdown.total();
    let id = store.insert(points).await;

    info!(receipt_id = %id, points, "Processed receipt");

    Ok(Json(ProcessReceiptResponse { id }))
}

/// Look up the points previously awarded to a receipt
#[tracing::instrument(skip(store), fields(receipt_id = %id))]
pub async fn get_points_handler(
    Path(id): Path<String>,
    State(store): State<Arc<ReceiptStore>>,
) -> ApiResult<Json<PointsResponse>> {
    // Anything that is not a well-formed id was never issued
    let points = match id.parse::<ReceiptId>() {
        Ok(id) => store.lookup(&id).await,
        Err(_) => None,
    };

    match points {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            info!("No receipt found");
            Err(ApiError::NotFound(RECEIPT_NOT_FOUND_MESSAGE.to_string()))
        }
    }
}

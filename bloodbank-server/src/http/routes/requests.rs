//! Blood request endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::http::error::ApiError;
use crate::http::extractors::LenientJson;
use crate::models::{BloodRequest, InsertAck, NewBloodRequestPayload};
use crate::state::AppState;

/// POST /api/requests - raise a blood request, stamped with the current time
async fn create_request(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<NewBloodRequestPayload>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let store = state.store();
    store.ready().await?;

    let request = payload.validate(Utc::now())?;
    let ack = store.insert_request(request).await?;
    tracing::info!(id = %ack.inserted_id, "blood request created");

    Ok((StatusCode::CREATED, Json(ack)))
}

/// GET /api/requests - all requests, newest first
async fn list_requests(State(state): State<AppState>) -> Result<Json<Vec<BloodRequest>>, ApiError> {
    let requests = state.store().list_requests().await?;
    Ok(Json(requests))
}

/// Blood request routes
pub fn router() -> Router<AppState> {
    Router::new().route("/requests", get(list_requests).post(create_request))
}

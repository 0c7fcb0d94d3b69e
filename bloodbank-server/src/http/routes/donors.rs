//! Donor endpoints

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::LenientJson;
use crate::models::{Donor, DonorFilter, InsertAck, NewDonorPayload};
use crate::state::AppState;

/// POST /api/donors - register a donor
async fn create_donor(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<NewDonorPayload>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let store = state.store();
    store.ready().await?;

    let donor = payload.validate()?;
    let ack = store.insert_donor(donor).await?;
    tracing::info!(id = %ack.inserted_id, "donor registered");

    Ok((StatusCode::CREATED, Json(ack)))
}

/// GET /api/donors - list donors, optionally filtered by bloodType and district
async fn list_donors(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Donor>>, ApiError> {
    let store = state.store();
    let filter = match query {
        Ok(Query(pairs)) => DonorFilter::from_query_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable query string");
            None
        }
    };

    // A repeated or unreadable filter matches no donor. It must never widen
    // the result to the whole registry.
    let Some(filter) = filter else {
        store.ready().await?;
        tracing::debug!("donor filter cannot match, listing nothing");
        return Ok(Json(Vec::new()));
    };

    let donors = store.list_donors(&filter).await?;
    tracing::debug!(count = donors.len(), filtered = !filter.is_empty(), "listed donors");

    Ok(Json(donors))
}

/// Donor routes
pub fn router() -> Router<AppState> {
    Router::new().route("/donors", get(list_donors).post(create_donor))
}

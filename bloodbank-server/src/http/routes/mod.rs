//! Route handlers organized by resource

pub mod donors;
pub mod health;
pub mod requests;

use axum::Router;

use crate::state::AppState;

/// Routes mounted under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(donors::router())
        .merge(requests::router())
}

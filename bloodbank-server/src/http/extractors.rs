//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON body that never rejects.
///
/// A body that is missing, malformed, or sent without a JSON content type
/// is read as `T::default()`, i.e. a payload with no fields. The handler's
/// presence validation then answers with the usual 400, and a store outage
/// still takes precedence over bad input.
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable request body, treating as empty");
                Ok(Self(T::default()))
            }
        }
    }
}

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ServiceError;

pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

/// JSON extractor that rejects with the service error envelope instead of
/// axum's plain-text rejection.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: serde::de::DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::warn!("Failed to parse JSON request body: {}", rejection);
                Err(ServiceError::invalid_request(BODY_NOT_OBJECT).into_response())
            }
        }
    }
}

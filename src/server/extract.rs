//! Request extractors that turn axum rejections into `DaybookError`, so malformed input is
//! answered with the standard error body before any store access.

use crate::error::DaybookError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// JSON body validated against a resource schema.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Serialize,
{
    type Rejection = DaybookError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_owned();
        let Json(body) = Json::<T>::from_request(req, state).await?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let pretty = serde_json::to_string_pretty(&body)
                .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>"));
            debug!(path = %path, body = %pretty, "validated request body");
        }

        Ok(Self(body))
    }
}

/// The `{id}` path segment of by-id routes.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = DaybookError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

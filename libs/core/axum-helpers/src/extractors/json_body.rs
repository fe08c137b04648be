//! JSON body extractor with standardized rejections.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Lenient replacement for [`axum::Json`] as an extractor.
///
/// A body is only parsed when the request declares a JSON content type
/// (`application/json` or `*/*+json`) and carries something other than
/// whitespace. Anything else reads as the empty object `{}`, so handlers
/// decide what a missing body means instead of the extractor answering 415.
///
/// Declared JSON that fails to parse renders as an
/// [`ErrorResponse`](crate::errors::ErrorResponse) with the rejection's
/// status (400 for bad syntax, 422 for a body that does not fit `T`).
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
///
/// async fn echo(JsonBody(payload): JsonBody<serde_json::Value>) -> String {
///     payload.to_string()
/// }
///
/// let app = Router::new().route("/echo", post(echo));
/// ```
pub struct JsonBody<T>(pub T);

const EMPTY_OBJECT: &[u8] = b"{}";

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        let payload: &[u8] = if declared_json && !bytes.trim_ascii().is_empty() {
            &bytes
        } else {
            EMPTY_OBJECT
        };

        let Json(data) =
            Json::<T>::from_bytes(payload).map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonBody(data))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || essence.ends_with("+json")
}

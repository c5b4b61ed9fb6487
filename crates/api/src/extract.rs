//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use crate::error::AppError;

/// A JSON object body, parsed leniently.
///
/// A missing body, malformed JSON, or JSON that is not an object all yield
/// an empty map; field-level normalization decides what that means. Only a
/// body that cannot be read at all is rejected.
#[derive(Debug, Default)]
pub struct LenientJson(pub Map<String, Value>);

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(Self(parse_object(&bytes)))
    }
}

fn parse_object(bytes: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

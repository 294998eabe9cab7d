//! Generic JSON decode/encode helpers shared by every handler

use crate::error::ApiError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{
    de::{DeserializeOwned, Error as _},
    Serialize,
};

/// Decode the first JSON value of a request body into `T`
///
/// Bytes after that value are ignored and a top-level `null` yields `T::default()`. The
/// `Content-Type` header is not consulted. The body buffer stays owned by the caller and
/// is released when it goes out of scope, whatever the outcome here.
pub fn decode_json<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<T>>()
        .next()
    {
        Some(value) => value
            .map(Option::unwrap_or_default)
            .map_err(ApiError::Decode),
        None => Err(ApiError::Decode(serde_json::Error::custom(
            "EOF while parsing a value",
        ))),
    }
}

/// Serialize `value` into a JSON response with the given status
///
/// Serialization happens before the response is built, so a failure never leaves a
/// half-written success response behind.
pub fn encode_json<T: Serialize + ?Sized>(
    status: StatusCode,
    value: &T,
) -> Result<Response, ApiError> {
    let mut body = serde_json::to_vec(value).map_err(ApiError::Encode)?;
    body.push(b'\n');

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

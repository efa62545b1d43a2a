//! HTTP utilities - Common helper functions
//!
//! Dependency injection filters, the bounded JSON object body filter, path
//! identifier decoding and client IP extraction shared by the route modules.

use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;

use bytes::Buf;
use futures::{Stream, StreamExt};
use percent_encoding::percent_decode_str;
use serde_json::Value;
use warp::{Filter, Rejection};

use crate::application::use_cases::{
    ExecuteOperationUseCase, GetMetricsUseCase, HealthCheckUseCase, ReadViewUseCase,
};
use crate::domain::validation::FieldMap;
use crate::shared::error::{AppError, AppResult};

/// Parse a request body into a JSON object. An empty body or a JSON `null`
/// is an empty object.
pub fn parse_object_body(body: &[u8], limit: u64) -> AppResult<FieldMap> {
    if body.len() as u64 > limit {
        return Err(AppError::PayloadTooLarge(limit));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FieldMap::new());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(FieldMap::new()),
        _ => Err(AppError::BadRequest("Request body must be a JSON object".to_string())),
    }
}

/// Collect a body stream, failing as soon as more than `limit` bytes arrive
pub async fn read_bounded<S, B, E>(body: S, limit: u64) -> AppResult<Vec<u8>>
where
    S: Stream<Item = Result<B, E>>,
    B: Buf,
    E: Display,
{
    let mut body = std::pin::pin!(body);
    let mut buffer = Vec::new();

    while let Some(chunk) = body.next().await {
        let mut chunk = chunk
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

        let len = chunk.remaining();
        if (buffer.len() + len) as u64 > limit {
            return Err(AppError::PayloadTooLarge(limit));
        }
        buffer.extend_from_slice(&chunk.copy_to_bytes(len));
    }

    Ok(buffer)
}

/// Extract the request body as a JSON object, bounded by `limit` bytes.
/// A declared `Content-Length` over the limit is refused before reading;
/// bodies without one (chunked or absent) are cut off once they pass it.
pub fn json_object_body(limit: u64) -> impl Filter<Extract = (FieldMap,), Error = Rejection> + Clone {
    warp::header::optional::<u64>("content-length")
        .and_then(move |length: Option<u64>| async move {
            match length {
                Some(n) if n > limit => Err(warp::reject::custom(AppError::PayloadTooLarge(limit))),
                _ => Ok(()),
            }
        })
        .untuple_one()
        .and(warp::body::stream())
        .and(warp::any().map(move || limit))
        .and_then(read_object_body)
}

async fn read_object_body<S, B>(body: S, limit: u64) -> Result<FieldMap, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    let bytes = read_bounded(body, limit).await.map_err(warp::reject::custom)?;
    parse_object_body(&bytes, limit).map_err(warp::reject::custom)
}

/// Percent-decode one URL path segment
pub fn decode_path_segment(raw: &str) -> AppResult<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| AppError::BadRequest("URL path segment is not valid UTF-8".to_string()))
}

/// Decoded identifier taken from the next path segment
pub fn path_id() -> impl Filter<Extract = (String,), Error = Rejection> + Clone {
    warp::path::param::<String>().and_then(|raw: String| async move {
        decode_path_segment(&raw).map_err(warp::reject::custom)
    })
}

/// Client address as reported by the reverse proxy, first hop only
pub fn client_ip() -> impl Filter<Extract = (String,), Error = Rejection> + Clone {
    warp::header::optional::<String>("x-forwarded-for").map(|forwarded: Option<String>| {
        forwarded
            .as_deref()
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .unwrap_or("unknown")
            .to_string()
    })
}

/// Helper function to inject the write operation use case into route
pub fn with_operation_use_case(
    use_case: Arc<ExecuteOperationUseCase>,
) -> impl Filter<Extract = (Arc<ExecuteOperationUseCase>,), Error = Infallible> + Clone {
    warp::any().map(move || use_case.clone())
}

/// Helper function to inject view use case into route
pub fn with_view_use_case(
    use_case: Arc<ReadViewUseCase>,
) -> impl Filter<Extract = (Arc<ReadViewUseCase>,), Error = Infallible> + Clone {
    warp::any().map(move || use_case.clone())
}

/// Helper function to inject health use case into route
pub fn with_health_use_case(
    health_use_case: Arc<HealthCheckUseCase>,
) -> impl Filter<Extract = (Arc<HealthCheckUseCase>,), Error = Infallible> + Clone {
    warp::any().map(move || health_use_case.clone())
}

/// Helper function to inject metrics use case into route
pub fn with_metrics_use_case(
    metrics_use_case: Arc<GetMetricsUseCase>,
) -> impl Filter<Extract = (Arc<GetMetricsUseCase>,), Error = Infallible> + Clone {
    warp::any().map(move || metrics_use_case.clone())
}

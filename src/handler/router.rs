//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: body size checks, body collection,
//! and dispatch through the service's route table.

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::routing;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }

    let response = route_request(req, &state).await;

    if access_log {
        logger::log_response(response.status());
    }
    Ok(response)
}

async fn route_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let max_body_size = state.config.http.max_body_size;

    // 1. Reject oversized bodies up front
    if let Some(resp) = check_body_size(&req, max_body_size) {
        return resp;
    }

    // 2. Collect the body, bounded by the same limit
    let (parts, body) = req.into_parts();
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    let body = match Limited::new(body, limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            logger::log_error(&format!("Request body exceeded {max_body_size} bytes"));
            return http::build_413_response();
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            return http::build_error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    // 3. Match against the decoded path, never the raw bytes
    let path = match routing::decode_path(parts.uri.path()) {
        Ok(path) => path,
        Err(e) => {
            logger::log_warning(&e.to_string());
            return http::build_error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    // 4. Dispatch, an empty body counts as absent
    let body = (!body.is_empty()).then_some(body);
    state.routes.dispatch(&parts.method, &path, body.as_ref())
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

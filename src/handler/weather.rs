//! Weather backend routes

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::domain::{GeneralOutlook, Weather};
use crate::http;
use crate::routing::RouteContext;

const MISSING_BODY: &str = "Please send a request body";

/// Greeting returned by `GET /{name}`
pub fn greeting(name: &str) -> String {
    format!(
        "Hello {name}! This is a RESTful HttpService written in Go. \
         Try to use some other HTTP verbs (don´t say 'methods' :P )\n"
    )
}

/// `GET /{name}`
pub fn get_the_sense_in_that(ctx: &RouteContext<'_>) -> Response<Full<Bytes>> {
    let name = ctx.param("name").unwrap_or_default();
    tracing::info!(path = ctx.path, name, "Request for /{{name}} with {}", ctx.method);
    http::build_text_response(StatusCode::OK, greeting(name))
}

/// `POST /weather/general/outlook`
pub fn general_outlook(ctx: &RouteContext<'_>) -> Response<Full<Bytes>> {
    let body = match ctx.body {
        Some(body) if !body.is_empty() => body,
        _ => return http::build_error_response(StatusCode::BAD_REQUEST, MISSING_BODY),
    };

    let weather: Weather = match serde_json::from_slice(body) {
        Ok(w) => w,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected weather payload");
            return http::build_error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    tracing::info!(
        path = ctx.path,
        postal_code = %weather.postal_code,
        flag_color = %weather.flag_color,
        product = weather.product.map(|p| p.name()),
        "Request for {} with {}",
        ctx.path,
        ctx.method
    );
    let outlook = GeneralOutlook::generate();
    tracing::debug!(?outlook, "General outlook generated");

    http::build_result_response(StatusCode::CREATED, "CREATED")
}

//! Account routes

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http;
use crate::routing::RouteContext;

/// `GET /accounts/{accountId}`: the account id is not looked at
pub fn get_account(ctx: &RouteContext<'_>) -> Response<Full<Bytes>> {
    tracing::info!(path = ctx.path, "Request received with Method: {}", ctx.method);
    http::build_result_response(StatusCode::OK, "OK")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::Method;

    #[tokio::test]
    async fn test_get_account_ignores_id() {
        for id in ["123", "not-a-number"] {
            let method = Method::GET;
            let path = format!("/accounts/{id}");
            let ctx = RouteContext {
                method: &method,
                path: &path,
                param: Some(("accountId", id)),
                body: None,
            };

            let resp = get_account(&ctx);
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(resp.headers()["content-type"], "application/json; charset=UTF-8");
            let body = resp.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(body, r#"{"result":"OK"}"#);
        }
    }
}

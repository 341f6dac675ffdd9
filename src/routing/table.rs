//! Route table module
//!
//! Holds the ordered `(name, method, pattern, handler)` entries of a service
//! and dispatches requests to the first entry that matches.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

use super::matcher::PathPattern;
use crate::error::Result;
use crate::http;

/// Everything a handler may look at
#[derive(Debug)]
pub struct RouteContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub param: Option<(&'a str, &'a str)>,
    pub body: Option<&'a Bytes>,
}

impl RouteContext<'_> {
    /// Value of the named placeholder, if the matched route captured it
    pub fn param(&self, name: &str) -> Option<&str> {
        self.param.and_then(|(key, value)| (key == name).then_some(value))
    }
}

pub type HandlerFn = fn(&RouteContext<'_>) -> Response<Full<Bytes>>;

/// A single registered route
#[derive(Clone)]
pub struct Route {
    pub name: &'static str,
    pub method: Method,
    pub pattern: PathPattern,
    pub handler: HandlerFn,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl Route {
    pub fn new(
        name: &'static str,
        method: Method,
        pattern: &str,
        handler: HandlerFn,
    ) -> Result<Self> {
        Ok(Self {
            name,
            method,
            pattern: PathPattern::parse(pattern)?,
            handler,
        })
    }
}

/// Ordered collection of routes, first registered wins
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route after the existing ones
    pub fn route(
        mut self,
        name: &'static str,
        method: Method,
        pattern: &str,
        handler: HandlerFn,
    ) -> Result<Self> {
        self.routes.push(Route::new(name, method, pattern, handler)?);
        Ok(self)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route whose method and pattern both match
    pub fn find<'a>(
        &'a self,
        method: &Method,
        path: &'a str,
    ) -> Option<(&'a Route, Option<(&'a str, &'a str)>)> {
        self.routes.iter().find_map(|route| {
            if route.method != *method {
                return None;
            }
            route.pattern.matches(path).map(|m| (route, m.param))
        })
    }

    /// Run the matching handler, or answer 404 when nothing matches
    pub fn dispatch(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Bytes>,
    ) -> Response<Full<Bytes>> {
        let Some((route, param)) = self.find(method, path) else {
            tracing::debug!(%method, path, "no route matched");
            return http::build_404_response();
        };

        tracing::debug!(route = route.name, pattern = route.pattern.as_str(), "route matched");
        let ctx = RouteContext {
            method,
            path,
            param,
            body,
        };
        (route.handler)(&ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn echo_param(ctx: &RouteContext<'_>) -> Response<Full<Bytes>> {
        let value = ctx.param("id").unwrap_or("none").to_string();
        http::build_text_response(hyper::StatusCode::OK, value)
    }

    fn fixed(_ctx: &RouteContext<'_>) -> Response<Full<Bytes>> {
        http::build_text_response(hyper::StatusCode::OK, "fixed".to_string())
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_find_respects_method() {
        let table = RouteTable::new()
            .route("Fixed", Method::POST, "/items/{id}", fixed)
            .unwrap();

        assert!(table.find(&Method::GET, "/items/1").is_none());
        let (route, param) = table.find(&Method::POST, "/items/1").unwrap();
        assert_eq!(route.name, "Fixed");
        assert_eq!(param, Some(("id", "1")));
    }

    #[tokio::test]
    async fn test_first_registered_wins() {
        let table = RouteTable::new()
            .route("Fixed", Method::GET, "/items/special", fixed)
            .unwrap()
            .route("Echo", Method::GET, "/items/{id}", echo_param)
            .unwrap();

        let resp = table.dispatch(&Method::GET, "/items/special", None);
        assert_eq!(body_string(resp).await, "fixed");

        let resp = table.dispatch(&Method::GET, "/items/42", None);
        assert_eq!(body_string(resp).await, "42");
    }

    #[test]
    fn test_no_match_is_404() {
        let table = RouteTable::new()
            .route("Echo", Method::GET, "/items/{id}", echo_param)
            .unwrap();

        let resp = table.dispatch(&Method::GET, "/other", None);
        assert_eq!(resp.status(), 404);

        let resp = table.dispatch(&Method::DELETE, "/items/1", None);
        assert_eq!(resp.status(), 404);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = RouteTable::new().route("Bad", Method::GET, "/{a}/{b}", fixed);
        assert!(result.is_err());
    }

    #[test]
    fn test_param_lookup_by_name() {
        let method = Method::GET;
        let ctx = RouteContext {
            method: &method,
            path: "/accounts/7",
            param: Some(("accountId", "7")),
            body: None,
        };
        assert_eq!(ctx.param("accountId"), Some("7"));
        assert_eq!(ctx.param("name"), None);
    }
}

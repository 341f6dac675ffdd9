//! Routing module
//!
//! Provides method + path-pattern routing:
//! - Patterns with at most one `{name}` placeholder segment
//! - Ordered route tables where the first registered match wins

mod matcher;
mod table;

pub use matcher::{decode_path, PathMatch, PathPattern};
pub use table::{HandlerFn, Route, RouteContext, RouteTable};

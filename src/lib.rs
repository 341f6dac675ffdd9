//! Account and weather demo services
//!
//! Two small HTTP services that share one routing layer: a route table of
//! `(method, pattern, handler)` entries where a pattern may carry a single
//! `{name}` placeholder and the first registered match wins.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
pub mod service;

pub use error::{Error, Result};
pub use service::Service;

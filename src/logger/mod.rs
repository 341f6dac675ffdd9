//! Logger module
//!
//! Thin `tracing` helpers for the service lifecycle and access logging:
//! - Server lifecycle logging
//! - Access logging (request line + status)
//! - Error and warning logging

use std::net::SocketAddr;

use hyper::{Method, StatusCode, Uri, Version};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::service::Service;

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `logging.level`. Should be called once at
/// application startup; later calls are ignored.
pub fn init(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();

    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {e}");
    }
}

pub fn log_service_starting(service: Service) {
    tracing::info!("Starting {service}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!(
        %addr,
        level = %config.logging.level,
        workers = config.server.workers,
        access_log = config.logging.access_log,
        "Starting HTTP service at {}",
        addr.port()
    );
}

pub fn log_listener_failed(addr: &SocketAddr, err: &dyn std::error::Error) {
    tracing::error!(%addr, "An error occurred starting HTTP listener at port {}", addr.port());
    tracing::error!("Error: {err}");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!(%peer_addr, "Connection accepted");
}

pub fn log_connection_error(err: &hyper::Error) {
    tracing::warn!(error = %err, "Failed to serve connection");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    tracing::info!(target: "access", "{method} {uri} {version:?}");
}

pub fn log_response(status: StatusCode) {
    tracing::info!(target: "access", status = status.as_u16(), "Response sent");
}

pub fn log_shutdown(service: Service) {
    tracing::info!("Shutdown requested, {service} stops accepting connections");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

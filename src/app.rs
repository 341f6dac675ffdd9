//! Process bootstrap shared by both binaries

use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::error::Result;
use crate::logger;
use crate::server;
use crate::service::Service;

/// Load configuration, build the runtime and serve `service` until Ctrl-C.
///
/// A listener that cannot be bound is logged and the function returns `Ok`,
/// there is no retry.
pub fn run(service: Service) -> Result<()> {
    let cfg = Config::load(service)?;
    logger::init(&cfg);
    logger::log_service_starting(service);

    // Create Tokio runtime, sized by the workers setting when present
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        tracing::info!(workers, "Using configured worker threads");
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(service, cfg))
}

async fn async_main(service: Service, cfg: Config) -> Result<()> {
    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(AppState::new(service, cfg)?);

    logger::log_server_start(&addr, &state.config);
    let listener = match server::create_listener(addr) {
        Ok(l) => l,
        Err(e) => {
            logger::log_listener_failed(&addr, &e);
            return Ok(());
        }
    };

    server::serve(listener, state, shutdown_signal()).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        logger::log_error(&format!("Failed to listen for shutdown signal: {e}"));
        // Without a signal handler, serve until the process is killed
        std::future::pending::<()>().await;
    }
}

// Application state module
// Immutable per-process state shared by every connection

use super::types::Config;
use crate::error::Result;
use crate::routing::RouteTable;
use crate::service::Service;

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub service: Service,
    pub config: Config,
    pub routes: RouteTable,
}

impl AppState {
    /// Build the state for a service, compiling its route table
    pub fn new(service: Service, config: Config) -> Result<Self> {
        Ok(Self {
            service,
            config,
            routes: service.routes()?,
        })
    }
}

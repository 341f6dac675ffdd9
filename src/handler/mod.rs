//! Request handler module
//!
//! Request dispatch plus the route handlers of both services.

pub mod account;
pub mod router;
pub mod weather;

// Re-export main entry point
pub use router::handle_request;

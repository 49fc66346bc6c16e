//! Core types for the greeting service.
//! The `Greeting` payload and its text form live here.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::greeting::Greeting;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

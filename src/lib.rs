//! Route table and dispatch for the SNP descent plots front end.
//!
//! The router is built once at startup from an explicit base URL and an
//! ordered route list, then answers "which view does this path render?"
//! for the rest of the process.

// Core subsystems
pub mod config;
pub mod routing;
pub mod navigation;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use routing::{build_router, ConfigurationError, RouteEntry, RouteNotFound, Router};
pub use lifecycle::Shutdown;

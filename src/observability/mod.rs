//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / navigation / config
//!     → tracing events with structured fields
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```
//!
//! # Design Decisions
//! - Navigation ID flows through every resolution log line
//! - Log level comes from config; RUST_LOG overrides it

pub mod logging;

pub use logging::init_logging;

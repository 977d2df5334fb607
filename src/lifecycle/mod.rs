//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build router → Spawn navigator
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or end of input → Trigger → Navigator drains and exits
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Router is built before any navigation event is accepted

pub mod shutdown;

pub use shutdown::Shutdown;

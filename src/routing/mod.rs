//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     base URL + RouteEntry[]
//!     → matcher.rs (validate literal patterns)
//!     → Freeze as immutable Router
//!
//! Navigation event (location or path)
//!     → location.rs (strip origin and base, or read fragment)
//!     → router.rs (route lookup)
//!     → matcher.rs (normalize + compare)
//!     → Return: matched RouteEntry or RouteNotFound
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Literal path equality only
//! - Deterministic: same input always matches same route
//! - First match wins (table order)
//! - Views are opaque handles owned by the application shell

pub mod error;
pub mod location;
pub mod matcher;
pub mod router;
pub mod view;

pub use error::{ConfigurationError, RouteNotFound};
pub use location::NavigationMode;
pub use router::{build_router, default_routes, RouteEntry, Router, RouterBuilder};
pub use view::{NamedView, View, ViewHandle, ViewRegistry, SNP_DESCENT_PLOTS};

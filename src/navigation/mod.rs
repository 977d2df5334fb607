//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Shell navigation event (push / replace / back / forward)
//!     → navigator.rs (mpsc, single task)
//!     → history.rs (move cursor)
//!     → Router::resolve (current path)
//!     → watch channel (latest Resolution wins)
//!     → Shell renders matched view or fallback
//! ```

pub mod history;
pub mod navigator;

pub use history::History;
pub use navigator::{
    NavigationEvent, Navigator, NavigatorClosed, NavigatorHandle, Outcome, Resolution,
};

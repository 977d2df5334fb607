//! Routing error types.

use thiserror::Error;

/// Startup-time failure while building the route table.
///
/// Always fatal: the application cannot start without a valid router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("route table is empty")]
    EmptyRoutes,

    #[error("malformed route path {path:?}: {reason}")]
    MalformedPath { path: String, reason: &'static str },

    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),

    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    #[error("route {path:?} references unknown view {view:?}")]
    UnknownView { path: String, view: String },
}

/// Dispatch-time outcome when no registered route matches.
///
/// Recoverable: the shell is expected to render a fallback view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches {path:?}")]
pub struct RouteNotFound {
    pub path: String,
}

impl RouteNotFound {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

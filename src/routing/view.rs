//! Opaque view handles.
//!
//! The router holds views but never constructs them. The application shell
//! creates each view, keeps ownership of its lifecycle, and hands the router
//! a shared handle.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A renderable unit owned by the application shell.
pub trait View: Send + Sync + fmt::Debug {
    /// Stable identifier used in configuration and logs.
    fn name(&self) -> &str;
}

/// Shared handle to a view.
pub type ViewHandle = Arc<dyn View>;

/// A view known only by name. Useful when the shell has nothing more to
/// attach than an identifier (the CLI, tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedView {
    name: String,
}

impl NamedView {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Convenience constructor returning a ready-to-share handle.
    pub fn handle(name: impl Into<String>) -> ViewHandle {
        Arc::new(Self::new(name))
    }
}

impl View for NamedView {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Name of the plots view mounted at the root path.
pub const SNP_DESCENT_PLOTS: &str = "SnpDescentPlots";

/// Views registered by the shell so configured routes can refer to them by name.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<String, ViewHandle>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register(&mut self, view: ViewHandle) -> &mut Self {
        self.views.insert(view.name().to_string(), view);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ViewHandle> {
        self.views.get(name)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

//! Route table construction and dispatch.
//!
//! # Responsibilities
//! - Validate and compile route entries at startup
//! - Look up the matching route for a requested path
//! - Return the matched route or an explicit [`RouteNotFound`]
//!
//! # Design Decisions
//! - Immutable after construction (shareable via `Arc` without locks)
//! - O(n) scan in table order; first match wins
//! - Explicit not-found rather than a silent default view
//! - The base URL is stored exactly as supplied

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::routing::error::{ConfigurationError, RouteNotFound};
use crate::routing::location::{self, NavigationMode};
use crate::routing::matcher::{normalize_path, validate_pattern, ExactPathMatcher, Matcher};
use crate::routing::view::{ViewHandle, ViewRegistry, NamedView, SNP_DESCENT_PLOTS};

/// A mapping from a literal path to a view.
#[derive(Clone)]
pub struct RouteEntry {
    pub path: String,
    pub view: ViewHandle,
    pub name: Option<String>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, view: ViewHandle) -> Self {
        Self {
            path: path.into(),
            view,
            name: None,
        }
    }

    /// Attach a route name for reverse lookup.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("view", &self.view.name())
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug)]
struct CompiledRoute {
    entry: RouteEntry,
    matcher: Box<dyn Matcher>,
}

/// Immutable routing table.
#[derive(Debug)]
pub struct Router {
    mode: NavigationMode,
    base: String,
    routes: Vec<CompiledRoute>,
}

/// Build a history-mode router from a base URL and an ordered route list.
pub fn build_router(
    base_url: impl Into<String>,
    routes: Vec<RouteEntry>,
) -> Result<Router, ConfigurationError> {
    RouterBuilder::new(base_url).routes(routes).build()
}

/// The route table the plots application ships with: `/` → `SnpDescentPlots`.
pub fn default_routes(plots: ViewHandle) -> Vec<RouteEntry> {
    vec![RouteEntry::new("/", plots)]
}

/// Step-by-step router construction with a selectable navigation mode.
#[derive(Debug)]
pub struct RouterBuilder {
    mode: NavigationMode,
    base: String,
    routes: Vec<RouteEntry>,
}

impl RouterBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            mode: NavigationMode::History,
            base: base_url.into(),
            routes: Vec::new(),
        }
    }

    pub fn mode(mut self, mode: NavigationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn route(mut self, entry: RouteEntry) -> Self {
        self.routes.push(entry);
        self
    }

    pub fn routes(mut self, entries: impl IntoIterator<Item = RouteEntry>) -> Self {
        self.routes.extend(entries);
        self
    }

    /// Validate every entry and freeze the table.
    pub fn build(self) -> Result<Router, ConfigurationError> {
        if self.routes.is_empty() {
            return Err(ConfigurationError::EmptyRoutes);
        }

        let mut seen_paths = HashSet::new();
        let mut seen_names = HashSet::new();
        let mut compiled = Vec::with_capacity(self.routes.len());

        for entry in self.routes {
            validate_pattern(&entry.path).map_err(|reason| ConfigurationError::MalformedPath {
                path: entry.path.clone(),
                reason,
            })?;
            if !seen_paths.insert(entry.path.clone()) {
                return Err(ConfigurationError::DuplicatePath(entry.path));
            }
            if let Some(name) = &entry.name {
                if !seen_names.insert(name.clone()) {
                    return Err(ConfigurationError::DuplicateName(name.clone()));
                }
            }

            let matcher: Box<dyn Matcher> = Box::new(ExactPathMatcher::new(entry.path.clone()));
            compiled.push(CompiledRoute { entry, matcher });
        }

        tracing::debug!(
            mode = %self.mode,
            base = %self.base,
            routes = compiled.len(),
            "Route table built"
        );

        Ok(Router {
            mode: self.mode,
            base: self.base,
            routes: compiled,
        })
    }
}

impl Router {
    /// Build the router described by a loaded configuration, resolving view
    /// names through the shell's registry.
    pub fn from_config(config: &AppConfig, views: &ViewRegistry) -> Result<Self, ConfigurationError> {
        let mut entries = Vec::with_capacity(config.routes.len());
        for route in &config.routes {
            let view = views
                .get(&route.view)
                .cloned()
                .ok_or_else(|| ConfigurationError::UnknownView {
                    path: route.path.clone(),
                    view: route.view.clone(),
                })?;
            let mut entry = RouteEntry::new(route.path.clone(), view);
            entry.name = route.name.clone();
            entries.push(entry);
        }

        RouterBuilder::new(config.app.base_url.clone())
            .mode(config.router.mode)
            .routes(entries)
            .build()
    }

    /// The router the plots application ships with, mounted under `base_url`.
    pub fn with_default_routes(base_url: impl Into<String>) -> Result<Self, ConfigurationError> {
        let plots: ViewHandle = Arc::new(NamedView::new(SNP_DESCENT_PLOTS));
        build_router(base_url, default_routes(plots))
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// The base URL exactly as supplied at construction.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Route entries in table order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().map(|r| &r.entry)
    }

    /// Find the first route whose pattern matches the requested path.
    pub fn resolve(&self, path: &str) -> Result<&RouteEntry, RouteNotFound> {
        let normalized = normalize_path(path);
        self.routes
            .iter()
            .find(|r| r.matcher.matches(normalized))
            .map(|r| &r.entry)
            .ok_or_else(|| RouteNotFound::new(path))
    }

    /// Like [`Router::resolve`] but yields the view handle directly.
    pub fn resolve_view(&self, path: &str) -> Result<&ViewHandle, RouteNotFound> {
        self.resolve(path).map(|entry| &entry.view)
    }

    /// Resolve a full location (URL or path) according to the navigation mode.
    pub fn resolve_location(&self, location: &str) -> Result<&RouteEntry, RouteNotFound> {
        let path = self.location_path(location);
        self.resolve(&path)
    }

    /// The route path a location maps to under this router's mode and base.
    pub fn location_path(&self, location: &str) -> String {
        location::location_to_path(self.mode, &self.base, location)
    }

    /// The href a link to `path` should carry.
    pub fn href(&self, path: &str) -> String {
        location::href(self.mode, &self.base, path)
    }

    /// The href for the route registered under `name`.
    pub fn href_for_name(&self, name: &str) -> Result<String, RouteNotFound> {
        self.routes()
            .find(|entry| entry.name.as_deref() == Some(name))
            .map(|entry| self.href(&entry.path))
            .ok_or_else(|| RouteNotFound::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plots() -> ViewHandle {
        NamedView::handle(SNP_DESCENT_PLOTS)
    }

    #[test]
    fn test_build_single_route() {
        let view = plots();
        let router = build_router("/app/", vec![RouteEntry::new("/", view.clone())]).unwrap();

        assert_eq!(router.route_count(), 1);
        assert_eq!(router.mode(), NavigationMode::History);
        assert_eq!(router.base(), "/app/");

        let resolved = router.resolve_view("/").unwrap();
        assert!(Arc::ptr_eq(resolved, &view));
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        let router = build_router("", default_routes(plots())).unwrap();
        let err = router.resolve("/other").unwrap_err();
        assert_eq!(err, RouteNotFound::new("/other"));
        assert!(router.resolve("/SnpDescentPlots").is_err());
    }

    #[test]
    fn test_empty_routes_rejected() {
        let err = build_router("", Vec::new()).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyRoutes);
    }

    #[test]
    fn test_malformed_path_rejected() {
        let err = build_router("", vec![RouteEntry::new("plots", plots())]).unwrap_err();
        assert!(matches!(err, ConfigurationError::MalformedPath { ref path, .. } if path == "plots"));
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = build_router(
            "",
            vec![RouteEntry::new("/", plots()), RouteEntry::new("/", plots())],
        )
        .unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicatePath("/".into()));

        let err = build_router(
            "",
            vec![
                RouteEntry::new("/", plots()).named("home"),
                RouteEntry::new("/about", plots()).named("home"),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateName("home".into()));
    }

    #[test]
    fn test_first_match_in_table_order() {
        let home = NamedView::handle("Home");
        let about = NamedView::handle("About");
        let router = RouterBuilder::new("")
            .route(RouteEntry::new("/", home))
            .route(RouteEntry::new("/about", about))
            .build()
            .unwrap();

        assert_eq!(router.resolve("/about/").unwrap().view.name(), "About");
        assert_eq!(router.resolve("/?q=1").unwrap().view.name(), "Home");
        let order: Vec<_> = router.routes().map(|r| r.path.as_str()).collect();
        assert_eq!(order, vec!["/", "/about"]);
    }

    #[test]
    fn test_resolve_location_strips_base() {
        let router = Router::with_default_routes("/snp").unwrap();
        assert!(router.resolve_location("/snp").is_ok());
        assert!(router.resolve_location("https://example.org/snp/?sample=2").is_ok());
        assert!(router.resolve_location("/snp/other").is_err());
    }

    #[test]
    fn test_hash_mode_router() {
        let router = RouterBuilder::new("/app")
            .mode(NavigationMode::Hash)
            .route(RouteEntry::new("/", plots()).named("plots"))
            .build()
            .unwrap();

        assert!(router.resolve_location("/app/#/").is_ok());
        assert!(router.resolve_location("/app/#/other").is_err());
        assert_eq!(router.href_for_name("plots").unwrap(), "/app/#/");
        assert!(router.href_for_name("missing").is_err());
    }
}

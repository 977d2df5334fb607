//! Shared fixtures for integration tests.

use std::sync::Arc;

use descent_router::routing::{NamedView, RouteEntry, ViewHandle, SNP_DESCENT_PLOTS};

/// A fresh handle to the plots view.
pub fn plots_view() -> ViewHandle {
    NamedView::handle(SNP_DESCENT_PLOTS)
}

/// Entries for a small multi-page table. Each call builds new view handles.
#[allow(dead_code)]
pub fn multi_page_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", plots_view()).named("plots"),
        RouteEntry::new("/about", NamedView::handle("About")).named("about"),
        RouteEntry::new("/samples/summary", NamedView::handle("SampleSummary")),
    ]
}

/// Paths every dispatch-equivalence check runs through.
#[allow(dead_code)]
pub const PROBE_PATHS: &[&str] = &[
    "",
    "/",
    "/?sample=1",
    "/#top",
    "/about",
    "/about/",
    "/About",
    "/other",
    "/samples",
    "/samples/summary",
    "/samples/summary/extra",
    "//",
    "relative",
];

/// Name of the view a path resolves to, if any.
#[allow(dead_code)]
pub fn view_name(router: &descent_router::Router, path: &str) -> Option<String> {
    router.resolve(path).ok().map(|e| e.view.name().to_string())
}

#[allow(dead_code)]
pub fn same_handle(a: &ViewHandle, b: &ViewHandle) -> bool {
    Arc::ptr_eq(a, b)
}

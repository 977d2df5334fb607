//! Route path matching.
//!
//! # Responsibilities
//! - Reject malformed path patterns at build time
//! - Normalize requested paths before lookup
//! - Match a normalized path against a compiled pattern
//!
//! # Design Decisions
//! - Literal equality only: no parameters, wildcards or nesting
//! - Path matching is case-sensitive
//! - Query string and fragment never take part in matching
//! - One trailing slash on a non-root request path is ignored (`//` is not root)

/// Trait for matching requested paths against a route pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the (already normalized) path matches this pattern.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal path exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    /// Compile a matcher for a pattern that already passed [`validate_pattern`].
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn pattern(&self) -> &str {
        &self.path
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        self.path == path
    }
}

/// Check that a route pattern is a well-formed literal path.
///
/// Returns the reason on failure so the caller can build a
/// `ConfigurationError::MalformedPath`.
pub fn validate_pattern(pattern: &str) -> Result<(), &'static str> {
    if pattern.is_empty() {
        return Err("path is empty");
    }
    if !pattern.starts_with('/') {
        return Err("path must start with '/'");
    }
    if pattern.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("path contains whitespace or control characters");
    }
    if pattern.contains(['?', '#']) {
        return Err("path must not contain a query string or fragment");
    }
    if pattern.contains(['*', ':', '{', '}', '(', ')']) {
        return Err("dynamic segments are not supported");
    }
    if pattern.contains("//") {
        return Err("path contains an empty segment");
    }
    if pattern.len() > 1 && pattern.ends_with('/') {
        return Err("path must not end with '/'");
    }
    Ok(())
}

/// Reduce a requested path to the form patterns are compared against.
pub fn normalize_path(requested: &str) -> &str {
    let end = requested.find(['?', '#']).unwrap_or(requested.len());
    let path = &requested[..end];

    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() && trimmed != "/" => trimmed,
        _ => path,
    }
}

//! Location handling for the two navigation strategies.
//!
//! # Responsibilities
//! - Extract the route path from a full location (URL or path)
//! - Apply the base URL prefix in history mode
//! - Build hrefs for route paths
//!
//! # Design Decisions
//! - The configured base is stored verbatim; normalization happens here
//! - Base stripping compares ASCII case-insensitively
//! - The base only strips on a segment boundary (`/app` never eats `/apple`)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Navigation strategy used to map locations onto route paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// The location path itself is the route path (minus the base).
    #[default]
    History,
    /// The route path lives in the fragment after `#`.
    Hash,
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationMode::History => write!(f, "history"),
            NavigationMode::Hash => write!(f, "hash"),
        }
    }
}

/// Normalize a base URL for matching: leading `/`, no trailing `/`.
///
/// An empty base (or `/`) normalizes to the empty string, meaning no prefix.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Drop `scheme://authority` from an absolute URL, keeping path, query and fragment.
fn strip_origin(location: &str) -> &str {
    match location.find("://") {
        Some(idx) => {
            let rest = &location[idx + 3..];
            match rest.find(['/', '?', '#']) {
                Some(start) => &rest[start..],
                None => "",
            }
        }
        None => location,
    }
}

/// Extract the route path (still carrying query and fragment) from a location.
pub fn location_to_path(mode: NavigationMode, base: &str, location: &str) -> String {
    let location = strip_origin(location);

    match mode {
        NavigationMode::Hash => {
            let fragment = location.split_once('#').map(|(_, f)| f).unwrap_or("");
            if fragment.is_empty() {
                "/".to_string()
            } else if fragment.starts_with('/') {
                fragment.to_string()
            } else {
                format!("/{fragment}")
            }
        }
        NavigationMode::History => {
            let base = normalize_base(base);
            let path = strip_base(&base, location);
            if path.is_empty() || path.starts_with(['?', '#']) {
                format!("/{path}")
            } else {
                path.to_string()
            }
        }
    }
}

fn strip_base<'a>(base: &str, location: &'a str) -> &'a str {
    if base.is_empty() {
        return location;
    }
    let Some(head) = location.get(..base.len()) else {
        return location;
    };
    let tail = &location[base.len()..];
    if !head.eq_ignore_ascii_case(base) {
        return location;
    }
    if tail.is_empty() || tail.starts_with(['/', '?', '#']) {
        tail
    } else {
        location
    }
}

/// Build the href a link to `path` should carry.
pub fn href(mode: NavigationMode, base: &str, path: &str) -> String {
    let base = normalize_base(base);
    match mode {
        NavigationMode::History => {
            if base.is_empty() {
                path.to_string()
            } else if path == "/" {
                format!("{base}/")
            } else {
                format!("{base}{path}")
            }
        }
        NavigationMode::Hash => format!("{base}/#{path}"),
    }
}

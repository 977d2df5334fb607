//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route patterns are well-formed literals
//! - Detect conflicting routes (duplicate paths or names)
//! - Validate value ranges (known log level, usable base URL)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - View names are checked later against the shell's registry

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::matcher::validate_pattern;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one route is required")]
    NoRoutes,

    #[error("routes[{index}]: malformed path {path:?}: {reason}")]
    MalformedPath {
        index: usize,
        path: String,
        reason: &'static str,
    },

    #[error("routes[{index}]: duplicate path {path:?}")]
    DuplicatePath { index: usize, path: String },

    #[error("routes[{index}]: duplicate name {name:?}")]
    DuplicateName { index: usize, name: String },

    #[error("routes[{index}]: view name is empty")]
    EmptyView { index: usize },

    #[error("app.base_url {0:?} must not contain whitespace, a query string or a fragment")]
    InvalidBaseUrl(String),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let base = &config.app.base_url;
    if base.chars().any(char::is_whitespace) || base.contains(['?', '#']) {
        errors.push(ValidationError::InvalidBaseUrl(base.clone()));
    }

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut paths = HashSet::new();
    let mut names = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if let Err(reason) = validate_pattern(&route.path) {
            errors.push(ValidationError::MalformedPath {
                index,
                path: route.path.clone(),
                reason,
            });
        } else if !paths.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath {
                index,
                path: route.path.clone(),
            });
        }

        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView { index });
        }

        if let Some(name) = &route.name {
            if !names.insert(name.as_str()) {
                errors.push(ValidationError::DuplicateName {
                    index,
                    name: name.clone(),
                });
            }
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

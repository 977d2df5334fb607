//! Configuration schema definitions.
//!
//! This module defines the configuration handed to the router at startup.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{NavigationMode, SNP_DESCENT_PLOTS};

/// Root configuration for the application shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial application state consumed by the router.
    pub app: AppStateConfig,

    /// Router settings.
    pub router: RouterSettings,

    /// Route definitions mapping paths to views.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppStateConfig::default(),
            router: RouterSettings::default(),
            routes: vec![RouteConfig {
                path: "/".to_string(),
                view: SNP_DESCENT_PLOTS.to_string(),
                name: None,
            }],
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Application state the router reads once at startup.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppStateConfig {
    /// URL prefix applied to all route matching. Empty means no prefix.
    pub base_url: String,
}

/// Router settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterSettings {
    /// Navigation strategy ("history" or "hash").
    pub mode: NavigationMode,
}

/// Route configuration mapping a path to a registered view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path to match (e.g., "/").
    pub path: String,

    /// Name of the view registered by the application shell.
    pub view: String,

    /// Optional route name for reverse lookup.
    #[serde(default)]
    pub name: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app.base_url, "");
        assert_eq!(config.router.mode, NavigationMode::History);
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].path, "/");
        assert_eq!(config.routes[0].view, SNP_DESCENT_PLOTS);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_minimal_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            base_url = "/snp/"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.base_url, "/snp/");
        // Omitted route list falls back to the shipped table
        assert_eq!(config.routes.len(), 1);
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            base_url = ""

            [router]
            mode = "hash"

            [[routes]]
            path = "/"
            view = "SnpDescentPlots"
            name = "plots"

            [[routes]]
            path = "/about"
            view = "About"

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.router.mode, NavigationMode::Hash);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].name.as_deref(), Some("plots"));
        assert_eq!(config.routes[1].name, None);
        assert_eq!(config.observability.log_level, "debug");
    }
}

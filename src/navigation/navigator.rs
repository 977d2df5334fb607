//! Event-driven navigation task.
//!
//! # Responsibilities
//! - Receive navigation events from the application shell
//! - Maintain the session history
//! - Resolve the current path against the immutable router
//! - Publish the latest resolution to observers
//!
//! # Design Decisions
//! - One task owns the history; events are applied in arrival order
//! - `watch` channel: observers only ever see the most recent resolution
//! - A no-op event (back at start, forward at end) publishes nothing
//! - Each resolution carries a fresh navigation ID for log correlation
//! - Stops on shutdown (even one triggered before spawn) or when every handle
//!   is dropped; dropping the `Shutdown` coordinator alone does not stop it

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::lifecycle::Shutdown;
use crate::navigation::history::History;
use crate::routing::Router;

const EVENT_BUFFER: usize = 64;

/// A navigation request from the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Push(String),
    Replace(String),
    Back,
    Forward,
}

impl NavigationEvent {
    /// Parse one command line: `push /x`, `replace /y`, `back` or `forward`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?;
        let arg = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (command.to_ascii_lowercase().as_str(), arg) {
            ("push", Some(path)) => Some(Self::Push(path.to_string())),
            ("replace", Some(path)) => Some(Self::Replace(path.to_string())),
            ("back", None) => Some(Self::Back),
            ("forward", None) => Some(Self::Forward),
            _ => None,
        }
    }
}

/// Result of dispatching one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Matched { route: String, view: String },
    NotFound,
}

/// The most recent dispatch published by the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub id: Uuid,
    pub path: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Resolution {
    /// Dispatch `path` against `router`.
    pub fn resolve(router: &Router, path: &str) -> Self {
        let outcome = match router.resolve(path) {
            Ok(entry) => Outcome::Matched {
                route: entry.path.clone(),
                view: entry.view.name().to_string(),
            },
            Err(_) => Outcome::NotFound,
        };
        Self {
            id: Uuid::new_v4(),
            path: path.to_string(),
            outcome,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self.outcome, Outcome::Matched { .. })
    }
}

/// The navigator task has stopped and no longer accepts events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("navigator has stopped")]
pub struct NavigatorClosed;

/// Owns history and applies navigation events.
pub struct Navigator {
    router: Arc<Router>,
    history: History,
    state_tx: watch::Sender<Resolution>,
}

impl Navigator {
    /// Start the navigator at `initial_location` and return a handle to it.
    pub fn spawn(router: Arc<Router>, initial_location: &str, shutdown: &Shutdown) -> NavigatorHandle {
        let initial_path = router.location_path(initial_location);
        let initial = Resolution::resolve(&router, &initial_path);
        log_resolution(&initial);

        let (state_tx, state_rx) = watch::channel(initial);
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);

        let navigator = Navigator {
            router,
            history: History::new(initial_path),
            state_tx,
        };
        // Subscribe before reading the flag so a concurrent trigger is seen one way or the other.
        let shutdown_rx = shutdown.subscribe();
        let already_stopped = shutdown.is_triggered();
        let task = tokio::spawn(navigator.run(event_rx, shutdown_rx, already_stopped));

        NavigatorHandle {
            events: event_tx,
            state: state_rx,
            task,
        }
    }

    async fn run(
        mut self,
        mut events: mpsc::Receiver<NavigationEvent>,
        mut shutdown: broadcast::Receiver<()>,
        already_stopped: bool,
    ) {
        if already_stopped {
            tracing::debug!("Shutdown already triggered, navigator not started");
            return;
        }

        tracing::debug!("Navigator started");
        let mut shutdown_open = true;
        loop {
            tokio::select! {
                res = shutdown.recv(), if shutdown_open => match res {
                    Ok(()) | Err(RecvError::Lagged(_)) => {
                        tracing::debug!("Navigator stopping on shutdown");
                        break;
                    }
                    Err(RecvError::Closed) => {
                        // Coordinator dropped without triggering; run until handles go away.
                        tracing::debug!("Shutdown coordinator dropped");
                        shutdown_open = false;
                    }
                },
                event = events.recv() => match event {
                    Some(event) => self.apply(event),
                    None => {
                        tracing::debug!("All navigator handles dropped");
                        break;
                    }
                },
            }
        }
    }

    fn apply(&mut self, event: NavigationEvent) {
        let moved = match &event {
            NavigationEvent::Push(path) => {
                self.history.push(path.clone());
                true
            }
            NavigationEvent::Replace(path) => {
                self.history.replace(path.clone());
                true
            }
            NavigationEvent::Back => self.history.back().is_some(),
            NavigationEvent::Forward => self.history.forward().is_some(),
        };

        if !moved {
            tracing::debug!(event = ?event, position = self.history.position(), "Navigation ignored at history boundary");
            return;
        }

        let resolution = Resolution::resolve(&self.router, self.history.current());
        log_resolution(&resolution);
        self.state_tx.send_replace(resolution);
    }
}

fn log_resolution(resolution: &Resolution) {
    match &resolution.outcome {
        Outcome::Matched { route, view } => tracing::info!(
            navigation_id = %resolution.id,
            path = %resolution.path,
            route = %route,
            view = %view,
            "Route resolved"
        ),
        Outcome::NotFound => tracing::warn!(
            navigation_id = %resolution.id,
            path = %resolution.path,
            "No route matched"
        ),
    }
}

/// Shell-side handle for sending events and observing resolutions.
pub struct NavigatorHandle {
    events: mpsc::Sender<NavigationEvent>,
    state: watch::Receiver<Resolution>,
    task: JoinHandle<()>,
}

impl NavigatorHandle {
    pub async fn send(&self, event: NavigationEvent) -> Result<(), NavigatorClosed> {
        self.events.send(event).await.map_err(|_| NavigatorClosed)
    }

    pub async fn push(&self, path: impl Into<String>) -> Result<(), NavigatorClosed> {
        self.send(NavigationEvent::Push(path.into())).await
    }

    pub async fn replace(&self, path: impl Into<String>) -> Result<(), NavigatorClosed> {
        self.send(NavigationEvent::Replace(path.into())).await
    }

    pub async fn back(&self) -> Result<(), NavigatorClosed> {
        self.send(NavigationEvent::Back).await
    }

    pub async fn forward(&self) -> Result<(), NavigatorClosed> {
        self.send(NavigationEvent::Forward).await
    }

    /// Snapshot of the latest resolution.
    pub fn current(&self) -> Resolution {
        self.state.borrow().clone()
    }

    /// A receiver that observes every subsequent resolution change.
    pub fn subscribe(&self) -> watch::Receiver<Resolution> {
        self.state.clone()
    }

    /// Close the event channel and wait for the task to finish processing
    /// what was already queued.
    pub async fn close(self) -> Resolution {
        let NavigatorHandle { events, state, task } = self;
        drop(events);
        if let Err(e) = task.await {
            tracing::error!(error = %e, "Navigator task failed");
        }
        let last = state.borrow().clone();
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{build_router, NamedView, RouteEntry, SNP_DESCENT_PLOTS};

    fn router() -> Arc<Router> {
        Arc::new(
            build_router(
                "/app",
                vec![
                    RouteEntry::new("/", NamedView::handle(SNP_DESCENT_PLOTS)),
                    RouteEntry::new("/about", NamedView::handle("About")),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(
            NavigationEvent::parse("push /about"),
            Some(NavigationEvent::Push("/about".into()))
        );
        assert_eq!(
            NavigationEvent::parse("  REPLACE /x "),
            Some(NavigationEvent::Replace("/x".into()))
        );
        assert_eq!(NavigationEvent::parse("back"), Some(NavigationEvent::Back));
        assert_eq!(NavigationEvent::parse("forward"), Some(NavigationEvent::Forward));
        assert_eq!(NavigationEvent::parse("push"), None);
        assert_eq!(NavigationEvent::parse("back /x"), None);
        assert_eq!(NavigationEvent::parse("jump /x"), None);
        assert_eq!(NavigationEvent::parse(""), None);
    }

    #[test]
    fn test_resolution_serializes_flat() {
        let resolution = Resolution::resolve(&router(), "/nowhere");
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["path"], "/nowhere");

        let resolution = Resolution::resolve(&router(), "/about");
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["status"], "matched");
        assert_eq!(json["view"], "About");
    }

    #[tokio::test]
    async fn test_initial_location_resolved() {
        let shutdown = Shutdown::new();
        let handle = Navigator::spawn(router(), "https://example.org/app/", &shutdown);

        let current = handle.current();
        assert_eq!(current.path, "/");
        assert!(current.is_match());
    }

    #[tokio::test]
    async fn test_push_publishes_latest() {
        let shutdown = Shutdown::new();
        let handle = Navigator::spawn(router(), "/app", &shutdown);
        let mut rx = handle.subscribe();

        handle.push("/about").await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow().outcome,
            Outcome::Matched {
                route: "/about".into(),
                view: "About".into()
            }
        );

        handle.push("/missing").await.unwrap();
        handle.back().await.unwrap();
        let last = handle.close().await;
        assert_eq!(last.path, "/about");
    }

    #[tokio::test]
    async fn test_spawn_after_trigger_stops_immediately() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        let handle = Navigator::spawn(router(), "/app", &shutdown);

        let last = handle.close().await;
        assert_eq!(last.path, "/");
    }

    #[tokio::test]
    async fn test_dropped_coordinator_keeps_navigator_alive() {
        let handle = {
            let shutdown = Shutdown::new();
            Navigator::spawn(router(), "/app", &shutdown)
        };
        let mut rx = handle.subscribe();

        handle.push("/about").await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().path, "/about");

        let last = handle.close().await;
        assert_eq!(last.path, "/about");
    }

    #[tokio::test]
    async fn test_shutdown_stops_task() {
        let shutdown = Shutdown::new();
        let handle = Navigator::spawn(router(), "/app", &shutdown);

        shutdown.trigger();
        let last = handle.close().await;
        assert_eq!(last.path, "/");
    }
}

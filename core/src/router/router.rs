//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! state management, navigation, and route resolution.

use super::history::NavigationMode;
use super::path::{normalize_path, Params};
use super::route::Route;
use super::table::RouteTable;
use crate::error::{NavigationError, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of back/forward entries kept
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// A location resolved to a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched route descriptor
    pub route: Route,
    /// Parameters captured from the path
    pub params: Params,
    /// Normalised location that was resolved
    pub path: String,
    /// Whether the route was reached through the table's fallback
    pub is_fallback: bool,
}

/// Outcome of resolving a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(RouteMatch),
    NoMatch { path: String },
}

impl Resolution {
    /// Normalised location, matched or not
    pub fn path(&self) -> &str {
        match self {
            Resolution::Matched(m) => &m.path,
            Resolution::NoMatch { path } => path,
        }
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Resolution::Matched(m) => Some(&m.route),
            Resolution::NoMatch { .. } => None,
        }
    }

    pub fn route_match(&self) -> Option<&RouteMatch> {
        match self {
            Resolution::Matched(m) => Some(m),
            Resolution::NoMatch { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }
}

/// Current state of the router
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Currently active location
    pub current: Resolution,
    /// Locations we can go back to (most recent first)
    pub back: Vec<Resolution>,
    /// Locations we can go forward to (most recent first)
    pub forward: Vec<Resolution>,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl RouterState {
    /// Create a new router state with the given initial location
    pub fn new(initial: Resolution) -> Self {
        Self {
            current: initial,
            back: Vec::new(),
            forward: Vec::new(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Move to a new location, recording the current one
    pub fn navigate_to(&mut self, next: Resolution) {
        // Re-pushing the current location leaves history alone
        if self.current.path() != next.path() {
            let previous = std::mem::replace(&mut self.current, next);
            self.back.insert(0, previous);
            self.back.truncate(self.max_history);
            self.forward.clear();
        } else {
            self.current = next;
        }
    }

    /// Swap the current location without touching history
    pub fn replace(&mut self, next: Resolution) {
        self.current = next;
    }

    /// Go back to the previous location in history
    pub fn go_back(&mut self) -> bool {
        if self.back.is_empty() {
            return false;
        }
        let previous = self.back.remove(0);
        let current = std::mem::replace(&mut self.current, previous);
        self.forward.insert(0, current);
        self.forward.truncate(self.max_history);
        true
    }

    /// Undo the last `go_back`
    pub fn go_forward(&mut self) -> bool {
        if self.forward.is_empty() {
            return false;
        }
        let next = self.forward.remove(0);
        let current = std::mem::replace(&mut self.current, next);
        self.back.insert(0, current);
        self.back.truncate(self.max_history);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Get the navigation history (most recent first)
    pub fn history(&self) -> &[Resolution] {
        &self.back
    }
}

/// Router factory: pair a route table with a navigation mode
pub fn create_router(table: impl Into<Arc<RouteTable>>, mode: NavigationMode) -> Router {
    Router::new(table, mode)
}

/// Main router struct that resolves locations and tracks navigation
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<RouteTable>,
    mode: NavigationMode,
    state: RouterState,
}

impl Router {
    /// Create a router positioned at `/`
    pub fn new(table: impl Into<Arc<RouteTable>>, mode: NavigationMode) -> Self {
        let table = table.into();
        let initial = resolve_in(&table, "/");
        debug!(mode = %mode, initial = initial.path(), "Router created");

        Self {
            table,
            mode,
            state: RouterState::new(initial),
        }
    }

    /// Set maximum history size; zero disables back/forward
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.state.max_history = max_history;
        self.state.back.truncate(max_history);
        self.state.forward.truncate(max_history);
        self
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn mode(&self) -> &NavigationMode {
        &self.mode
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// Resolve a location without navigating
    pub fn resolve(&self, path: &str) -> Resolution {
        resolve_in(&self.table, path)
    }

    /// Resolve a URL (or path) according to the navigation mode
    pub fn resolve_url(&self, url: &str) -> Result<Resolution> {
        let path = self.mode.location_from_url(url)?;
        Ok(self.resolve(&path))
    }

    /// Resolve a named route with parameters
    pub fn resolve_name(&self, name: &str, params: &Params) -> Result<RouteMatch> {
        let route = self
            .table
            .get(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;
        let path = self.table.path_for(name, params)?;
        // Keep only the values the pattern actually carries
        let params = self
            .table
            .pattern(name)
            .and_then(|pattern| pattern.matches(&path))
            .unwrap_or_default();

        Ok(RouteMatch {
            route: route.clone(),
            params,
            path,
            is_fallback: false,
        })
    }

    /// URL reference for a named route under the current mode
    pub fn href_for(&self, name: &str, params: &Params) -> Result<String> {
        let path = self.table.path_for(name, params)?;
        Ok(self.mode.href(&path))
    }

    /// Navigate to a location. Unmatched locations are still recorded.
    pub fn push(&mut self, path: &str) -> &Resolution {
        let next = self.resolve(path);
        if !next.is_match() {
            warn!(path = next.path(), "Navigated to a path with no matching route");
        }
        debug!(from = self.state.current.path(), to = next.path(), "push");
        self.state.navigate_to(next);
        &self.state.current
    }

    /// Navigate to a named route
    pub fn push_named(&mut self, name: &str, params: &Params) -> Result<&Resolution> {
        let next = self.resolve_name(name, params)?;
        debug!(from = self.state.current.path(), to = %next.path, "push_named");
        self.state.navigate_to(Resolution::Matched(next));
        Ok(&self.state.current)
    }

    /// Replace the current location without adding a history entry
    pub fn replace(&mut self, path: &str) -> &Resolution {
        let next = self.resolve(path);
        debug!(from = self.state.current.path(), to = next.path(), "replace");
        self.state.replace(next);
        &self.state.current
    }

    /// Go back to the previous location
    pub fn back(&mut self) -> bool {
        self.state.go_back()
    }

    /// Go forward again after going back
    pub fn forward(&mut self) -> bool {
        self.state.go_forward()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    /// Get the current location
    pub fn current(&self) -> &Resolution {
        &self.state.current
    }

    /// Get the current route, if the location matched one
    pub fn current_route(&self) -> Option<&Route> {
        self.state.current.route()
    }

    pub fn current_path(&self) -> &str {
        self.state.current.path()
    }

    pub fn current_href(&self) -> String {
        self.mode.href(self.current_path())
    }
}

fn resolve_in(table: &RouteTable, path: &str) -> Resolution {
    let path = normalize_path(path);

    if let Some((route, params)) = table.match_path(&path) {
        return Resolution::Matched(RouteMatch {
            route: route.clone(),
            params,
            path,
            is_fallback: false,
        });
    }

    match table.fallback() {
        Some(route) => Resolution::Matched(RouteMatch {
            route: route.clone(),
            params: Params::new(),
            path,
            is_fallback: true,
        }),
        None => Resolution::NoMatch { path },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::router::ViewId;

    fn table() -> RouteTable {
        let views: Vec<ViewId> = vec!["Chat".into(), "Dashboard".into(), "NotFound".into()];
        RouteTable::builder()
            .route("/", "Chat", "Chat")
            .route("/dashboard", "Dashboard", "Dashboard")
            .route("/reports/:id", "Report", "Dashboard")
            .build(&views)
            .unwrap()
    }

    fn router() -> Router {
        create_router(table(), NavigationMode::memory())
    }

    #[test]
    fn test_initial_location() {
        let router = router();
        assert_eq!(router.current_path(), "/");
        assert_eq!(router.current_route().map(|r| r.name.as_str()), Some("Chat"));
        assert!(!router.can_go_back());
        assert!(!router.can_go_forward());
    }

    #[test]
    fn test_resolve_does_not_navigate() {
        let router = router();
        let resolution = router.resolve("/reports/12/");
        let m = resolution.route_match().unwrap();
        assert_eq!(m.route.name.as_str(), "Report");
        assert_eq!(m.params.get("id"), Some("12"));
        assert_eq!(m.path, "/reports/12");
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn test_unknown_path_is_no_match() {
        let router = router();
        assert_eq!(
            router.resolve("/unknown"),
            Resolution::NoMatch {
                path: "/unknown".to_string()
            }
        );
    }

    #[test]
    fn test_fallback_route() {
        let views: Vec<ViewId> = vec!["Chat".into(), "NotFound".into()];
        let table = RouteTable::builder()
            .route("/", "Chat", "Chat")
            .route("/404", "NotFound", "NotFound")
            .fallback("NotFound")
            .build(&views)
            .unwrap();
        let router = create_router(table, NavigationMode::default());

        let m = router.resolve("/missing").route_match().cloned().unwrap();
        assert_eq!(m.route.name.as_str(), "NotFound");
        assert_eq!(m.path, "/missing");
        assert!(m.is_fallback);
    }

    #[test]
    fn test_push_back_forward() {
        let mut router = router();

        router.push("/dashboard");
        assert_eq!(router.current_path(), "/dashboard");
        assert!(router.can_go_back());

        router.push("/unknown");
        assert!(!router.current().is_match());

        assert!(router.back());
        assert_eq!(router.current_path(), "/dashboard");
        assert!(router.can_go_forward());

        assert!(router.back());
        assert_eq!(router.current_path(), "/");
        assert!(!router.back());

        assert!(router.forward());
        assert!(router.forward());
        assert_eq!(router.current_path(), "/unknown");
        assert!(!router.forward());
    }

    #[test]
    fn test_push_clears_forward_stack() {
        let mut router = router();
        router.push("/dashboard");
        router.back();
        assert!(router.can_go_forward());

        router.push("/reports/1");
        assert!(!router.can_go_forward());
        assert_eq!(router.state().history().len(), 1);
    }

    #[test]
    fn test_push_same_location_keeps_history() {
        let mut router = router();
        router.push("/");
        router.push("/?tab=2");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_replace() {
        let mut router = router();
        router.push("/dashboard");
        router.replace("/reports/5");
        assert_eq!(router.current_path(), "/reports/5");
        assert_eq!(router.state().history().len(), 1);
        assert!(router.back());
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn test_push_named() {
        let mut router = router();
        let resolution = router
            .push_named("Report", &Params::new().with("id", "8"))
            .unwrap();
        assert_eq!(resolution.path(), "/reports/8");

        let err = router.push_named("Settings", &Params::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::Navigation(NavigationError::UnknownRoute(ref name)) if name == "Settings"
        ));
        assert_eq!(router.current_path(), "/reports/8");
    }

    #[test]
    fn test_named_paths_resolve_back_to_their_route() {
        let mut router = router();
        for id in ["8", "a/b", "x?y", "#top", "50% off"] {
            let params = Params::new().with("id", id);
            let path = router.table().path_for("Report", &params).unwrap();
            let m = router.resolve(&path).route_match().cloned().unwrap();
            assert_eq!(m.route.name.as_str(), "Report");
            assert_eq!(m.params, params);

            let pushed = router.push_named("Report", &params).unwrap().clone();
            assert_eq!(pushed, router.resolve(router.current_path()));
        }
    }

    #[test]
    fn test_push_named_rejects_empty_param() {
        let mut router = router();
        let err = router
            .push_named("Report", &Params::new().with("id", ""))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Navigation(NavigationError::EmptyParam { ref param, .. }) if param == "id"
        ));
        assert_eq!(router.current_path(), "/");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_resolve_name_drops_unused_params() {
        let router = router();
        let m = router
            .resolve_name("Dashboard", &Params::new().with("tab", "2"))
            .unwrap();
        assert_eq!(m.path, "/dashboard");
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_hash_mode_resolves_bare_paths() {
        let router = create_router(table(), NavigationMode::web_hash_history("/app"));
        let resolution = router.resolve_url("/dashboard").unwrap();
        assert_eq!(
            resolution.route().map(|r| r.name.as_str()),
            Some("Dashboard")
        );
        assert_eq!(
            router
                .resolve_url("https://example.com/app/#/reports/4")
                .unwrap()
                .route()
                .map(|r| r.name.as_str()),
            Some("Report")
        );
    }

    #[test]
    fn test_history_limit() {
        let mut router = router().with_max_history(2);
        for id in 0..5 {
            router.push(&format!("/reports/{}", id));
        }
        assert_eq!(router.state().history().len(), 2);
        assert_eq!(router.state().history()[0].path(), "/reports/3");
    }

    #[test]
    fn test_history_disabled() {
        let mut router = router().with_max_history(0);
        router.push("/dashboard");
        assert!(!router.can_go_back());
        assert!(!router.back());
    }

    #[test]
    fn test_href_and_url_resolution() {
        let router = create_router(table(), NavigationMode::web_hash_history("/"));
        assert_eq!(
            router.href_for("Dashboard", &Params::new()).unwrap(),
            "/#/dashboard"
        );
        assert_eq!(router.current_href(), "/#/");

        let resolution = router
            .resolve_url("http://localhost:5173/#/dashboard")
            .unwrap();
        assert_eq!(
            resolution.route().map(|r| r.name.as_str()),
            Some("Dashboard")
        );
    }
}

//! UI framework integration for the router system
//!
//! This module bridges the core router with iocraft components: a shared
//! handle to the router, a navigator that re-renders the shell after a
//! navigation, and the component that renders the view for the current
//! location.

use iocraft::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard};
use viewroute_core::{Params, Resolution, Route, RouteMatch, Router, ViewRegistry};

/// Everything a page needs when it is rendered
#[derive(Clone)]
pub struct PageContext {
    /// Navigation control for the page
    pub navigator: Navigator,
    /// The route match that selected this page
    pub route_match: RouteMatch,
}

/// Type alias for page render functions
/// Each page is a function that turns the page context into an element
pub type PageRenderer = Box<dyn Fn(PageContext) -> AnyElement<'static> + Send + Sync>;

/// A shareable, UI-friendly handle to the router
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<Router>>);

impl RouterHandle {
    /// Create a new router handle
    pub fn new(router: Router) -> Self {
        Self(Arc::new(Mutex::new(router)))
    }

    fn lock(&self) -> MutexGuard<'_, Router> {
        // A panic while holding the lock cannot leave the router half-updated
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Navigate to a location
    pub fn push(&self, path: &str) -> Resolution {
        self.lock().push(path).clone()
    }

    /// Navigate to a named route without parameters
    pub fn push_named(&self, name: &str) -> viewroute_core::Result<Resolution> {
        self.lock().push_named(name, &Params::new()).cloned()
    }

    /// Go back to the previous location
    pub fn back(&self) -> bool {
        self.lock().back()
    }

    /// Go forward again after going back
    pub fn forward(&self) -> bool {
        self.lock().forward()
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.lock().can_go_forward()
    }

    /// Get the current location
    pub fn current(&self) -> Resolution {
        self.lock().current().clone()
    }

    /// Get the current location as a URL reference
    pub fn current_href(&self) -> String {
        self.lock().current_href()
    }

    /// Routes in table order
    pub fn routes(&self) -> Vec<Route> {
        self.lock().table().routes().cloned().collect()
    }

    /// Back stack paths, most recent first
    pub fn history(&self) -> Vec<String> {
        self.lock()
            .state()
            .history()
            .iter()
            .map(|r| r.path().to_string())
            .collect()
    }

    /// Navigation mode description
    pub fn mode(&self) -> String {
        self.lock().mode().to_string()
    }
}

/// Router handle paired with the shell's render trigger.
///
/// Every successful navigation bumps `revision`, which makes the owning
/// component re-render with the new location.
#[derive(Clone)]
pub struct Navigator {
    handle: RouterHandle,
    revision: State<u64>,
}

impl Navigator {
    pub fn new(handle: RouterHandle, revision: State<u64>) -> Self {
        Self { handle, revision }
    }

    pub fn handle(&self) -> &RouterHandle {
        &self.handle
    }

    /// Navigate to a location
    pub fn push(&mut self, path: &str) -> Resolution {
        let resolution = self.handle.push(path);
        self.bump();
        resolution
    }

    /// Navigate to a named route
    pub fn push_named(&mut self, name: &str) -> viewroute_core::Result<Resolution> {
        let resolution = self.handle.push_named(name)?;
        self.bump();
        Ok(resolution)
    }

    pub fn back(&mut self) -> bool {
        let moved = self.handle.back();
        if moved {
            self.bump();
        }
        moved
    }

    pub fn forward(&mut self) -> bool {
        let moved = self.handle.forward();
        if moved {
            self.bump();
        }
        moved
    }

    fn bump(&mut self) {
        let next = self.revision.get().wrapping_add(1);
        self.revision.set(next);
    }
}

/// UI router component properties
#[derive(Default, Props)]
pub struct UIRouterProps {
    /// Navigation control shared with the pages
    pub navigator: Option<Navigator>,
    /// Map of view ids to their corresponding page renderers
    pub pages: Arc<ViewRegistry<PageRenderer>>,
}

/// UI router component that renders the view for the current location
#[component]
pub fn UIRouter(props: &UIRouterProps) -> impl Into<AnyElement<'static>> {
    let Some(navigator) = props.navigator.clone() else {
        return element! { View }.into_any();
    };

    let current = navigator.handle().current();

    // Try to find the page renderer for the current route
    let page_element = match &current {
        Resolution::Matched(route_match) => props
            .pages
            .get(&route_match.route.view)
            .map(|page_renderer| {
                page_renderer(PageContext {
                    navigator,
                    route_match: route_match.clone(),
                })
            }),
        Resolution::NoMatch { .. } => None,
    };

    let page_element = page_element.unwrap_or_else(|| {
        // Default fallback: show route not found message
        element! {
            View(
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                width: 100pct,
                height: 100pct,
                padding: 2,
            ) {
                Text(
                    content: "Route Not Found",
                    weight: Weight::Bold,
                    color: Color::Red
                )
                Text(
                    content: format!("Unknown route: {}", current.path())
                )
                Text(
                    content: "Press Esc to go back",
                    color: Color::Grey
                )
            }
        }
        .into()
    });

    element! {
        View(
            key: "router-container",
            width: 100pct,
            height: 100pct,
        ) {
            #(page_element)
        }
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewroute_core::{create_app_router, NavigationError, RouterSettings, ViewId};

    fn handle() -> RouterHandle {
        let views: Vec<ViewId> = vec!["Chat".into(), "Dashboard".into()];
        let settings = RouterSettings::default();
        RouterHandle::new(create_app_router(&views, &settings).expect("Failed to create router"))
    }

    #[test]
    fn test_router_handle() {
        let handle = handle();

        // Test initial state
        assert_eq!(handle.current().path(), "/");
        assert!(!handle.can_go_back());

        // Test navigation
        handle.push("/dashboard");
        assert_eq!(
            handle.current().route().map(|r| r.name.to_string()),
            Some("Dashboard".to_string())
        );
        assert!(handle.can_go_back());
        assert_eq!(handle.history(), vec!["/".to_string()]);

        // Test go back
        assert!(handle.back());
        assert_eq!(handle.current().path(), "/");
        assert!(!handle.can_go_back());
        assert!(handle.can_go_forward());

        assert!(handle.forward());
        assert_eq!(handle.current_href(), "/dashboard");
    }

    #[test]
    fn test_handle_is_shared() {
        let handle = handle();
        let other = handle.clone();

        other.push_named("Dashboard").expect("Failed to navigate");
        assert_eq!(handle.current().path(), "/dashboard");
    }

    #[test]
    fn test_unknown_name() {
        let handle = handle();
        let err = handle.push_named("Settings").unwrap_err();
        assert!(matches!(
            err,
            viewroute_core::Error::Navigation(NavigationError::UnknownRoute(_))
        ));
        assert_eq!(handle.current().path(), "/");
    }

    #[test]
    fn test_unmatched_location_is_recorded() {
        let handle = handle();
        let resolution = handle.push("/unknown");
        assert!(!resolution.is_match());
        assert_eq!(handle.current().path(), "/unknown");
        assert!(handle.back());
    }

    #[test]
    fn test_routes_and_mode() {
        let handle = handle();
        let names: Vec<_> = handle.routes().into_iter().map(|r| r.name.0).collect();
        assert_eq!(names, vec!["Chat", "Dashboard"]);
        assert!(handle.mode().starts_with("history"));
    }
}

//! Route table and its builder
//!
//! A [`RouteTable`] is an ordered, validated and immutable list of routes.
//! Order decides priority when more than one pattern matches a path.

use super::path::{normalize_path, Params, PathPattern};
use super::route::{Route, RouteName, ViewId};
use super::view::ViewResolver;
use crate::error::{ConfigurationError, DuplicateRouteError, NavigationError, Result};
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    route: Route,
    pattern: PathPattern,
}

/// Validated, immutable route table
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<Entry>,
    fallback: Option<usize>,
}

impl RouteTable {
    /// Start building a table
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Routes in priority order
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().map(|e| &e.route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a route by name
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.entry(name).map(|e| &e.route)
    }

    /// Compiled pattern of a named route
    pub fn pattern(&self, name: &str) -> Option<&PathPattern> {
        self.entry(name).map(|e| &e.pattern)
    }

    /// Route used for paths nothing else matches, if configured
    pub fn fallback(&self) -> Option<&Route> {
        self.fallback.map(|i| &self.entries[i].route)
    }

    /// First route whose pattern matches the given location
    pub fn match_path(&self, path: &str) -> Option<(&Route, Params)> {
        let path = normalize_path(path);
        self.entries
            .iter()
            .find_map(|e| e.pattern.matches(&path).map(|params| (&e.route, params)))
    }

    /// Concrete path for a named route
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String> {
        let entry = self
            .entry(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;
        Ok(entry.pattern.build(name, params)?)
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.route.name.as_str() == name)
    }
}

/// Builder collecting route descriptors before validation
#[derive(Debug, Clone, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    fallback: Option<RouteName>,
}

impl RouteTableBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route from its parts
    pub fn route(
        self,
        path: impl Into<String>,
        name: impl Into<RouteName>,
        view: impl Into<ViewId>,
    ) -> Self {
        self.add(Route::new(path, name, view))
    }

    /// Add a prepared route descriptor
    pub fn add(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Name the route rendered for paths no pattern matches
    pub fn fallback(mut self, name: impl Into<RouteName>) -> Self {
        self.fallback = Some(name.into());
        self
    }

    /// Validate the descriptors and freeze them into a table.
    ///
    /// Fails on the first invalid pattern, unresolved view, duplicate
    /// path or duplicate name, in declaration order.
    pub fn build<R>(self, views: &R) -> Result<RouteTable>
    where
        R: ViewResolver + ?Sized,
    {
        if self.routes.is_empty() {
            return Err(ConfigurationError::NoRoutes.into());
        }

        let mut entries: Vec<Entry> = Vec::with_capacity(self.routes.len());

        for route in self.routes {
            let pattern = PathPattern::parse(&route.path)?;

            if !views.contains_view(&route.view) {
                return Err(ConfigurationError::UnresolvedView {
                    route: route.name.to_string(),
                    view: route.view.to_string(),
                }
                .into());
            }

            for existing in &entries {
                if existing.route.name == route.name {
                    return Err(DuplicateRouteError::Name {
                        name: route.name.to_string(),
                    }
                    .into());
                }
                if existing.pattern.same_shape(&pattern) {
                    return Err(DuplicateRouteError::Path {
                        existing: existing.route.path.clone(),
                        duplicate: route.path.clone(),
                    }
                    .into());
                }
            }

            entries.push(Entry { route, pattern });
        }

        let fallback = match self.fallback {
            Some(name) => Some(
                entries
                    .iter()
                    .position(|e| e.route.name == name)
                    .ok_or_else(|| ConfigurationError::UnknownFallback {
                        name: name.to_string(),
                    })?,
            ),
            None => None,
        };

        debug!(
            routes = entries.len(),
            fallback = fallback.is_some(),
            "Route table built"
        );

        Ok(RouteTable { entries, fallback })
    }
}

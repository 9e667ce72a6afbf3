//! View registry
//!
//! Routes refer to views by [`ViewId`]. The host application registers
//! whatever it renders with (terminal pages, widgets, closures) under those
//! ids; table construction only needs to know which ids resolve.

use super::route::ViewId;
use std::collections::HashMap;
use std::fmt;

/// Anything that can tell whether a view reference resolves
pub trait ViewResolver {
    fn contains_view(&self, view: &ViewId) -> bool;
}

impl ViewResolver for [ViewId] {
    fn contains_view(&self, view: &ViewId) -> bool {
        self.contains(view)
    }
}

impl<const N: usize> ViewResolver for [ViewId; N] {
    fn contains_view(&self, view: &ViewId) -> bool {
        self.contains(view)
    }
}

impl ViewResolver for Vec<ViewId> {
    fn contains_view(&self, view: &ViewId) -> bool {
        self.contains(view)
    }
}

/// Map of view ids to the values that render them
pub struct ViewRegistry<V> {
    views: HashMap<ViewId, V>,
}

impl<V> ViewRegistry<V> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Register a view (builder style)
    pub fn register(mut self, id: impl Into<ViewId>, view: V) -> Self {
        self.insert(id, view);
        self
    }

    /// Register a view, replacing any previous one with the same id
    pub fn insert(&mut self, id: impl Into<ViewId>, view: V) -> Option<V> {
        self.views.insert(id.into(), view)
    }

    pub fn get(&self, id: &ViewId) -> Option<&V> {
        self.views.get(id)
    }

    pub fn contains(&self, id: &ViewId) -> bool {
        self.views.contains_key(id)
    }

    /// Registered ids, sorted for stable output
    pub fn ids(&self) -> Vec<&ViewId> {
        let mut ids: Vec<_> = self.views.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl<V> ViewResolver for ViewRegistry<V> {
    fn contains_view(&self, view: &ViewId) -> bool {
        self.contains(view)
    }
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ViewRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("views", &self.ids())
            .finish()
    }
}

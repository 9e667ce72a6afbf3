//! Router module for mapping locations to views
//!
//! Routes are collected by a [`RouteTableBuilder`], validated into an
//! immutable [`RouteTable`], and handed together with a
//! [`NavigationMode`] to [`create_router`].

pub mod history;
pub mod path;
pub mod route;
#[allow(clippy::module_inception)]
pub mod router;
pub mod table;
pub mod view;

// Re-export commonly used types
pub use history::{ModeKind, NavigationMode};
pub use path::{normalize_path, Params, PathPattern, Segment};
pub use route::{Route, RouteName, ViewId};
pub use router::{
    create_router, Resolution, RouteMatch, Router, RouterState, DEFAULT_MAX_HISTORY,
};
pub use table::{RouteTable, RouteTableBuilder};
pub use view::{ViewRegistry, ViewResolver};

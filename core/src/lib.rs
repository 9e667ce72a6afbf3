//! # viewroute Core
//!
//! Core library for viewroute - the route table behind the chat and
//! dashboard application shell.
//!
//! This library provides the building blocks for mapping locations to
//! views: validated route tables, path patterns, navigation modes and a
//! router that tracks navigation history. It has no UI dependencies.

// Core modules
pub mod app;
pub mod config;
pub mod error;
pub mod router;

// Re-export commonly used types
pub use app::{app_routes, create_app_router, CHAT_VIEW, DASHBOARD_VIEW};
pub use config::RouterSettings;
pub use error::{ConfigurationError, DuplicateRouteError, Error, NavigationError, Result};
pub use router::{
    create_router, ModeKind, NavigationMode, Params, Resolution, Route, RouteMatch, RouteName,
    RouteTable, RouteTableBuilder, Router, ViewId, ViewRegistry, ViewResolver,
};

/// Current version of the viewroute-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


//! Error types and handling for viewroute core

use thiserror::Error;

/// Result type alias for viewroute operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for viewroute core
#[derive(Error, Debug)]
pub enum Error {
    /// Route table or settings are misconfigured
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// Two routes claim the same path or name
    #[error("Duplicate route: {0}")]
    DuplicateRoute(#[from] DuplicateRouteError),

    /// Navigation request could not be satisfied
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

/// Configuration-specific errors, raised while building a route table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{route}' references unknown view '{view}'")]
    UnresolvedView { route: String, view: String },

    #[error("Invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Fallback route '{name}' is not part of the table")]
    UnknownFallback { name: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// Raised when two descriptors would be indistinguishable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuplicateRouteError {
    #[error("path '{duplicate}' collides with '{existing}'")]
    Path { existing: String, duplicate: String },

    #[error("name '{name}' is used more than once")]
    Name { name: String },
}

/// Navigation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Route '{0}' not found")]
    UnknownRoute(String),

    #[error("Route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    #[error("Parameter '{param}' of route '{route}' must not be empty")]
    EmptyParam { route: String, param: String },

    #[error("URL '{url}' is outside of base '{base}'")]
    OutsideBase { url: String, base: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

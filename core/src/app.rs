//! Application route table
//!
//! The shell has two views: the chat interface at `/` and the dashboard
//! at `/dashboard`. This module declares that table and builds the router
//! the shell mounts at startup.

use crate::config::RouterSettings;
use crate::error::Result;
use crate::router::{create_router, Route, RouteTableBuilder, Router, ViewResolver};
use tracing::debug;

/// View rendered at `/`
pub const CHAT_VIEW: &str = "Chat";
/// View rendered at `/dashboard`
pub const DASHBOARD_VIEW: &str = "Dashboard";

/// The fixed application routes, in priority order
pub fn app_routes() -> RouteTableBuilder {
    RouteTableBuilder::new()
        .add(
            Route::new("/", "Chat", CHAT_VIEW)
                .with_description("Ask questions about the organisation in natural language"),
        )
        .add(
            Route::new("/dashboard", "Dashboard", DASHBOARD_VIEW)
                .with_description("Overview of key metrics"),
        )
}

/// Build the application table, check it against the available views and
/// construct the router. Any failure here is a startup configuration error.
pub fn create_app_router<R>(views: &R, settings: &RouterSettings) -> Result<Router>
where
    R: ViewResolver + ?Sized,
{
    settings.validate()?;

    let table = app_routes().build(views)?;
    let mode = settings.navigation_mode();
    debug!(routes = table.len(), mode = %mode, "Creating application router");

    Ok(create_router(table, mode).with_max_history(settings.max_history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, Error};
    use crate::router::{ModeKind, NavigationMode, Resolution, ViewId};
    use std::collections::HashSet;

    fn all_views() -> Vec<ViewId> {
        vec![CHAT_VIEW.into(), DASHBOARD_VIEW.into()]
    }

    fn app_router() -> Router {
        create_app_router(&all_views(), &RouterSettings::default()).unwrap()
    }

    #[test]
    fn test_paths_and_names_are_unique() {
        let router = app_router();
        let table = router.table();

        let paths: HashSet<_> = table.routes().map(|r| r.path.as_str()).collect();
        let names: HashSet<_> = table.routes().map(|r| r.name.as_str()).collect();
        assert_eq!(paths.len(), table.len());
        assert_eq!(names.len(), table.len());
    }

    #[test]
    fn test_root_resolves_to_chat() {
        let router = app_router();
        let route = router.resolve("/").route().cloned().unwrap();
        assert_eq!(route.name.as_str(), "Chat");
        assert_eq!(route.view.as_str(), CHAT_VIEW);
    }

    #[test]
    fn test_dashboard_resolves_to_dashboard() {
        let router = app_router();
        let route = router.resolve("/dashboard").route().cloned().unwrap();
        assert_eq!(route.name.as_str(), "Dashboard");
        assert_eq!(route.view.as_str(), DASHBOARD_VIEW);
    }

    #[test]
    fn test_unknown_path_has_no_match() {
        let router = app_router();
        assert_eq!(
            router.resolve("/unknown"),
            Resolution::NoMatch {
                path: "/unknown".to_string()
            }
        );
    }

    #[test]
    fn test_history_mode_by_default() {
        let router = app_router();
        assert_eq!(router.mode(), &NavigationMode::web_history("/"));
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn test_missing_view_fails_fast() {
        let views: Vec<ViewId> = vec![CHAT_VIEW.into()];
        let err = create_app_router(&views, &RouterSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigurationError::UnresolvedView { ref view, .. }) if view == DASHBOARD_VIEW
        ));
    }

    #[test]
    fn test_settings_are_applied() {
        let settings = RouterSettings::new(ModeKind::Hash)
            .with_base("/app")
            .with_max_history(0);
        let mut router = create_app_router(&all_views(), &settings).unwrap();

        assert_eq!(router.current_href(), "/app/#/");
        router.push("/dashboard");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_invalid_settings_fail_fast() {
        let settings = RouterSettings::default().with_base("/a?b");
        assert!(matches!(
            create_app_router(&all_views(), &settings),
            Err(Error::Config(ConfigurationError::InvalidValue { .. }))
        ));
    }
}

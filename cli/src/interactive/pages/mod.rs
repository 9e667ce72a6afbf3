//! Page components for the interactive application
//!
//! Each page is registered under the view id its route points at, so the
//! route table can be checked against the pages before the shell starts.

pub mod chat;
pub mod dashboard;

// Re-export commonly used types
pub use chat::{ChatPage, ChatPageProps};
pub use dashboard::{DashboardPage, DashboardPageProps};

use crate::interactive::router::{PageContext, PageRenderer};
use iocraft::prelude::*;
use viewroute_core::{ViewRegistry, CHAT_VIEW, DASHBOARD_VIEW};

/// All pages the shell can render, keyed by view id
pub fn page_registry() -> ViewRegistry<PageRenderer> {
    ViewRegistry::<PageRenderer>::new()
        .register(
            CHAT_VIEW,
            Box::new(|ctx: PageContext| {
                element! {
                    ChatPage(
                        navigator: Some(ctx.navigator),
                        description: ctx.route_match.route.description,
                    )
                }
                .into()
            }),
        )
        .register(
            DASHBOARD_VIEW,
            Box::new(|ctx: PageContext| {
                element! {
                    DashboardPage(
                        navigator: Some(ctx.navigator),
                        description: ctx.route_match.route.description,
                    )
                }
                .into()
            }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewroute_core::{create_app_router, RouterSettings, ViewId};

    #[test]
    fn test_registry_covers_app_routes() {
        let pages = page_registry();
        assert!(pages.contains(&ViewId::from(CHAT_VIEW)));
        assert!(pages.contains(&ViewId::from(DASHBOARD_VIEW)));
        assert_eq!(pages.len(), 2);

        let router = create_app_router(&pages, &RouterSettings::default());
        assert!(router.is_ok());
    }
}

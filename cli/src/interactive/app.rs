//! Interactive shell application
//!
//! Top-level component of the interactive mode. It owns the render trigger
//! shared by every navigation, draws the navigation bar and mounts the
//! page for the current location.

use crate::interactive::components::{NavBar, NavItem};
use crate::interactive::router::{Navigator, PageRenderer, RouterHandle, UIRouter};
use anyhow::Result;
use iocraft::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};
use viewroute_core::{Resolution, Route, Router, ViewRegistry};

const HELP_TEXT: &str = "F1-F12 open route · Esc back · Ctrl+→ forward · Ctrl+C exit";

/// Build navigation bar entries, marking the route of the current location
pub(crate) fn nav_items(routes: &[Route], current: &Resolution) -> Vec<NavItem> {
    routes
        .iter()
        .enumerate()
        .map(|(i, route)| NavItem {
            key_hint: format!("F{}", i + 1),
            label: route.name.to_string(),
            active: current.route().is_some_and(|r| r.name == route.name),
        })
        .collect()
}

/// Properties for the shell application
#[derive(Default, Props)]
pub struct ShellAppProps {
    pub handle: Option<RouterHandle>,
    pub pages: Arc<ViewRegistry<PageRenderer>>,
}

#[component]
pub fn ShellApp(mut hooks: Hooks, props: &ShellAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let revision = hooks.use_state(|| 0u64);
    let should_exit = hooks.use_state(|| false);

    let navigator = props
        .handle
        .clone()
        .map(|handle| Navigator::new(handle, revision));

    hooks.use_terminal_events({
        let mut navigator = navigator.clone();
        let mut should_exit = should_exit;
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind != KeyEventKind::Release => {
                let Some(navigator) = navigator.as_mut() else {
                    return;
                };
                match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        should_exit.set(true);
                    }
                    KeyCode::F(n) if n >= 1 => {
                        let routes = navigator.handle().routes();
                        if let Some(route) = routes.get(usize::from(n - 1)) {
                            if let Err(e) = navigator.push_named(route.name.as_str()) {
                                warn!("Failed to open route {}: {}", route.name, e);
                            }
                        }
                    }
                    KeyCode::Esc => {
                        navigator.back();
                    }
                    KeyCode::Left if modifiers.contains(KeyModifiers::CONTROL) => {
                        navigator.back();
                    }
                    KeyCode::Right if modifiers.contains(KeyModifiers::CONTROL) => {
                        navigator.forward();
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let Some(navigator) = navigator else {
        return element! { View }.into_any();
    };

    let handle = navigator.handle().clone();
    let current = handle.current();
    let items = nav_items(&handle.routes(), &current);

    element! {
        View(
            key: "shell",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            NavBar(
                items: items,
                location: handle.current_href(),
                can_go_back: handle.can_go_back(),
                can_go_forward: handle.can_go_forward(),
            )

            View(flex_grow: 1.0, width: 100pct) {
                UIRouter(navigator: Some(navigator), pages: props.pages.clone())
            }

            Text(content: HELP_TEXT, color: Color::DarkGrey)
        }
    }
    .into_any()
}

/// Run the interactive shell until the user exits
pub async fn run_interactive(router: Router, pages: ViewRegistry<PageRenderer>) -> Result<()> {
    debug!(
        routes = router.table().len(),
        mode = %router.mode(),
        "Starting interactive shell"
    );

    let handle = RouterHandle::new(router);
    let pages = Arc::new(pages);

    // iocraft drives its own event loop, keep it off the tokio workers
    tokio::task::spawn_blocking(move || {
        smol::block_on(async move {
            element!(ShellApp(handle: Some(handle), pages: pages))
                .render_loop()
                .await
        })
    })
    .await??;

    Ok(())
}

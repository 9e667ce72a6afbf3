//! Dashboard page component
//!
//! Overview of the shell itself: the route table, the navigation mode and
//! the back stack. Up/Down select a route and Enter opens it.

use crate::interactive::router::Navigator;
use iocraft::prelude::*;

/// Properties for the dashboard page component
#[derive(Default, Props)]
pub struct DashboardPageProps {
    pub navigator: Option<Navigator>,
    pub description: Option<String>,
}

/// Move a selection cursor by `delta`, wrapping around `len` entries
pub(crate) fn step_selection(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

#[component]
pub fn DashboardPage(mut hooks: Hooks, props: &DashboardPageProps) -> impl Into<AnyElement<'static>> {
    let selected = hooks.use_state(|| 0usize);
    let navigator = props.navigator.clone();
    let routes = navigator
        .as_ref()
        .map(|navigator| navigator.handle().routes())
        .unwrap_or_default();
    let route_count = routes.len();

    hooks.use_terminal_events({
        let mut selected = selected;
        let mut navigator = navigator.clone();
        let routes = routes.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Up => selected.set(step_selection(selected.get(), -1, route_count)),
                    KeyCode::Down => selected.set(step_selection(selected.get(), 1, route_count)),
                    KeyCode::Enter => {
                        if let (Some(navigator), Some(route)) =
                            (navigator.as_mut(), routes.get(selected.get()))
                        {
                            navigator.push(&route.path);
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    let Some(navigator) = navigator else {
        return element! { View }.into_any();
    };
    let handle = navigator.handle();

    let current = handle.current();
    let history = handle.history();
    let selected_index = selected.get();

    element! {
        View(
            key: "dashboard-page",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
            padding: 1,
            gap: 1,
        ) {
            View(flex_direction: FlexDirection::Column) {
                Text(content: "Dashboard", weight: Weight::Bold, color: Color::Cyan)
                #(props.description.clone().map(|description| element! {
                    Text(content: description, color: Color::Grey)
                }))
            }

            View(
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: Color::DarkGrey,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: "Routes", weight: Weight::Bold)
                #(routes.iter().enumerate().map(|(i, route)| {
                    let active = current.route().is_some_and(|r| r.name == route.name);
                    let marker = if i == selected_index { "›" } else { " " };
                    element! {
                        Text(
                            key: format!("route-{}", route.name),
                            content: format!(
                                "{} F{:<2} {:<14} {:<12} {}",
                                marker,
                                i + 1,
                                route.path,
                                route.name,
                                route.view
                            ),
                            color: if active { Color::Green } else { Color::White },
                            weight: if i == selected_index { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }).collect::<Vec<_>>())
            }

            View(
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: Color::DarkGrey,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: "Navigation", weight: Weight::Bold)
                Text(content: format!("Mode:     {}", handle.mode()))
                Text(content: format!("Location: {}", handle.current_href()))
                Text(
                    content: if history.is_empty() {
                        "History:  (empty)".to_string()
                    } else {
                        format!("History:  {}", history.join(" ← "))
                    }
                )
            }

            Text(
                content: format!("viewroute v{}", viewroute_core::VERSION),
                color: Color::DarkGrey,
            )
        }
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_selection_wraps() {
        assert_eq!(step_selection(0, 1, 2), 1);
        assert_eq!(step_selection(1, 1, 2), 0);
        assert_eq!(step_selection(0, -1, 2), 1);
        assert_eq!(step_selection(0, 1, 0), 0);
    }
}

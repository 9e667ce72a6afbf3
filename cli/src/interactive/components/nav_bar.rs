//! Navigation bar component
//!
//! Shows one entry per route with its shortcut key, highlights the active
//! one, and prints the current location on the right.

use iocraft::prelude::*;

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Shortcut shown next to the label, e.g. "F1"
    pub key_hint: String,
    pub label: String,
    pub active: bool,
}

/// Properties for the navigation bar
#[derive(Default, Props)]
pub struct NavBarProps {
    pub items: Vec<NavItem>,
    /// Current location as a URL reference
    pub location: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

#[component]
pub fn NavBar(props: &NavBarProps) -> impl Into<AnyElement<'static>> {
    let arrows = format!(
        "{} {}",
        if props.can_go_back { "◀" } else { "◁" },
        if props.can_go_forward { "▶" } else { "▷" }
    );

    element! {
        View(
            key: "nav-bar",
            flex_direction: FlexDirection::Row,
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
            gap: 2,
        ) {
            #(props.items.iter().map(|item| {
                let color = if item.active { Color::Green } else { Color::Grey };
                element! {
                    Text(
                        key: format!("nav-{}", item.label),
                        content: format!("{} {}", item.key_hint, item.label),
                        color: color,
                        weight: if item.active { Weight::Bold } else { Weight::Normal },
                    )
                }
            }).collect::<Vec<_>>())

            View(flex_grow: 1.0)

            Text(content: arrows, color: Color::DarkGrey)
            Text(content: props.location.clone(), color: Color::Cyan)
        }
    }
}

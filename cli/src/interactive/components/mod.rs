//! Shared UI components for the interactive shell

pub mod nav_bar;

pub use nav_bar::{NavBar, NavBarProps, NavItem};

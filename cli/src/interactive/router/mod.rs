//! Router module for managing page navigation
//!
//! The route table and navigation state live in `viewroute_core`; this
//! module connects them to the terminal UI.

pub mod integration;

// Re-export UI integration
pub use integration::{
    Navigator, PageContext, PageRenderer, RouterHandle, UIRouter, UIRouterProps,
};

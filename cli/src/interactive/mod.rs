//! Interactive terminal shell
//!
//! Hosts the chat and dashboard pages behind the application router.

pub mod app;
pub mod components;
pub mod pages;
pub mod router;

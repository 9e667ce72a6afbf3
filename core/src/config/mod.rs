//! Router settings
//!
//! Plain data only. Files and environment variables are read by the CLI.

pub mod types;

pub use types::RouterSettings;

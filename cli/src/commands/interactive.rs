//! Interactive mode command

use crate::interactive::app::run_interactive;
use crate::interactive::router::PageRenderer;
use anyhow::Result;
use tracing::debug;
use viewroute_core::{Router, ViewRegistry};

/// Start interactive mode
pub async fn interactive_command(
    router: Router,
    pages: ViewRegistry<PageRenderer>,
    debug_output: bool,
) -> Result<()> {
    if debug_output {
        debug!("Debug output enabled");
        debug!("Navigation mode: {}", router.mode());
        debug!("Views: {:?}", pages.ids());
    }

    run_interactive(router, pages).await
}

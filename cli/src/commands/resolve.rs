//! Location resolution command

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;
use viewroute_core::{Resolution, Router};

/// Resolve a path or URL and print the matched route.
///
/// Returns `false` when nothing matched.
pub fn resolve_command(router: &Router, target: &str) -> Result<bool> {
    info!("Resolving {}", target);

    let resolution = router
        .resolve_url(target)
        .with_context(|| format!("Cannot resolve '{}'", target))?;

    match resolution {
        Resolution::Matched(m) => {
            println!(
                "{} {} -> {} (view {})",
                "match".green().bold(),
                m.path,
                m.route.name,
                m.route.view
            );
            for (key, value) in m.params.iter() {
                println!("  :{} = {}", key, value);
            }
            if m.is_fallback {
                println!("  {}", "(fallback route)".dimmed());
            }
            Ok(true)
        }
        Resolution::NoMatch { path } => {
            println!("{} {}", "no match".red().bold(), path);
            Ok(false)
        }
    }
}

//! Route table listing command

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tracing::info;
use std::collections::BTreeMap;
use viewroute_core::router::PathPattern;
use viewroute_core::Router;

#[derive(Debug, Serialize)]
struct RouteRow<'a> {
    path: &'a str,
    name: &'a str,
    view: &'a str,
    href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a BTreeMap<String, String>>,
}

fn rows(router: &Router) -> Vec<RouteRow<'_>> {
    router
        .table()
        .routes()
        .map(|route| RouteRow {
            path: &route.path,
            name: route.name.as_str(),
            view: route.view.as_str(),
            // Parameterised routes have no href without values
            href: router
                .table()
                .pattern(route.name.as_str())
                .filter(|pattern| pattern.is_static())
                .map(|pattern: &PathPattern| router.mode().href(pattern.as_str())),
            description: route.description.as_deref(),
            metadata: Some(&route.metadata).filter(|metadata| !metadata.is_empty()),
        })
        .collect()
}

/// Show the route table in priority order
pub fn routes_command(router: &Router, json: bool) -> Result<()> {
    info!("Listing routes");

    let rows = rows(router);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{} {}\n", "Routes".bold(), format!("({})", router.mode()).dimmed());

    for (index, row) in rows.iter().enumerate() {
        println!(
            "  {}  {} {} {} {}",
            format!("F{}", index + 1).yellow(),
            format!("{:<14}", row.path).cyan(),
            format!("{:<12}", row.name).bold(),
            "->".dimmed(),
            row.view
        );
        if let Some(href) = &row.href {
            println!("      href: {}", href);
        }
        if let Some(description) = row.description {
            println!("      {}", description.dimmed());
        }
        for (key, value) in row.metadata.into_iter().flatten() {
            println!("      {}: {}", key.dimmed(), value);
        }
    }

    Ok(())
}

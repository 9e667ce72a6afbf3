//! Named route URL command

use anyhow::{anyhow, Result};
use viewroute_core::{Params, Router};

/// Print the URL for a named route under the configured mode
pub fn href_command(router: &Router, name: &str, raw_params: &[String]) -> Result<()> {
    let params = parse_params(raw_params)?;
    let href = router.href_for(name, &params)?;
    println!("{}", href);
    Ok(())
}

fn parse_params(raw: &[String]) -> Result<Params> {
    raw.iter()
        .map(|param| {
            param
                .split_once('=')
                .ok_or_else(|| anyhow!("Invalid parameter '{}', expected KEY=VALUE", param))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let params = parse_params(&["id=7".to_string(), "tab=a=b".to_string()]).unwrap();
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(params.get("tab"), Some("a=b"));
    }

    #[test]
    fn test_parse_params_rejects_missing_value() {
        let err = parse_params(&["id".to_string()]).unwrap_err();
        assert!(err.to_string().contains("KEY=VALUE"));
    }
}

//! Navigation modes
//!
//! A mode decides how a route location is represented in a URL: as the
//! URL path (history API), after a `#` (hash), or not at all (memory).

use super::path::normalize_path;
use crate::error::NavigationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

const LOCAL_ORIGIN: &str = "http://localhost/";

/// Kind of navigation mode, as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    #[default]
    History,
    Hash,
    Memory,
}

impl ModeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeKind::History => "history",
            ModeKind::Hash => "hash",
            ModeKind::Memory => "memory",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "history" | "web" => Ok(ModeKind::History),
            "hash" => Ok(ModeKind::Hash),
            "memory" => Ok(ModeKind::Memory),
            other => Err(format!(
                "unknown navigation mode '{}' (expected history, hash or memory)",
                other
            )),
        }
    }
}

/// How the router represents the current location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMode {
    /// Location is the URL path below `base`
    History { base: String },
    /// Location lives in the URL fragment of the page at `base`
    Hash { base: String },
    /// Location is kept in memory only
    Memory,
}

impl NavigationMode {
    /// History-API mode rooted at `base`
    pub fn web_history(base: &str) -> Self {
        NavigationMode::History {
            base: normalize_path(base),
        }
    }

    /// Fragment-based mode for the page at `base`
    pub fn web_hash_history(base: &str) -> Self {
        NavigationMode::Hash {
            base: normalize_path(base),
        }
    }

    pub fn memory() -> Self {
        NavigationMode::Memory
    }

    /// Build a mode from its configured kind and base
    pub fn from_kind(kind: ModeKind, base: &str) -> Self {
        match kind {
            ModeKind::History => Self::web_history(base),
            ModeKind::Hash => Self::web_hash_history(base),
            ModeKind::Memory => Self::memory(),
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            NavigationMode::History { .. } => ModeKind::History,
            NavigationMode::Hash { .. } => ModeKind::Hash,
            NavigationMode::Memory => ModeKind::Memory,
        }
    }

    pub fn base(&self) -> &str {
        match self {
            NavigationMode::History { base } | NavigationMode::Hash { base } => base,
            NavigationMode::Memory => "/",
        }
    }

    /// URL reference for a route location
    pub fn href(&self, path: &str) -> String {
        let path = normalize_path(path);
        match self {
            NavigationMode::History { base } if base == "/" => path,
            NavigationMode::History { base } => format!("{}{}", base, path),
            NavigationMode::Hash { base } if base == "/" => format!("/#{}", path),
            NavigationMode::Hash { base } => format!("{}/#{}", base, path),
            NavigationMode::Memory => path,
        }
    }

    /// Extract the route location from an absolute URL or a path
    pub fn location_from_url(&self, input: &str) -> Result<String, NavigationError> {
        // In hash mode a bare path is already the route location
        if matches!(self, NavigationMode::Hash { .. }) && is_bare_path(input) {
            return Ok(normalize_path(input));
        }

        let url = parse_url(input)?;

        match self {
            NavigationMode::History { base } => {
                let path = strip_base(url.path(), base).ok_or_else(|| {
                    NavigationError::OutsideBase {
                        url: input.to_string(),
                        base: base.clone(),
                    }
                })?;
                Ok(normalize_path(path))
            }
            NavigationMode::Hash { base } => {
                if strip_base(url.path(), base).is_none() {
                    return Err(NavigationError::OutsideBase {
                        url: input.to_string(),
                        base: base.clone(),
                    });
                }
                Ok(normalize_path(url.fragment().unwrap_or("")))
            }
            NavigationMode::Memory => Ok(normalize_path(url.path())),
        }
    }
}

impl Default for NavigationMode {
    fn default() -> Self {
        Self::web_history("/")
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationMode::Memory => write!(f, "memory"),
            other => write!(f, "{} (base {})", other.kind(), other.base()),
        }
    }
}

fn parse_url(input: &str) -> Result<Url, NavigationError> {
    let invalid = |e: url::ParseError| NavigationError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    };

    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(LOCAL_ORIGIN)
            .and_then(|origin| origin.join(input))
            .map_err(invalid),
        Err(e) => Err(invalid(e)),
    }
}

/// A relative reference without a fragment, e.g. `/dashboard`
fn is_bare_path(input: &str) -> bool {
    !input.contains('#')
        && matches!(
            Url::parse(input),
            Err(url::ParseError::RelativeUrlWithoutBase)
        )
}

fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if base == "/" {
        return Some(path);
    }
    match path.strip_prefix(base) {
        Some("") => Some("/"),
        Some(rest) if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

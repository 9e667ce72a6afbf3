//! Path normalisation and route pattern matching
//!
//! Patterns are `/`-separated segments. A segment is either static text,
//! a parameter (`:id`) or, in final position only, a catch-all (`:rest*`).

use crate::error::{ConfigurationError, NavigationError};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;

/// Bytes escaped when a parameter value is written into a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

fn decode_segment(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Normalise a location into the canonical form used for matching.
///
/// Query and fragment are dropped, empty segments collapse and the result
/// always starts with `/` and never ends with one (except for the root).
pub fn normalize_path(input: &str) -> String {
    let end = input.find(['?', '#']).unwrap_or(input.len());
    let segments: Vec<&str> = input[..end].split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Parameters captured while matching a path, in pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a parameter (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up a parameter by name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// A single pattern segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

/// Compiled route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse and validate a route pattern
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidPath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid("must not contain a query or fragment"));
        }

        let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            let Some(param) = part.strip_prefix(':') else {
                if part.contains('*') {
                    return Err(invalid("'*' is only allowed after a parameter name"));
                }
                segments.push(Segment::Static(part.to_string()));
                continue;
            };

            let (name, catch_all) = match param.strip_suffix('*') {
                Some(name) => (name, true),
                None => (param, false),
            };

            if name.is_empty() {
                return Err(invalid("empty parameter name"));
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid(&format!("invalid parameter name '{}'", name)));
            }
            if catch_all && index + 1 != parts.len() {
                return Err(invalid("catch-all parameter must be the last segment"));
            }
            let repeated = segments.iter().any(|s| match s {
                Segment::Param(n) | Segment::CatchAll(n) => n == name,
                Segment::Static(_) => false,
            });
            if repeated {
                return Err(invalid(&format!("parameter '{}' appears twice", name)));
            }

            segments.push(if catch_all {
                Segment::CatchAll(name.to_string())
            } else {
                Segment::Param(name.to_string())
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as written in the route descriptor
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the pattern has no parameters
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Static(_)))
    }

    /// Two patterns collide when they accept exactly the same paths,
    /// whatever their parameters are called.
    pub fn same_shape(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Static(a), Segment::Static(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    (Segment::CatchAll(_), Segment::CatchAll(_)) => true,
                    _ => false,
                })
    }

    /// Match an already-normalised path, returning captured parameters.
    /// Captured values are percent-decoded.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = Params::new();
        let mut index = 0;

        for segment in &self.segments {
            match segment {
                Segment::Static(expected) => {
                    if parts.get(index) != Some(&expected.as_str()) {
                        return None;
                    }
                    index += 1;
                }
                Segment::Param(name) => {
                    let value = parts.get(index)?;
                    params.insert(name.clone(), decode_segment(value));
                    index += 1;
                }
                Segment::CatchAll(name) => {
                    let rest: Vec<String> =
                        parts[index..].iter().map(|part| decode_segment(part)).collect();
                    params.insert(name.clone(), rest.join("/"));
                    return Some(params);
                }
            }
        }

        (index == parts.len()).then_some(params)
    }

    /// Build a concrete path by substituting parameters.
    ///
    /// Values are percent-encoded so the result matches this pattern again
    /// with the same values. A `:param` value must not be empty.
    pub fn build(&self, route: &str, params: &Params) -> Result<String, NavigationError> {
        let lookup = |name: &String| {
            params.get(name).ok_or_else(|| NavigationError::MissingParam {
                route: route.to_string(),
                param: name.clone(),
            })
        };
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Static(text) => {
                    out.push('/');
                    out.push_str(text);
                }
                Segment::Param(name) => {
                    let value = lookup(name)?;
                    if value.is_empty() {
                        return Err(NavigationError::EmptyParam {
                            route: route.to_string(),
                            param: name.clone(),
                        });
                    }
                    out.push('/');
                    out.push_str(&encode_segment(value));
                }
                // Slashes in a catch-all value separate segments
                Segment::CatchAll(name) => {
                    for part in lookup(name)?.split('/').filter(|p| !p.is_empty()) {
                        out.push('/');
                        out.push_str(&encode_segment(part));
                    }
                }
            }
        }

        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

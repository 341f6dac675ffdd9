//! Path pattern matching module
//!
//! Parses route patterns such as `/accounts/{accountId}` and matches request
//! paths against them, extracting the single placeholder value if present.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::error::{Error, Result};

/// Percent-decode a request path before matching.
///
/// An encoded `/` becomes a real separator, so `/a%2Fb` has two segments.
/// Fails when the decoded bytes are not valid UTF-8.
pub fn decode_path(raw: &str) -> Result<Cow<'_, str>> {
    percent_decode_str(raw)
        .decode_utf8()
        .map_err(|source| Error::InvalidPath {
            path: raw.to_string(),
            source,
        })
}

/// One `/`-separated piece of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled route pattern with at most one named placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Result of a successful match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch<'p> {
    /// Placeholder name and the path segment it captured
    pub param: Option<(&'p str, &'p str)>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(Error::invalid_route(pattern, "pattern must start with '/'"));
        };

        let mut segments = Vec::new();
        let mut params = 0;

        for piece in rest.split('/') {
            if let Some(inner) = piece.strip_prefix('{') {
                let Some(name) = inner.strip_suffix('}') else {
                    return Err(Error::invalid_route(pattern, "unbalanced '{' in segment"));
                };
                if name.is_empty() || name.contains(['{', '}']) {
                    return Err(Error::invalid_route(pattern, "invalid placeholder name"));
                }
                params += 1;
                if params > 1 {
                    return Err(Error::invalid_route(
                        pattern,
                        "only one placeholder per route is supported",
                    ));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if piece.contains(['{', '}']) {
                return Err(Error::invalid_route(pattern, "placeholder must span a whole segment"));
            } else {
                segments.push(Segment::Literal(piece.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Name of the placeholder, if the pattern has one
    pub fn param_name(&self) -> Option<&str> {
        self.segments.iter().find_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a request path against this pattern
    pub fn matches<'p>(&'p self, path: &'p str) -> Option<PathMatch<'p>> {
        let rest = path.strip_prefix('/')?;
        let pieces: Vec<&str> = rest.split('/').collect();
        if pieces.len() != self.segments.len() {
            return None;
        }

        let mut param = None;
        for (segment, piece) in self.segments.iter().zip(pieces) {
            match segment {
                Segment::Literal(lit) if lit == piece => {}
                Segment::Literal(_) => return None,
                // A placeholder never captures an empty segment
                Segment::Param(_) if piece.is_empty() => return None,
                Segment::Param(name) => param = Some((name.as_str(), piece)),
            }
        }

        Some(PathMatch { param })
    }
}

/// Parsed path templates and anchored segment matching
///
/// A template is a `/`-separated path whose segments are literals, named
/// parameters (`:id`) or one trailing greedy parameter (`:rest*`, `:...slug`).
/// Matching is done on non-empty segments, so a trailing slash and repeated
/// slashes in the incoming path are tolerated.
use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::params::{ParamValue, UrlParams};

use super::pattern::{classify_segment, Segment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses and validates a template
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_router::PathTemplate;
    ///
    /// let template = PathTemplate::parse("/demo/:id").unwrap();
    /// assert_eq!(template.param_names().collect::<Vec<_>>(), vec!["id"]);
    ///
    /// assert!(PathTemplate::parse("/docs/:rest*/edit").is_err());
    /// assert!(PathTemplate::parse("login").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidTemplate {
            template: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("template must start with '/'"));
        }

        let segments: Vec<Segment> = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(classify_segment)
            .collect();

        if let Some(pos) = segments.iter().position(Segment::is_greedy) {
            if pos + 1 != segments.len() {
                return Err(invalid("greedy segment must be last"));
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for name in segments.iter().filter_map(Segment::param_name) {
            if seen.contains(&name) {
                return Err(invalid(&format!("parameter `{}` appears more than once", name)));
            }
            seen.push(name);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    pub fn has_params(&self) -> bool {
        self.segments.iter().any(|s| s.param_name().is_some())
    }

    /// Matches a pathname against this template, optionally under a locale prefix
    ///
    /// `prefix` is a literal path such as `/de` that must precede the
    /// template's own segments. Returns the extracted parameters on a full
    /// match: named values are percent-decoded, greedy values are kept as
    /// they appear in the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_router::PathTemplate;
    ///
    /// let template = PathTemplate::parse("/d/:id").unwrap();
    /// let params = template.match_path("/de/d/23/", Some("/de"), true).unwrap();
    /// assert_eq!(params["id"].to_string(), "23");
    ///
    /// assert!(template.match_path("/d/23", Some("/de"), true).is_none());
    /// ```
    pub fn match_path(
        &self,
        pathname: &str,
        prefix: Option<&str>,
        case_insensitive: bool,
    ) -> Option<UrlParams> {
        let prefix_segments: Vec<Segment> = prefix
            .map(|p| {
                p.split('/')
                    .filter(|s| !s.is_empty())
                    .map(|s| Segment::Static(s.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        let pattern: Vec<&Segment> = prefix_segments.iter().chain(self.segments.iter()).collect();
        let path: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        match_segments(&pattern, &path, UrlParams::new(), case_insensitive)
    }
}

/// Recursive segment matcher
fn match_segments(
    pattern: &[&Segment],
    path: &[&str],
    mut params: UrlParams,
    case_insensitive: bool,
) -> Option<UrlParams> {
    let Some((segment, rest_pattern)) = pattern.split_first() else {
        return path.is_empty().then_some(params);
    };

    match segment {
        Segment::Wildcard(name) | Segment::CatchAll(name) => {
            if path.is_empty() {
                return None;
            }
            params.insert(name.clone(), ParamValue::Text(path.join("/")));
            Some(params)
        }
        Segment::Param(name) => {
            let (value, rest_path) = path.split_first()?;
            params.insert(name.clone(), ParamValue::Text(decode_segment(value)));
            match_segments(rest_pattern, rest_path, params, case_insensitive)
        }
        Segment::Static(literal) => {
            let (value, rest_path) = path.split_first()?;
            let decoded = decode_segment(value);
            let matches = if case_insensitive {
                literal.eq_ignore_ascii_case(&decoded)
            } else {
                *literal == decoded
            };
            if !matches {
                return None;
            }
            match_segments(rest_pattern, rest_path, params, case_insensitive)
        }
    }
}

/// Percent-decodes a path segment, keeping it raw when it is not valid UTF-8
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for PathTemplate {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

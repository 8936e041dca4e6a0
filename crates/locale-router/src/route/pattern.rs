/// Segment classification for path templates
///
/// Pure parsing of a single `/`-separated template segment into a typed
/// segment. Same input, same output, no side effects.

/// One segment of a path template
///
/// # Examples
///
/// ```
/// use locale_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("settings"), Segment::Static("settings".into()));
/// assert_eq!(classify_segment(":id"), Segment::Param("id".into()));
/// assert_eq!(classify_segment(":rest*"), Segment::Wildcard("rest".into()));
/// assert_eq!(classify_segment(":...slug"), Segment::CatchAll("slug".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text
    Static(String),
    /// Named segment: `:name`
    Param(String),
    /// Greedy segment: `:name*`
    Wildcard(String),
    /// Greedy segment: `:...name`, or a bare `*` named `*`
    CatchAll(String),
}

impl Segment {
    /// Parameter name for dynamic segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Param(name) | Segment::Wildcard(name) | Segment::CatchAll(name) => {
                Some(name)
            }
        }
    }

    /// Whether the segment consumes the rest of the path
    pub fn is_greedy(&self) -> bool {
        matches!(self, Segment::Wildcard(_) | Segment::CatchAll(_))
    }
}

/// Classifies a template segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Bare splat**: `*`
/// 2. **Catch-all**: `:...name`
/// 3. **Wildcard**: `:name*`
/// 4. **Named**: `:name`
/// 5. **Static**: anything else, including a lone `:`
pub fn classify_segment(segment: &str) -> Segment {
    if segment == "*" {
        return Segment::CatchAll("*".to_string());
    }

    match segment.strip_prefix(':') {
        Some(inner) => {
            if let Some(name) = inner.strip_prefix("...").filter(|n| !n.is_empty()) {
                return Segment::CatchAll(name.to_string());
            }

            if let Some(name) = inner.strip_suffix('*').filter(|n| !n.is_empty()) {
                return Segment::Wildcard(name.to_string());
            }

            if inner.is_empty() {
                Segment::Static(segment.to_string())
            } else {
                Segment::Param(inner.to_string())
            }
        }
        None => Segment::Static(segment.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(classify_segment("login"), Segment::Static("login".to_string()));
        assert_eq!(classify_segment(":"), Segment::Static(":".to_string()));
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
    }

    #[test]
    fn test_classify_greedy() {
        assert_eq!(classify_segment(":path*"), Segment::Wildcard("path".to_string()));
        assert_eq!(classify_segment(":...slug"), Segment::CatchAll("slug".to_string()));
        assert_eq!(classify_segment("*"), Segment::CatchAll("*".to_string()));
        assert!(classify_segment(":path*").is_greedy());
        assert!(!classify_segment(":id").is_greedy());
    }

    #[test]
    fn test_param_name() {
        assert_eq!(classify_segment(":id").param_name(), Some("id"));
        assert_eq!(classify_segment("about").param_name(), None);
    }
}

/// Browser locations and locale-prefix normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
use std::borrow::Cow;
use std::fmt;

use crate::locale::Locale;
use crate::policy::LocalizationPolicy;

/// A URL split the way a browser reports it
///
/// `search` keeps its leading `?` and `hash` its leading `#`; both are empty
/// when absent or when nothing follows the delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Location {
    pub fn new(
        pathname: impl Into<String>,
        search: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
            hash: hash.into(),
        }
    }

    /// Splits an href into pathname, search and hash
    ///
    /// A scheme and authority (`https://host:8080`) are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_router::Location;
    ///
    /// let location = Location::parse("https://example.com/de/d/23?q=1#top");
    /// assert_eq!(location.pathname, "/de/d/23");
    /// assert_eq!(location.search, "?q=1");
    /// assert_eq!(location.hash, "#top");
    ///
    /// let location = Location::parse("?");
    /// assert_eq!(location.pathname, "/");
    /// assert_eq!(location.search, "");
    /// ```
    pub fn parse(href: &str) -> Self {
        let rest = strip_origin(href);

        let (rest, hash) = match rest.split_once('#') {
            Some((before, "")) => (before, String::new()),
            Some((before, fragment)) => (before, format!("#{}", fragment)),
            None => (rest, String::new()),
        };

        let (pathname, search) = match rest.split_once('?') {
            Some((before, "")) => (before, String::new()),
            Some((before, query)) => (before, format!("?{}", query)),
            None => (rest, String::new()),
        };

        let pathname = if pathname.is_empty() {
            "/".to_string()
        } else {
            pathname.to_string()
        };

        Self {
            pathname,
            search,
            hash,
        }
    }

    /// Reassembles the href
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}

impl From<&str> for Location {
    fn from(href: &str) -> Self {
        Self::parse(href)
    }
}

/// Drops `scheme://authority` from an absolute URL
fn strip_origin(href: &str) -> &str {
    let Some(scheme_end) = href.find("://") else {
        return href;
    };

    // "://" inside a path or query is not a scheme separator
    if href[..scheme_end].contains(['/', '?', '#']) {
        return href;
    }

    let after_scheme = &href[scheme_end + 3..];
    match after_scheme.find(['/', '?', '#']) {
        Some(idx) => &after_scheme[idx..],
        None => "",
    }
}

/// Normalizes a pathname before matching it under `locale`
///
/// 1. With the locale in the path, a bare `/{locale}` becomes `/{locale}/`.
/// 2. When the default locale is served without a prefix, a leading
///    `/{locale}/` on a default-locale path is reduced to `/`.
///
/// Returns `Cow::Borrowed` when nothing changes.
///
/// # Examples
///
/// ```
/// use locale_router::{normalize_locale_path, Locale, LocalizationPolicy};
///
/// let en = Locale::new("en");
/// let policy = LocalizationPolicy::new(true, false);
///
/// assert_eq!(normalize_locale_path("/en", &en, &en, policy), "/");
/// assert_eq!(normalize_locale_path("/en/login", &en, &en, policy), "/login");
/// assert_eq!(normalize_locale_path("/login", &en, &en, policy), "/login");
/// ```
pub fn normalize_locale_path<'a>(
    pathname: &'a str,
    locale: &Locale,
    default_locale: &Locale,
    policy: LocalizationPolicy,
) -> Cow<'a, str> {
    if !policy.use_locale_in_path {
        return Cow::Borrowed(pathname);
    }

    let prefix = locale.prefix();
    let path: Cow<'a, str> = if pathname == prefix {
        Cow::Owned(format!("{}/", prefix))
    } else {
        Cow::Borrowed(pathname)
    };

    if policy.use_prefix_for_default_locale || locale != default_locale {
        return path;
    }

    let locale_root = format!("{}/", prefix);
    let stripped = path
        .strip_prefix(locale_root.as_str())
        .map(|rest| format!("/{}", rest));
    match stripped {
        Some(rest) => Cow::Owned(rest),
        None => path,
    }
}

/// Whether `pathname` carries the `/{locale}` prefix
pub fn has_locale_prefix(pathname: &str, locale: &Locale) -> bool {
    let prefix = locale.prefix();
    pathname == prefix
        || pathname
            .strip_prefix(prefix.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_relative() {
        assert_eq!(
            Location::parse("/settings?q=test#section"),
            Location::new("/settings", "?q=test", "#section")
        );
        assert_eq!(Location::parse("/login"), Location::new("/login", "", ""));
    }

    #[test]
    fn test_parse_empty_delimiters() {
        assert_eq!(Location::parse("/a?#"), Location::new("/a", "", ""));
        assert_eq!(Location::parse(""), Location::new("/", "", ""));
    }

    #[test]
    fn test_parse_hash_keeps_question_mark() {
        assert_eq!(
            Location::parse("/a#frag?x=1"),
            Location::new("/a", "", "#frag?x=1")
        );
    }

    #[test]
    fn test_parse_absolute() {
        assert_eq!(
            Location::parse("http://localhost:3000"),
            Location::new("/", "", "")
        );
        assert_eq!(
            Location::parse("https://example.com?x=1"),
            Location::new("/", "?x=1", "")
        );
    }

    #[test]
    fn test_href_round_trip() {
        let href = "/de/d/23?a=1&b=2#top";
        assert_eq!(Location::parse(href).href(), href);
    }

    #[test]
    fn test_normalize_non_default_locale() {
        let en = Locale::new("en");
        let de = Locale::new("de");
        let policy = LocalizationPolicy::new(true, false);

        assert_eq!(normalize_locale_path("/de", &de, &en, policy), "/de/");
        assert_eq!(normalize_locale_path("/de/anmelden", &de, &en, policy), "/de/anmelden");
    }

    #[test]
    fn test_normalize_without_locale_in_path() {
        let en = Locale::new("en");
        let policy = LocalizationPolicy::default();
        assert!(matches!(
            normalize_locale_path("/en/login", &en, &en, policy),
            Cow::Borrowed("/en/login")
        ));
    }

    #[test]
    fn test_normalize_prefixed_default_is_kept() {
        let en = Locale::new("en");
        let policy = LocalizationPolicy::new(true, true);
        assert_eq!(normalize_locale_path("/en", &en, &en, policy), "/en/");
        assert_eq!(normalize_locale_path("/en/login", &en, &en, policy), "/en/login");
    }

    #[test]
    fn test_has_locale_prefix() {
        let en = Locale::new("en");
        assert!(has_locale_prefix("/en", &en));
        assert!(has_locale_prefix("/en/settings", &en));
        assert!(!has_locale_prefix("/english", &en));
        assert!(!has_locale_prefix("/settings", &en));
    }
}

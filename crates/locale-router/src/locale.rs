/// Locale codes and the closed set of supported locales
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Opaque locale code such as `"en"` or `"de"`
///
/// # Examples
///
/// ```
/// use locale_router::Locale;
///
/// let de = Locale::new("de");
/// assert_eq!(de.as_str(), "de");
/// assert_eq!(de.prefix(), "/de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path prefix for this locale (`/en`)
    pub fn prefix(&self) -> String {
        format!("/{}", self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Closed set of supported locales with one designated default
///
/// The default locale is always a member. Supported locales keep their
/// declaration order and are deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    default: Locale,
    supported: Vec<Locale>,
}

impl LocaleSet {
    /// Builds a locale set, rejecting a default that is not supported
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_router::{Locale, LocaleSet};
    ///
    /// let locales = LocaleSet::new("en", ["en", "de"]).unwrap();
    /// assert!(locales.is_default(&Locale::new("en")));
    /// assert!(LocaleSet::new("fr", ["en", "de"]).is_err());
    /// ```
    pub fn new<D, I, L>(default: D, supported: I) -> Result<Self, RouteError>
    where
        D: Into<Locale>,
        I: IntoIterator<Item = L>,
        L: Into<Locale>,
    {
        let default = default.into();
        let supported = supported
            .into_iter()
            .map(Into::into)
            .fold(Vec::<Locale>::new(), |mut acc, locale| {
                if !acc.contains(&locale) {
                    acc.push(locale);
                }
                acc
            });

        if !supported.contains(&default) {
            return Err(RouteError::MissingDefaultLocale(default));
        }

        Ok(Self { default, supported })
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    pub fn supported(&self) -> &[Locale] {
        &self.supported
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.supported.contains(locale)
    }

    pub fn is_default(&self, locale: &Locale) -> bool {
        &self.default == locale
    }

    /// Resolves a locale code against the set
    pub fn parse(&self, code: &str) -> Result<Locale, RouteError> {
        self.supported
            .iter()
            .find(|locale| locale.as_str() == code)
            .cloned()
            .ok_or_else(|| RouteError::UnknownLocale(Locale::new(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locale_prefix_and_display() {
        let locale = Locale::new("de");
        assert_eq!(locale.prefix(), "/de");
        assert_eq!(locale.to_string(), "de");
        assert!(locale == "de");
    }

    #[test]
    fn test_locale_set_dedups_in_order() {
        let locales = LocaleSet::new("en", ["en", "de", "en", "fr"]).unwrap();
        assert_eq!(
            locales.supported(),
            &[Locale::new("en"), Locale::new("de"), Locale::new("fr")]
        );
    }

    #[test]
    fn test_locale_set_requires_default() {
        let err = LocaleSet::new("fr", ["en", "de"]).unwrap_err();
        assert_eq!(err, RouteError::MissingDefaultLocale(Locale::new("fr")));
    }

    #[test]
    fn test_locale_set_empty_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(LocaleSet::new("en", empty).is_err());
    }

    #[test]
    fn test_parse_locale() {
        let locales = LocaleSet::new("en", ["en", "de"]).unwrap();
        assert_eq!(locales.parse("de").unwrap(), Locale::new("de"));
        assert_eq!(
            locales.parse("it").unwrap_err(),
            RouteError::UnknownLocale(Locale::new("it"))
        );
    }
}

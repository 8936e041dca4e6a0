/// Localization policy: whether and how the locale appears in URLs
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationPolicy {
    /// Prefix localized paths with `/{locale}`
    pub use_locale_in_path: bool,
    /// Also prefix paths of the default locale
    pub use_prefix_for_default_locale: bool,
}

impl LocalizationPolicy {
    /// Policy used for unprefixed default-locale route registration
    pub const NO_LOCALE_IN_PATH: Self = Self {
        use_locale_in_path: false,
        use_prefix_for_default_locale: false,
    };

    pub const fn new(use_locale_in_path: bool, use_prefix_for_default_locale: bool) -> Self {
        Self {
            use_locale_in_path,
            use_prefix_for_default_locale,
        }
    }

    /// Whether paths for `locale` carry the `/{locale}` prefix
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_router::{Locale, LocalizationPolicy};
    ///
    /// let en = Locale::new("en");
    /// let de = Locale::new("de");
    /// let policy = LocalizationPolicy::new(true, false);
    ///
    /// assert!(!policy.requires_prefix(&en, &en));
    /// assert!(policy.requires_prefix(&de, &en));
    /// ```
    pub fn requires_prefix(&self, locale: &Locale, default_locale: &Locale) -> bool {
        self.use_locale_in_path
            && (self.use_prefix_for_default_locale || locale != default_locale)
    }

    /// Whether the default locale's paths carry a prefix
    pub fn prefixes_default_locale(&self) -> bool {
        self.use_locale_in_path && self.use_prefix_for_default_locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, "en", false)]
    #[case(false, false, "de", false)]
    #[case(false, true, "en", false)]
    #[case(false, true, "de", false)]
    #[case(true, false, "en", false)]
    #[case(true, false, "de", true)]
    #[case(true, true, "en", true)]
    #[case(true, true, "de", true)]
    fn test_requires_prefix(
        #[case] use_locale_in_path: bool,
        #[case] use_prefix_for_default_locale: bool,
        #[case] locale: &str,
        #[case] expected: bool,
    ) {
        let policy = LocalizationPolicy::new(use_locale_in_path, use_prefix_for_default_locale);
        assert_eq!(
            policy.requires_prefix(&Locale::new(locale), &Locale::new("en")),
            expected
        );
    }

    #[test]
    fn test_default_policy_is_unprefixed() {
        assert_eq!(LocalizationPolicy::default(), LocalizationPolicy::NO_LOCALE_IN_PATH);
    }
}

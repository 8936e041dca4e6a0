/// Locale-change synchronization and default-locale path normalization
///
/// Both processes own a small piece of state that lives as long as the
/// session that drives them, and both issue replace navigations only.
use crate::context::RouterContext;
use crate::locale::Locale;
use crate::navigation::{NavigateOptions, Navigator};
use crate::params::RouteParams;
use crate::path::{has_locale_prefix, Location};
use crate::query::search_params_to_record;

/// Rewrites the current URL when the active locale changes
///
/// The first observation only records the locale. Every later observation
/// with a different locale resolves the current location under the previous
/// locale and replaces it with the same route localized for the new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSync {
    previous: Option<Locale>,
}

impl LocaleSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> Option<&Locale> {
        self.previous.as_ref()
    }

    /// Returns the path navigated to, if any
    pub fn observe<N: Navigator + ?Sized>(
        &mut self,
        ctx: &RouterContext,
        locale: &Locale,
        location: &Location,
        navigator: &mut N,
    ) -> Option<String> {
        let previous = self.previous.replace(locale.clone())?;
        if previous == *locale {
            return None;
        }

        let Some(found) = ctx.find(&previous, location) else {
            tracing::debug!(
                from = %previous,
                to = %locale,
                pathname = %location.pathname,
                "locale changed but current path matches no route"
            );
            return None;
        };

        let path = match ctx.localize(locale, &found.route_id, Some(&found.params)) {
            Ok(path) => path,
            Err(err) => {
                tracing::error!(error = %err, "cannot localize route after locale change");
                return None;
            }
        };

        tracing::debug!(from = %previous, to = %locale, %path, "syncing route with locale");
        navigator.navigate(&path, NavigateOptions::replace());
        Some(path)
    }

    /// Forgets the previous locale, as on a full remount
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// Brings the default locale's prefix in line with the policy, once
///
/// Acts only while the default locale is active. The first location that
/// matches a default-locale route settles the normalizer; if its prefixing
/// disagrees with the policy the location is replaced with the
/// policy-correct path. Unmatched locations leave it unsettled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultLocaleNormalizer {
    settled: bool,
}

impl DefaultLocaleNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Returns the path navigated to, if any
    pub fn observe<N: Navigator + ?Sized>(
        &mut self,
        ctx: &RouterContext,
        locale: &Locale,
        location: &Location,
        navigator: &mut N,
    ) -> Option<String> {
        if self.settled || !ctx.locales().is_default(locale) {
            return None;
        }

        let default_locale = ctx.default_locale();
        let has_locale_in_path = has_locale_prefix(&location.pathname, default_locale);
        let prefix = has_locale_in_path.then(|| default_locale.prefix());

        let (route_id, url_params) = ctx.table().default_routes().find_map(|(id, template)| {
            template
                .match_path(&location.pathname, prefix.as_deref(), ctx.is_case_insensitive())
                .map(|params| (id, params))
        })?;

        self.settled = true;

        if ctx.policy().prefixes_default_locale() == has_locale_in_path {
            return None;
        }

        let params = RouteParams {
            url_params,
            query: search_params_to_record(&location.search),
            hash: location.hash.clone(),
        };
        let path = match ctx.localize(default_locale, route_id, Some(&params)) {
            Ok(path) => path,
            Err(err) => {
                tracing::error!(error = %err, "cannot normalize default locale path");
                return None;
            }
        };

        tracing::debug!(from = %location.pathname, %path, "normalizing default locale prefix");
        navigator.navigate(&path, NavigateOptions::replace());
        Some(path)
    }

    pub fn reset(&mut self) {
        self.settled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::HistoryNavigator;
    use crate::policy::LocalizationPolicy;
    use crate::routes::app_routes;
    use pretty_assertions::assert_eq;

    fn ctx(use_locale_in_path: bool, use_prefix_for_default_locale: bool) -> RouterContext {
        RouterContext::new(
            LocalizationPolicy::new(use_locale_in_path, use_prefix_for_default_locale),
            app_routes().clone(),
        )
    }

    #[test]
    fn test_sync_noop_on_mount() {
        let ctx = ctx(true, false);
        let mut history = HistoryNavigator::new("/de/anmelden");
        let mut sync = LocaleSync::new();

        let location = history.current().clone();
        assert_eq!(sync.observe(&ctx, &Locale::new("de"), &location, &mut history), None);
        assert_eq!(sync.previous(), Some(&Locale::new("de")));
        assert!(history.requests().is_empty());
    }

    #[test]
    fn test_sync_replaces_on_change() {
        let ctx = ctx(true, false);
        let mut history = HistoryNavigator::new("/settings?q=test#section");
        let mut sync = LocaleSync::new();

        let location = history.current().clone();
        sync.observe(&ctx, &Locale::new("en"), &location, &mut history);
        let path = sync.observe(&ctx, &Locale::new("de"), &location, &mut history);

        assert_eq!(path.as_deref(), Some("/de/einstellungen?q=test#section"));
        assert_eq!(history.len(), 1);
        assert!(history.requests()[0].options.replace);
    }

    #[test]
    fn test_sync_miss_does_not_navigate() {
        let ctx = ctx(true, false);
        let mut history = HistoryNavigator::new("/unknown");
        let mut sync = LocaleSync::new();

        let location = history.current().clone();
        sync.observe(&ctx, &Locale::new("en"), &location, &mut history);
        assert_eq!(sync.observe(&ctx, &Locale::new("de"), &location, &mut history), None);
        assert!(history.requests().is_empty());
    }

    #[test]
    fn test_normalizer_ignores_non_default_locale() {
        let ctx = ctx(true, true);
        let mut history = HistoryNavigator::new("/anmelden");
        let mut normalizer = DefaultLocaleNormalizer::new();

        let location = history.current().clone();
        assert_eq!(normalizer.observe(&ctx, &Locale::new("de"), &location, &mut history), None);
        assert!(!normalizer.is_settled());
    }

    #[test]
    fn test_normalizer_settles_once() {
        let ctx = ctx(true, true);
        let mut history = HistoryNavigator::new("/settings");
        let mut normalizer = DefaultLocaleNormalizer::new();
        let en = Locale::new("en");

        let location = history.current().clone();
        assert_eq!(
            normalizer.observe(&ctx, &en, &location, &mut history).as_deref(),
            Some("/en/settings")
        );

        let location = Location::parse("/login");
        assert_eq!(normalizer.observe(&ctx, &en, &location, &mut history), None);
        assert_eq!(history.requests().len(), 1);
    }
}

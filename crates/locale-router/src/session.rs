/// Router session: the stateful side of routing for one mounted application
///
/// A session owns the navigator, the current locale and location, the
/// locale-change and default-locale cells, the matched-route memo and any
/// route guards. Hosts call [`RouterSession::update`] whenever the active
/// locale or the location changes.
use std::fmt;

use crate::context::RouterContext;
use crate::error::RouteError;
use crate::finder::{MatchResult, RouteMatch};
use crate::locale::Locale;
use crate::navigation::{LinkTarget, NavigateOptions, Navigator};
use crate::params::RouteParams;
use crate::path::Location;
use crate::route::RouteId;
use crate::sync::{DefaultLocaleNormalizer, LocaleSync};

/// Memoized match for the current (locale, location)
///
/// Recomputes only when either input differs from the last call.
#[derive(Debug, Clone, Default)]
pub struct MatchedRoute {
    key: Option<(Locale, Location)>,
    value: MatchResult,
}

impl MatchedRoute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, ctx: &RouterContext, locale: &Locale, location: &Location) -> &MatchResult {
        let stale = self
            .key
            .as_ref()
            .map_or(true, |(l, loc)| l != locale || loc != location);

        if stale {
            self.value = ctx.find(locale, location);
            self.key = Some((locale.clone(), location.clone()));
        }

        &self.value
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.value = None;
    }
}

/// Redirect predicate: returns the route to send the user to, if any
pub type RouteGuard = Box<dyn Fn(&RouteMatch) -> Option<RouteId> + Send + Sync>;

pub struct RouterSession<N: Navigator> {
    ctx: RouterContext,
    navigator: N,
    locale: Locale,
    location: Location,
    sync: LocaleSync,
    normalizer: DefaultLocaleNormalizer,
    matched: MatchedRoute,
    guards: Vec<RouteGuard>,
}

impl<N: Navigator> RouterSession<N> {
    /// Creates a session starting at the default locale and `/`
    pub fn new(ctx: RouterContext, navigator: N) -> Self {
        let locale = ctx.default_locale().clone();
        Self {
            ctx,
            navigator,
            locale,
            location: Location::parse("/"),
            sync: LocaleSync::new(),
            normalizer: DefaultLocaleNormalizer::new(),
            matched: MatchedRoute::new(),
            guards: Vec::new(),
        }
    }

    /// Adds a route guard, evaluated in insertion order
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_router::{routes, HistoryNavigator, Locale, Location, LocalizationPolicy, RouteId, RouterContext, RouterSession};
    ///
    /// let ctx = RouterContext::new(LocalizationPolicy::default(), routes::app_routes().clone());
    /// let logged_in = true;
    /// let mut session = RouterSession::new(ctx, HistoryNavigator::new("/login"))
    ///     .with_guard(move |m| (logged_in && m.route_id == "LOGIN").then(|| RouteId::new("INDEX")));
    ///
    /// let path = session.update(Locale::new("en"), Location::parse("/login"));
    /// assert_eq!(path.as_deref(), Some("/"));
    /// ```
    pub fn with_guard<F>(mut self, guard: F) -> Self
    where
        F: Fn(&RouteMatch) -> Option<RouteId> + Send + Sync + 'static,
    {
        self.guards.push(Box::new(guard));
        self
    }

    pub fn context(&self) -> &RouterContext {
        &self.ctx
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Feeds the current locale and location through the session
    ///
    /// Runs the locale-change synchronizer, then the default-locale
    /// normalizer, then the route guards when neither navigated. Returns
    /// the last path navigated to.
    pub fn update(&mut self, locale: Locale, location: Location) -> Option<String> {
        self.locale = locale;
        self.location = location;

        let synced = self
            .sync
            .observe(&self.ctx, &self.locale, &self.location, &mut self.navigator);
        if let Some(path) = &synced {
            self.location = Location::parse(path);
        }

        let normalized =
            self.normalizer
                .observe(&self.ctx, &self.locale, &self.location, &mut self.navigator);
        if let Some(path) = &normalized {
            self.location = Location::parse(path);
        }

        normalized.or(synced).or_else(|| self.apply_guards())
    }

    fn apply_guards(&mut self) -> Option<String> {
        let redirect = {
            let current = self
                .matched
                .get(&self.ctx, &self.locale, &self.location)
                .as_ref()?;
            self.guards
                .iter()
                .find_map(|guard| guard(current))
                .filter(|target| *target != current.route_id)?
        };

        tracing::debug!(to = %redirect, "route guard redirect");
        match self.navigate_to(&redirect, None, NavigateOptions::replace()) {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::error!(error = %err, "route guard redirect failed");
                None
            }
        }
    }

    /// Memoized match for the current locale and location
    pub fn current_match(&mut self) -> &MatchResult {
        self.matched.get(&self.ctx, &self.locale, &self.location)
    }

    /// Localizes a route for the active locale and navigates to it
    pub fn navigate_to(
        &mut self,
        route_id: &RouteId,
        params: Option<&RouteParams>,
        options: NavigateOptions,
    ) -> Result<String, RouteError> {
        let path = self.ctx.localize(&self.locale, route_id, params)?;
        self.navigator.navigate(&path, options);
        self.location = Location::parse(&path);
        Ok(path)
    }

    /// Navigates to a link target, localizing route targets
    pub fn follow(&mut self, target: &LinkTarget, options: NavigateOptions) -> Result<String, RouteError> {
        let path = self.ctx.href(&self.locale, target)?;
        self.navigator.navigate(&path, options);
        self.location = Location::parse(&path);
        Ok(path)
    }

    /// Clears all per-mount state
    pub fn reset(&mut self) {
        self.sync.reset();
        self.normalizer.reset();
        self.matched.invalidate();
    }
}

impl<N: Navigator + fmt::Debug> fmt::Debug for RouterSession<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterSession")
            .field("navigator", &self.navigator)
            .field("locale", &self.locale)
            .field("location", &self.location)
            .field("sync", &self.sync)
            .field("normalizer", &self.normalizer)
            .field("guards", &self.guards.len())
            .finish()
    }
}

/// Router context: the policy and route table shared by every routing call
use std::sync::Arc;

use crate::error::RouteError;
use crate::finder::{find_route_with_options, MatchResult};
use crate::locale::{Locale, LocaleSet};
use crate::localizer::localize_route_path;
use crate::navigation::LinkTarget;
use crate::params::RouteParams;
use crate::path::Location;
use crate::policy::LocalizationPolicy;
use crate::registry::{route_patterns, RoutePattern};
use crate::route::RouteId;
use crate::table::RouteTable;

/// Explicit routing dependencies, cheap to clone and safe to share across threads
///
/// # Examples
///
/// ```
/// use locale_router::{routes, Locale, Location, LocalizationPolicy, RouterContext};
///
/// let ctx = RouterContext::new(LocalizationPolicy::new(true, false), routes::app_routes().clone());
/// let de = Locale::new("de");
///
/// let path = ctx.localize(&de, &"LOGIN".into(), None).unwrap();
/// assert_eq!(path, "/de/anmelden");
///
/// let found = ctx.find(&de, &Location::parse(&path)).unwrap();
/// assert_eq!(found.route_id.as_str(), "LOGIN");
/// ```
#[derive(Debug, Clone)]
pub struct RouterContext {
    policy: LocalizationPolicy,
    table: Arc<RouteTable>,
    case_insensitive: bool,
}

impl RouterContext {
    pub fn new(policy: LocalizationPolicy, table: impl Into<Arc<RouteTable>>) -> Self {
        Self {
            policy,
            table: table.into(),
            case_insensitive: true,
        }
    }

    /// Compare static path segments case-sensitively when `false`
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn policy(&self) -> LocalizationPolicy {
        self.policy
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn locales(&self) -> &LocaleSet {
        self.table.locales()
    }

    pub fn default_locale(&self) -> &Locale {
        self.table.default_locale()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn localize(
        &self,
        locale: &Locale,
        route_id: &RouteId,
        params: Option<&RouteParams>,
    ) -> Result<String, RouteError> {
        localize_route_path(&self.table, locale, route_id, params, self.policy)
    }

    pub fn find(&self, locale: &Locale, location: &Location) -> MatchResult {
        find_route_with_options(
            self.policy,
            self.table.default_locale(),
            &self.table,
            locale,
            location,
            self.case_insensitive,
        )
    }

    /// Resolves a link target to the href it should point to
    pub fn href(&self, locale: &Locale, target: &LinkTarget) -> Result<String, RouteError> {
        match target {
            LinkTarget::Route { route_id, params } => {
                self.localize(locale, route_id, params.as_ref())
            }
            LinkTarget::Href(href) => Ok(href.clone()),
        }
    }

    /// Every pattern the host router must register for `route_ids`
    pub fn route_patterns(&self, route_ids: &[RouteId]) -> Result<Vec<RoutePattern>, RouteError> {
        route_patterns(self.policy, &self.table, route_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::app_routes;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_href_for_raw_link() {
        let ctx = RouterContext::new(LocalizationPolicy::default(), app_routes().clone());
        let href = ctx
            .href(&Locale::new("de"), &LinkTarget::href("https://example.com"))
            .unwrap();
        assert_eq!(href, "https://example.com");
    }

    #[test]
    fn test_href_for_route() {
        let ctx = RouterContext::new(LocalizationPolicy::new(true, false), app_routes().clone());
        let target = LinkTarget::route_with("DEMO", RouteParams::new().with_url_param("id", 5));
        assert_eq!(ctx.href(&Locale::new("de"), &target).unwrap(), "/de/d/5");
    }

    #[test]
    fn test_case_sensitive_context() {
        let ctx = RouterContext::new(LocalizationPolicy::default(), app_routes().clone())
            .with_case_insensitive(false);
        let en = Locale::new("en");
        assert!(ctx.find(&en, &Location::parse("/Login")).is_none());
        assert!(ctx.find(&en, &Location::parse("/login")).is_some());
    }
}

/// Route finding: incoming location → (route id, params)
use crate::locale::Locale;
use crate::params::RouteParams;
use crate::path::{normalize_locale_path, Location};
use crate::policy::LocalizationPolicy;
use crate::query::search_params_to_record;
use crate::route::RouteId;
use crate::table::RouteTable;

/// A matched route with the parameters read from the location
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub route_id: RouteId,
    pub params: RouteParams,
}

/// `None` when no route matches
pub type MatchResult = Option<RouteMatch>;

/// Finds the route a location points to under `locale`
///
/// Static segments are compared ASCII case-insensitively. See
/// [`find_route_with_options`] for case-sensitive matching.
///
/// # Examples
///
/// ```
/// use locale_router::{find_route, routes, Locale, Location, LocalizationPolicy};
///
/// let en = Locale::new("en");
/// let found = find_route(
///     LocalizationPolicy::new(true, false),
///     &en,
///     routes::app_routes(),
///     &Locale::new("de"),
///     &Location::parse("/de/d/23"),
/// )
/// .unwrap();
///
/// assert_eq!(found.route_id.as_str(), "DEMO");
/// assert_eq!(found.params.url_params["id"].to_string(), "23");
/// ```
pub fn find_route(
    policy: LocalizationPolicy,
    default_locale: &Locale,
    table: &RouteTable,
    locale: &Locale,
    location: &Location,
) -> MatchResult {
    find_route_with_options(policy, default_locale, table, locale, location, true)
}

/// [`find_route`] with explicit case sensitivity for static segments
///
/// Routes are tried in the table's declaration order, with `locale`'s
/// templates taking precedence over the default locale's. The first match
/// wins.
pub fn find_route_with_options(
    policy: LocalizationPolicy,
    default_locale: &Locale,
    table: &RouteTable,
    locale: &Locale,
    location: &Location,
    case_insensitive: bool,
) -> MatchResult {
    let pathname = normalize_locale_path(&location.pathname, locale, default_locale, policy);
    let prefix = policy
        .requires_prefix(locale, default_locale)
        .then(|| locale.prefix());

    let found = table.routes_for_locale(locale).find_map(|(route_id, template)| {
        template
            .match_path(&pathname, prefix.as_deref(), case_insensitive)
            .map(|url_params| (route_id, url_params))
    });

    match found {
        Some((route_id, url_params)) => {
            tracing::debug!(%route_id, %locale, pathname = %location.pathname, "route matched");
            Some(RouteMatch {
                route_id: route_id.clone(),
                params: RouteParams {
                    url_params,
                    query: search_params_to_record(&location.search),
                    hash: location.hash.clone(),
                },
            })
        }
        None => {
            tracing::debug!(%locale, pathname = %location.pathname, "no route matched");
            None
        }
    }
}

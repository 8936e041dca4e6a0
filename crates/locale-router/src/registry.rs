/// Route registration: every (locale, route id, path pattern) a host router must know
use crate::error::RouteError;
use crate::locale::Locale;
use crate::localizer::localize_route_path;
use crate::policy::LocalizationPolicy;
use crate::route::RouteId;
use crate::table::RouteTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    pub locale: Locale,
    pub route_id: RouteId,
    /// Template path with tokens left in place (`/de/d/:id`)
    pub path: String,
}

/// Lists the patterns to register for `route_ids`
///
/// Default-locale routes come first without any prefix, so unprefixed URLs
/// always resolve. Then each supported locale contributes its routes
/// localized under `policy`; the default locale is skipped when the locale
/// is not part of the path, since its patterns would repeat the first group.
///
/// # Examples
///
/// ```
/// use locale_router::{route_patterns, routes, LocalizationPolicy, RouteId};
///
/// let ids = [RouteId::new("LOGIN"), RouteId::new("SETTINGS")];
/// let patterns = route_patterns(LocalizationPolicy::new(true, false), routes::app_routes(), &ids).unwrap();
///
/// let paths: Vec<&str> = patterns.iter().map(|p| p.path.as_str()).collect();
/// assert_eq!(
///     paths,
///     vec!["/login", "/settings", "/login", "/settings", "/de/anmelden", "/de/einstellungen"]
/// );
/// ```
pub fn route_patterns(
    policy: LocalizationPolicy,
    table: &RouteTable,
    route_ids: &[RouteId],
) -> Result<Vec<RoutePattern>, RouteError> {
    let default_locale = table.default_locale();

    let unprefixed = route_ids.iter().map(|route_id| {
        localize_route_path(
            table,
            default_locale,
            route_id,
            None,
            LocalizationPolicy::NO_LOCALE_IN_PATH,
        )
        .map(|path| RoutePattern {
            locale: default_locale.clone(),
            route_id: route_id.clone(),
            path,
        })
    });

    let localized = table
        .locales()
        .supported()
        .iter()
        .filter(|locale| policy.use_locale_in_path || *locale != default_locale)
        .flat_map(|locale| {
            route_ids.iter().map(move |route_id| {
                localize_route_path(table, locale, route_id, None, policy).map(|path| {
                    RoutePattern {
                        locale: locale.clone(),
                        route_id: route_id.clone(),
                        path,
                    }
                })
            })
        });

    let patterns = unprefixed.chain(localized).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = patterns.len(), "collected route patterns");
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::app_routes;
    use pretty_assertions::assert_eq;

    fn ids() -> Vec<RouteId> {
        vec![RouteId::new("LOGIN"), RouteId::new("DEMO")]
    }

    #[test]
    fn test_counts_without_locale_in_path() {
        let patterns = route_patterns(LocalizationPolicy::new(false, false), app_routes(), &ids()).unwrap();
        assert_eq!(patterns.len(), 4);
    }

    #[test]
    fn test_counts_with_locale_in_path() {
        let patterns = route_patterns(LocalizationPolicy::new(true, true), app_routes(), &ids()).unwrap();
        assert_eq!(patterns.len(), 6);

        let paths: Vec<&str> = patterns.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/login", "/demo/:id", "/en/login", "/en/demo/:id", "/de/anmelden", "/de/d/:id"]
        );
    }

    #[test]
    fn test_unknown_id_is_error() {
        let result = route_patterns(LocalizationPolicy::default(), app_routes(), &[RouteId::new("NOPE")]);
        assert!(result.is_err());
    }
}

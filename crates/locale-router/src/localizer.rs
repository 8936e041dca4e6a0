/// Route localization: (route id, locale, params) → path
use crate::error::RouteError;
use crate::formatter::format_path;
use crate::locale::Locale;
use crate::params::RouteParams;
use crate::policy::LocalizationPolicy;
use crate::route::RouteId;
use crate::table::RouteTable;

/// Produces the localized path for a route
///
/// The template comes from `locale`'s entries, falling back to the default
/// locale. The path is prefixed with `/{locale}` when the policy requires it
/// for this locale, then rendered with `params`.
///
/// A route id unknown to the table is a configuration error: it is logged
/// and returned, never replaced with a fallback path.
///
/// # Examples
///
/// ```
/// use locale_router::{localize_route_path, routes, Locale, LocalizationPolicy, RouteParams};
///
/// let params = RouteParams::new()
///     .with_url_param("id", "mysuper7param")
///     .with_query("a", "abdf")
///     .with_query("magicNR", 129978)
///     .with_hash("abc");
///
/// let path = localize_route_path(
///     routes::app_routes(),
///     &Locale::new("de"),
///     &"DEMO".into(),
///     Some(&params),
///     LocalizationPolicy::new(true, true),
/// )
/// .unwrap();
/// assert_eq!(path, "/de/d/mysuper7param?a=abdf&magicNR=129978#abc");
/// ```
pub fn localize_route_path(
    table: &RouteTable,
    locale: &Locale,
    route_id: &RouteId,
    params: Option<&RouteParams>,
    policy: LocalizationPolicy,
) -> Result<String, RouteError> {
    let default_locale = table.default_locale();

    let Some(template) = table.template(locale, route_id) else {
        let err = RouteError::UnknownRoute {
            route_id: route_id.clone(),
            locale: locale.clone(),
            default_locale: default_locale.clone(),
        };
        tracing::error!(%route_id, %locale, "{}", err);
        return Err(err);
    };

    let href = if policy.requires_prefix(locale, default_locale) {
        format!("{}{}", locale.prefix(), template.as_str())
    } else {
        template.as_str().to_string()
    };

    Ok(format_path(&href, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleSet;
    use pretty_assertions::assert_eq;

    fn table() -> RouteTable {
        RouteTable::builder(LocaleSet::new("en", ["en", "de"]).unwrap())
            .route("INDEX", "/")
            .route("SETTINGS", "/settings")
            .route("MAGIC", "/magic")
            .localized("de", "SETTINGS", "/einstellungen")
            .build()
            .unwrap()
    }

    #[test]
    fn test_fallback_to_default_template() {
        let path = localize_route_path(
            &table(),
            &Locale::new("de"),
            &RouteId::new("MAGIC"),
            None,
            LocalizationPolicy::new(true, false),
        )
        .unwrap();
        assert_eq!(path, "/de/magic");
    }

    #[test]
    fn test_prefixed_root() {
        let path = localize_route_path(
            &table(),
            &Locale::new("de"),
            &RouteId::new("INDEX"),
            None,
            LocalizationPolicy::new(true, false),
        )
        .unwrap();
        assert_eq!(path, "/de/");
    }

    #[test]
    fn test_unknown_route_is_error() {
        let err = localize_route_path(
            &table(),
            &Locale::new("de"),
            &RouteId::new("NOPE"),
            None,
            LocalizationPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RouteError::UnknownRoute { .. }));
    }
}

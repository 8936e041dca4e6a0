/// Configuration errors raised by the routing core
///
/// Every variant describes an inconsistency between the route table, the
/// locale set and a request made against them. None of them is produced by an
/// unmatched URL: a path that matches no route is reported as `None` by the
/// finder, never as an error.
use thiserror::Error;

use crate::locale::Locale;
use crate::route::RouteId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The route id is defined neither for the requested locale nor for the default locale
    #[error("route `{route_id}` is not defined for locale `{locale}` nor for the default locale `{default_locale}`")]
    UnknownRoute {
        route_id: RouteId,
        locale: Locale,
        default_locale: Locale,
    },

    /// A locale outside the supported set was used
    #[error("locale `{0}` is not supported")]
    UnknownLocale(Locale),

    /// The default locale is not a member of the supported locales
    #[error("default locale `{0}` is not part of the supported locales")]
    MissingDefaultLocale(Locale),

    /// The default locale has no template for a declared route
    #[error("route `{route_id}` has no template for the default locale `{default_locale}`")]
    IncompleteRoute {
        route_id: RouteId,
        default_locale: Locale,
    },

    /// A non-default locale overrides a route the default locale never declared
    #[error("locale `{locale}` overrides route `{route_id}` which the default locale does not define")]
    OrphanOverride { locale: Locale, route_id: RouteId },

    /// The same route id was declared twice for the default locale
    #[error("route `{0}` is declared more than once")]
    DuplicateRoute(RouteId),

    /// The path template cannot be parsed
    #[error("invalid path template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_route_message() {
        let err = RouteError::UnknownRoute {
            route_id: RouteId::new("MAGIC"),
            locale: Locale::new("de"),
            default_locale: Locale::new("en"),
        };
        assert_eq!(
            err.to_string(),
            "route `MAGIC` is not defined for locale `de` nor for the default locale `en`"
        );
    }

    #[test]
    fn test_invalid_template_message() {
        let err = RouteError::InvalidTemplate {
            template: "/a/:rest*/b".to_string(),
            reason: "greedy segment must be last".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid path template `/a/:rest*/b`: greedy segment must be last"
        );
    }
}

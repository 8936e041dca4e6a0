//! # Locale Router
//!
//! Locale-aware route resolution for single-page applications:
//! - Localized paths from abstract route ids (`LOGIN` → `/de/anmelden`)
//! - Route matching from an incoming URL back to a route id and its parameters
//! - URL synchronization when the active locale changes
//! - One-shot normalization of the default locale's path prefix
//!
//! ## Route Table
//!
//! The default locale declares every route id in order. Other locales
//! override the templates they translate and fall back to the default
//! locale's template for the rest. Declaration order decides which route
//! wins when several templates match the same path.
//!
//! ## Localization Policy
//!
//! | `use_locale_in_path` | `use_prefix_for_default_locale` | default locale | other locales |
//! |---|---|---|---|
//! | false | any | `/login` | `/anmelden` |
//! | true | false | `/login` | `/de/anmelden` |
//! | true | true | `/en/login` | `/de/anmelden` |
//!
//! ## Example
//!
//! ```
//! use locale_router::{find_route, localize_route_path, routes, Locale, Location, LocalizationPolicy, RouteParams};
//!
//! let table = routes::app_routes();
//! let policy = LocalizationPolicy::new(true, false);
//! let de = Locale::new("de");
//!
//! let params = RouteParams::new().with_url_param("id", 23).with_query("tab", "raw");
//! let path = localize_route_path(table, &de, &"DEMO".into(), Some(&params), policy).unwrap();
//! assert_eq!(path, "/de/d/23?tab=raw");
//!
//! let found = find_route(policy, table.default_locale(), table, &de, &Location::parse(&path)).unwrap();
//! assert_eq!(found.route_id.as_str(), "DEMO");
//! assert_eq!(found.params.url_params["id"].to_string(), "23");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod context;
pub mod error;
pub mod finder;
pub mod formatter;
pub mod locale;
pub mod localizer;
pub mod navigation;
pub mod params;
pub mod path;
pub mod policy;
pub mod query;
pub mod registry;
pub mod route;
pub mod routes;
pub mod session;
pub mod sync;
pub mod table;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Config;
pub use context::RouterContext;
pub use error::RouteError;
pub use finder::{find_route, find_route_with_options, MatchResult, RouteMatch};
pub use formatter::{form_path, format_path, FormPathParams};
pub use locale::{Locale, LocaleSet};
pub use localizer::localize_route_path;
pub use navigation::{HistoryNavigator, LinkTarget, NavigateOptions, NavigationRequest, Navigator};
pub use params::{ParamValue, QueryParams, RouteParams, UrlParams};
pub use path::{has_locale_prefix, normalize_locale_path, Location};
pub use policy::LocalizationPolicy;
pub use query::{
    add_or_update_query_param, add_or_update_query_params, remove_query_params,
    search_params_to_record,
};
pub use registry::{route_patterns, RoutePattern};
pub use route::{PathTemplate, RouteId, Segment};
pub use session::{MatchedRoute, RouteGuard, RouterSession};
pub use sync::{DefaultLocaleNormalizer, LocaleSync};
pub use table::{RouteTable, RouteTableBuilder};

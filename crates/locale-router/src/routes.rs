/// The application's own routes and its process-wide route table
use once_cell::sync::Lazy;

use crate::locale::LocaleSet;
use crate::route::RouteId;
use crate::table::RouteTable;

pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "de"];

/// Route ids known to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Index,
    Login,
    Analytics,
    Settings,
    Demo,
}

impl AppRoute {
    pub const ALL: [AppRoute; 5] = [
        AppRoute::Index,
        AppRoute::Login,
        AppRoute::Analytics,
        AppRoute::Settings,
        AppRoute::Demo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppRoute::Index => "INDEX",
            AppRoute::Login => "LOGIN",
            AppRoute::Analytics => "ANALYTICS",
            AppRoute::Settings => "SETTINGS",
            AppRoute::Demo => "DEMO",
        }
    }

    pub fn id(&self) -> RouteId {
        RouteId::new(self.as_str())
    }

    /// Default-locale path template
    pub fn href(&self) -> &'static str {
        match self {
            AppRoute::Index => "/",
            AppRoute::Login => "/login",
            AppRoute::Analytics => "/analytics",
            AppRoute::Settings => "/settings",
            AppRoute::Demo => "/demo/:id",
        }
    }

    /// German path template, if it differs
    fn href_de(&self) -> Option<&'static str> {
        match self {
            AppRoute::Index => None,
            AppRoute::Login => Some("/anmelden"),
            AppRoute::Analytics => Some("/analytik"),
            AppRoute::Settings => Some("/einstellungen"),
            AppRoute::Demo => Some("/d/:id"),
        }
    }
}

impl From<AppRoute> for RouteId {
    fn from(route: AppRoute) -> Self {
        route.id()
    }
}

/// Builds the application route table
pub fn build_app_routes() -> Result<RouteTable, crate::RouteError> {
    let locales = LocaleSet::new(DEFAULT_LOCALE, SUPPORTED_LOCALES)?;

    let builder = AppRoute::ALL
        .iter()
        .fold(RouteTable::builder(locales), |builder, route| {
            builder.route(*route, route.href())
        });

    AppRoute::ALL
        .iter()
        .filter_map(|route| route.href_de().map(|href| (route, href)))
        .fold(builder, |builder, (route, href)| {
            builder.localized("de", *route, href)
        })
        .build()
}

static APP_ROUTES: Lazy<RouteTable> =
    Lazy::new(|| build_app_routes().expect("built-in route table is valid"));

/// The application route table, built on first use
pub fn app_routes() -> &'static RouteTable {
    &APP_ROUTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_app_routes_order() {
        let ids: Vec<&str> = app_routes().route_ids().map(RouteId::as_str).collect();
        assert_eq!(ids, vec!["INDEX", "LOGIN", "ANALYTICS", "SETTINGS", "DEMO"]);
    }

    #[test]
    fn test_german_templates() {
        let de = Locale::new("de");
        let template = |route: AppRoute| {
            app_routes()
                .template(&de, &route.id())
                .map(|t| t.as_str().to_string())
        };
        assert_eq!(template(AppRoute::Index).as_deref(), Some("/"));
        assert_eq!(template(AppRoute::Demo).as_deref(), Some("/d/:id"));
        assert_eq!(template(AppRoute::Settings).as_deref(), Some("/einstellungen"));
    }
}

/// The route table: route ids → locale-specific path templates
///
/// The default locale declares every route id, in order. Other locales
/// override a subset and fall back to the default entry for the rest.
/// The table is immutable once built.
use std::collections::HashMap;

use crate::error::RouteError;
use crate::locale::{Locale, LocaleSet};
use crate::route::{PathTemplate, RouteId};

#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    locales: LocaleSet,
    default_routes: Vec<(RouteId, PathTemplate)>,
    overrides: HashMap<Locale, HashMap<RouteId, PathTemplate>>,
}

impl RouteTable {
    /// Starts a table for the given locale set
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_router::{Locale, LocaleSet, RouteId, RouteTable};
    ///
    /// let locales = LocaleSet::new("en", ["en", "de"]).unwrap();
    /// let table = RouteTable::builder(locales)
    ///     .route("INDEX", "/")
    ///     .route("LOGIN", "/login")
    ///     .localized("de", "LOGIN", "/anmelden")
    ///     .build()
    ///     .unwrap();
    ///
    /// let de = Locale::new("de");
    /// assert_eq!(table.template(&de, &RouteId::new("LOGIN")).unwrap().as_str(), "/anmelden");
    /// assert_eq!(table.template(&de, &RouteId::new("INDEX")).unwrap().as_str(), "/");
    /// ```
    pub fn builder(locales: LocaleSet) -> RouteTableBuilder {
        RouteTableBuilder {
            locales,
            routes: Vec::new(),
            localized: Vec::new(),
        }
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    pub fn default_locale(&self) -> &Locale {
        self.locales.default_locale()
    }

    /// Template for `route_id` under `locale`, falling back to the default locale
    pub fn template(&self, locale: &Locale, route_id: &RouteId) -> Option<&PathTemplate> {
        self.overrides
            .get(locale)
            .and_then(|routes| routes.get(route_id))
            .or_else(|| {
                self.default_routes
                    .iter()
                    .find(|(id, _)| id == route_id)
                    .map(|(_, template)| template)
            })
    }

    /// Default-locale routes merged with `locale`'s overrides, in declaration order
    pub fn routes_for_locale<'a>(
        &'a self,
        locale: &Locale,
    ) -> impl Iterator<Item = (&'a RouteId, &'a PathTemplate)> + 'a {
        let overrides = self.overrides.get(locale);
        self.default_routes.iter().map(move |(id, template)| {
            let template = overrides
                .and_then(|routes| routes.get(id))
                .unwrap_or(template);
            (id, template)
        })
    }

    pub fn default_routes(&self) -> impl Iterator<Item = (&RouteId, &PathTemplate)> {
        self.default_routes.iter().map(|(id, template)| (id, template))
    }

    pub fn route_ids(&self) -> impl Iterator<Item = &RouteId> {
        self.default_routes.iter().map(|(id, _)| id)
    }

    pub fn contains(&self, route_id: &RouteId) -> bool {
        self.default_routes.iter().any(|(id, _)| id == route_id)
    }

    pub fn len(&self) -> usize {
        self.default_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.default_routes.is_empty()
    }
}

/// Collects route declarations and validates them on [`RouteTableBuilder::build`]
#[derive(Debug, Clone)]
pub struct RouteTableBuilder {
    locales: LocaleSet,
    routes: Vec<(RouteId, String)>,
    localized: Vec<(Locale, RouteId, String)>,
}

impl RouteTableBuilder {
    /// Declares a route for the default locale
    pub fn route(mut self, id: impl Into<RouteId>, href: impl Into<String>) -> Self {
        self.routes.push((id.into(), href.into()));
        self
    }

    /// Overrides a route's template for one locale
    pub fn localized(
        mut self,
        locale: impl Into<Locale>,
        id: impl Into<RouteId>,
        href: impl Into<String>,
    ) -> Self {
        self.localized.push((locale.into(), id.into(), href.into()));
        self
    }

    /// Validates and builds the table
    ///
    /// Fails on duplicate route ids, invalid templates, locales outside the
    /// supported set, and overrides of routes the default locale does not
    /// declare. An override for the default locale replaces its entry in
    /// place.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let mut default_routes: Vec<(RouteId, PathTemplate)> = Vec::with_capacity(self.routes.len());
        for (id, href) in self.routes {
            if default_routes.iter().any(|(existing, _)| *existing == id) {
                return Err(RouteError::DuplicateRoute(id));
            }
            let template = PathTemplate::parse(&href)?;
            default_routes.push((id, template));
        }

        let mut overrides: HashMap<Locale, HashMap<RouteId, PathTemplate>> = HashMap::new();
        for (locale, id, href) in self.localized {
            if !self.locales.contains(&locale) {
                return Err(RouteError::UnknownLocale(locale));
            }

            let template = PathTemplate::parse(&href)?;
            let Some(slot) = default_routes.iter_mut().find(|(existing, _)| *existing == id) else {
                return Err(RouteError::OrphanOverride {
                    locale,
                    route_id: id,
                });
            };

            if self.locales.is_default(&locale) {
                slot.1 = template;
            } else {
                overrides.entry(locale).or_default().insert(id, template);
            }
        }

        tracing::debug!(
            routes = default_routes.len(),
            localized_locales = overrides.len(),
            "built route table"
        );

        Ok(RouteTable {
            locales: self.locales,
            default_routes,
            overrides,
        })
    }
}

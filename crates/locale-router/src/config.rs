// File: src/config.rs
// Purpose: Configuration parsing from locale-router.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::context::RouterContext;
use crate::error::RouteError;
use crate::locale::{Locale, LocaleSet};
use crate::policy::LocalizationPolicy;
use crate::route::RouteId;
use crate::routes::{app_routes, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use crate::table::RouteTable;

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub localization: LocalizationPolicy,

    #[serde(default)]
    pub locales: LocalesConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    /// Route declarations in table order; empty means the built-in routes
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Supported locales
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalesConfig {
    #[serde(default = "default_locale")]
    pub default: String,

    #[serde(default = "default_supported")]
    pub supported: Vec<String>,
}

/// Matching behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Compare static path segments case-insensitively (default: true)
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

/// One `[[routes]]` entry: a route id and its template per locale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub id: String,

    #[serde(default)]
    pub href: BTreeMap<String, String>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_supported() -> Vec<String> {
    SUPPORTED_LOCALES.iter().map(|l| l.to_string()).collect()
}

fn default_case_insensitive() -> bool {
    true
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            default: default_locale(),
            supported: default_supported(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            case_insensitive: default_case_insensitive(),
        }
    }
}

impl Config {
    /// Load configuration from locale-router.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./locale-router.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("locale-router.toml")
    }

    pub fn locale_set(&self) -> Result<LocaleSet, RouteError> {
        LocaleSet::new(self.locales.default.as_str(), self.locales.supported.iter().map(String::as_str))
    }

    /// Builds the route table described by `[[routes]]`
    ///
    /// Without any `[[routes]]` the built-in application table is used.
    pub fn route_table(&self) -> Result<RouteTable, RouteError> {
        if self.routes.is_empty() {
            return Ok(app_routes().clone());
        }

        let locales = self.locale_set()?;
        let default_locale = locales.default_locale().clone();

        let mut builder = RouteTable::builder(locales);
        for route in &self.routes {
            let id = RouteId::new(route.id.as_str());
            let href = route
                .href
                .get(default_locale.as_str())
                .ok_or_else(|| RouteError::IncompleteRoute {
                    route_id: id.clone(),
                    default_locale: default_locale.clone(),
                })?;
            builder = builder.route(id, href.as_str());
        }

        for route in &self.routes {
            for (locale, href) in route.href.iter().filter(|(l, _)| **l != default_locale.as_str()) {
                builder = builder.localized(Locale::new(locale.as_str()), route.id.as_str(), href.as_str());
            }
        }

        builder.build()
    }

    /// Router context for this configuration
    pub fn context(&self) -> Result<RouterContext> {
        let table = self.route_table().context("Invalid route configuration")?;
        Ok(RouterContext::new(self.localization, table)
            .with_case_insensitive(self.routing.case_insensitive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.localization, LocalizationPolicy::default());
        assert_eq!(config.locales.default, "en");
        assert_eq!(config.locales.supported, vec!["en", "de"]);
        assert!(config.routing.case_insensitive);
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.locales.default, "en");
        assert_eq!(config.route_table().unwrap().len(), 5);
    }

    #[test]
    fn test_routes_section() {
        let toml = r#"
            [localization]
            use_locale_in_path = true

            [locales]
            default = "en"
            supported = ["en", "fr"]

            [routing]
            case_insensitive = false

            [[routes]]
            id = "HOME"
            href = { en = "/" }

            [[routes]]
            id = "ABOUT"
            href = { en = "/about", fr = "/a-propos" }
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.localization.use_locale_in_path);
        assert!(!config.localization.use_prefix_for_default_locale);
        assert!(!config.routing.case_insensitive);

        let ctx = config.context().unwrap();
        let fr = Locale::new("fr");
        assert_eq!(ctx.localize(&fr, &RouteId::new("ABOUT"), None).unwrap(), "/fr/a-propos");
        assert!(!ctx.is_case_insensitive());
    }

    #[test]
    fn test_route_without_default_href() {
        let toml = r#"
            [[routes]]
            id = "ABOUT"
            href = { de = "/ueber" }
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.route_table().unwrap_err(),
            RouteError::IncompleteRoute {
                route_id: RouteId::new("ABOUT"),
                default_locale: Locale::new("en"),
            }
        );
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load("does-not-exist/locale-router.toml").unwrap();
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[localization]\nuse_locale_in_path = true\nuse_prefix_for_default_locale = true"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.localization.prefixes_default_locale());
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[localization\nuse_locale_in_path = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}

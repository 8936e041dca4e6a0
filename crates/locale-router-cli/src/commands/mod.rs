pub mod find;
pub mod localize;
pub mod normalize;
pub mod routes;
pub mod switch;

use std::path::Path;

use anyhow::{bail, Context, Result};
use locale_router::query::coerce_value;
use locale_router::{Config, Locale, ParamValue, RouterContext};

/// Loads the router context from a configuration file
pub fn load_context(path: &Path) -> Result<RouterContext> {
    let config = Config::load(path)?;
    tracing::debug!(
        config = %path.display(),
        routes = config.routes.len(),
        "loaded configuration"
    );
    config
        .context()
        .with_context(|| format!("Invalid configuration in {:?}", path))
}

/// Resolves an optional locale argument, defaulting to the default locale
pub fn resolve_locale(ctx: &RouterContext, code: Option<&str>) -> Result<Locale> {
    match code {
        Some(code) => Ok(ctx.locales().parse(code)?),
        None => Ok(ctx.default_locale().clone()),
    }
}

/// Splits a `name=value` argument, coercing numeric values
pub fn parse_pair(arg: &str) -> Result<(String, ParamValue)> {
    let Some((name, value)) = arg.split_once('=') else {
        bail!("expected NAME=VALUE, got {:?}", arg);
    };
    if name.is_empty() {
        bail!("empty name in {:?}", arg);
    }
    Ok((name.to_string(), coerce_value(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let (name, value) = parse_pair("id=23").unwrap();
        assert_eq!(name, "id");
        assert_eq!(value, ParamValue::Number(23.0));

        let (_, value) = parse_pair("q=a=b").unwrap();
        assert_eq!(value, ParamValue::from("a=b"));
    }

    #[test]
    fn test_parse_pair_rejects_missing_separator() {
        assert!(parse_pair("id").is_err());
        assert!(parse_pair("=1").is_err());
    }

    #[test]
    fn test_load_context_without_file_uses_builtin_routes() {
        let ctx = load_context(Path::new("no-such-dir/locale-router.toml")).unwrap();
        assert_eq!(ctx.table().len(), 5);
        assert_eq!(resolve_locale(&ctx, None).unwrap(), Locale::new("en"));
        assert!(resolve_locale(&ctx, Some("fr")).is_err());
    }
}

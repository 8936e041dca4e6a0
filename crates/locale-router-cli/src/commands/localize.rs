use anyhow::Result;
use colored::Colorize;
use locale_router::{RouteId, RouteParams, RouterContext};

use super::{parse_pair, resolve_locale};

pub fn execute(
    ctx: &RouterContext,
    route_id: &str,
    locale: Option<&str>,
    params: &[String],
    query: &[String],
    hash: Option<&str>,
) -> Result<()> {
    let locale = resolve_locale(ctx, locale)?;
    let route_params = build_params(params, query, hash)?;

    let path = ctx.localize(&locale, &RouteId::new(route_id), Some(&route_params))?;

    println!("{}", path.green());
    Ok(())
}

fn build_params(params: &[String], query: &[String], hash: Option<&str>) -> Result<RouteParams> {
    let mut route_params = RouteParams::new().with_hash(hash.unwrap_or_default());

    for arg in params {
        let (name, value) = parse_pair(arg)?;
        route_params = route_params.with_url_param(name, value);
    }
    for arg in query {
        let (key, value) = parse_pair(arg)?;
        route_params = route_params.with_query(key, value);
    }

    Ok(route_params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use locale_router::{routes, Locale, LocalizationPolicy};

    #[test]
    fn test_build_params_renders_like_library() {
        let params = build_params(
            &["id=mysuper7param".to_string()],
            &["a=abdf".to_string(), "magicNR=129978".to_string()],
            Some("abc"),
        )
        .unwrap();

        let ctx = RouterContext::new(LocalizationPolicy::new(true, true), routes::app_routes().clone());
        let path = ctx
            .localize(&Locale::new("de"), &RouteId::new("DEMO"), Some(&params))
            .unwrap();
        assert_eq!(path, "/de/d/mysuper7param?a=abdf&magicNR=129978#abc");
    }
}

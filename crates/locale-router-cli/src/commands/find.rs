use anyhow::Result;
use colored::Colorize;
use locale_router::{Location, RouteMatch, RouterContext};

use super::resolve_locale;

pub fn execute(ctx: &RouterContext, href: &str, locale: Option<&str>) -> Result<()> {
    let locale = resolve_locale(ctx, locale)?;
    let location = Location::parse(href);

    match ctx.find(&locale, &location) {
        Some(found) => print_match(&found),
        None => println!("{}", format!("No route matches {} under '{}'", href, locale).yellow()),
    }

    Ok(())
}

pub fn print_match(found: &RouteMatch) {
    println!("{}", found.route_id.as_str().green().bold());

    let mut names: Vec<&String> = found.params.url_params.keys().collect();
    names.sort();
    for name in names {
        println!("  {} = {}", format!(":{}", name).cyan(), found.params.url_params[name]);
    }
    for (key, value) in found.params.query.iter() {
        println!("  {} = {}", format!("?{}", key).cyan(), value);
    }
    if !found.params.hash.is_empty() {
        println!("  {}", found.params.hash.cyan());
    }
}

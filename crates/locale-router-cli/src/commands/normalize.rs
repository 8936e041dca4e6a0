use anyhow::Result;
use colored::Colorize;
use locale_router::{DefaultLocaleNormalizer, HistoryNavigator, Location, RouterContext};

pub fn execute(ctx: &RouterContext, href: &str) -> Result<()> {
    let mut history = HistoryNavigator::new(href);
    let mut normalizer = DefaultLocaleNormalizer::new();

    let path = normalizer.observe(
        ctx,
        ctx.default_locale(),
        &Location::parse(href),
        &mut history,
    );

    match path {
        Some(path) => println!("{} {} {}", href, "→".dimmed(), path.green()),
        None if normalizer.is_settled() => println!("{}", "Already normalized".green()),
        None => println!("{}", format!("No default-locale route matches {}", href).yellow()),
    }

    Ok(())
}

use anyhow::Result;
use colored::Colorize;
use locale_router::{HistoryNavigator, LocaleSync, Location, RouterContext};

/// Replays a locale change against `href` and reports the resulting URL
pub fn execute(ctx: &RouterContext, href: &str, from: &str, to: &str) -> Result<()> {
    let from = ctx.locales().parse(from)?;
    let to = ctx.locales().parse(to)?;
    let location = Location::parse(href);

    let mut history = HistoryNavigator::new(href);
    let mut sync = LocaleSync::new();
    sync.observe(ctx, &from, &location, &mut history);

    match sync.observe(ctx, &to, &location, &mut history) {
        Some(path) => println!("{} {} {}", href, "→".dimmed(), path.green()),
        None if from == to => println!("{}", "Locale unchanged, URL kept".yellow()),
        None => println!(
            "{}",
            format!("No route matches {} under '{}', URL kept", href, from).yellow()
        ),
    }

    Ok(())
}

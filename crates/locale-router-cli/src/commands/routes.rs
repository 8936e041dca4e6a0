use anyhow::Result;
use colored::Colorize;
use locale_router::{RouteId, RouterContext};

pub fn execute(ctx: &RouterContext, ids: &[String]) -> Result<()> {
    let ids: Vec<RouteId> = if ids.is_empty() {
        ctx.table().route_ids().cloned().collect()
    } else {
        ids.iter().map(|id| RouteId::new(id.as_str())).collect()
    };

    let policy = ctx.policy();
    println!(
        "{} use_locale_in_path={} use_prefix_for_default_locale={}",
        "Policy:".bold(),
        policy.use_locale_in_path,
        policy.use_prefix_for_default_locale
    );

    for pattern in ctx.route_patterns(&ids)? {
        println!(
            "  {:<4} {:<12} {}",
            pattern.locale.as_str().cyan(),
            pattern.route_id.as_str(),
            pattern.path.green()
        );
    }

    Ok(())
}

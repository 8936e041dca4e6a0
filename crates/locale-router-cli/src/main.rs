mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "locale-router")]
#[command(version, about = "Locale-aware route resolution from the command line", long_about = None)]
struct Cli {
    /// Route configuration file (built-in routes when it does not exist)
    #[arg(short, long, global = true, default_value = "locale-router.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the localized path of a route
    Localize {
        /// Route id, e.g. DEMO
        route_id: String,

        /// Target locale (default locale when omitted)
        #[arg(short, long)]
        locale: Option<String>,

        /// Url parameter as name=value (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Query parameter as key=value (repeatable)
        #[arg(short, long = "query", value_name = "KEY=VALUE")]
        query: Vec<String>,

        /// Fragment, with or without the leading '#'
        #[arg(long)]
        hash: Option<String>,
    },

    /// Resolve a URL to its route id and parameters
    Find {
        /// URL or path, e.g. /de/d/23?tab=raw
        href: String,

        /// Locale the URL is read under (default locale when omitted)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Show where a URL moves when the locale changes
    Switch {
        /// Current URL
        href: String,

        /// Locale currently active
        #[arg(long)]
        from: String,

        /// Locale switched to
        #[arg(long)]
        to: String,
    },

    /// Show the policy-correct form of a default-locale URL
    Normalize {
        /// URL opened under the default locale
        href: String,
    },

    /// List the path patterns a host router must register
    Routes {
        /// Route ids to list (all when omitted)
        ids: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let ctx = commands::load_context(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Localize {
            route_id,
            locale,
            params,
            query,
            hash,
        } => {
            commands::localize::execute(&ctx, &route_id, locale.as_deref(), &params, &query, hash.as_deref())?;
        }
        Commands::Find { href, locale } => {
            commands::find::execute(&ctx, &href, locale.as_deref())?;
        }
        Commands::Switch { href, from, to } => {
            commands::switch::execute(&ctx, &href, &from, &to)?;
        }
        Commands::Normalize { href } => {
            commands::normalize::execute(&ctx, &href)?;
        }
        Commands::Routes { ids } => {
            commands::routes::execute(&ctx, &ids)?;
        }
    }

    Ok(())
}

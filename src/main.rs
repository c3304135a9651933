//! Gameplan - filter and sort a board game catalog

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use gameplan::config::Config;
use gameplan::game::{load_catalog, GameCollection};
use gameplan::query::SortSpec;
use gameplan::shell::Shell;
use std::io;
use std::path::PathBuf;

/// Gameplan - pick board games from a catalog
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog CSV file (overrides the configuration)
    #[arg(short = 'C', long, global = true)]
    catalog: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the names of games matching a filter, e.g. "minPlayers>=2,rating>7"
    Query {
        /// Comma-separated conditions; empty matches everything
        #[arg(default_value = "")]
        filter: String,

        /// Sort as column[:asc|:desc]
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Start the interactive shell
    Shell,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let catalog_path = args.catalog.unwrap_or_else(|| config.catalog.path.clone());
    let records = load_catalog(&catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;
    let catalog = GameCollection::from_records(records);

    match args.command {
        Command::Query { filter, sort } => {
            let sort_spec = sort.as_deref().unwrap_or(&config.query.default_sort);
            let sort = sort_spec
                .parse::<SortSpec>()
                .with_context(|| format!("Invalid sort '{}'", sort_spec))?;
            let filter = if filter.trim().is_empty() {
                None
            } else {
                Some(filter.as_str())
            };
            for game in catalog.query(filter, &sort)? {
                println!("{}", game.name());
            }
        }
        Command::Shell => {
            let mut shell = Shell::new(catalog, &config)?;
            let stdin = io::stdin();
            shell.run(stdin.lock(), &mut io::stdout())?;
        }
    }

    Ok(())
}

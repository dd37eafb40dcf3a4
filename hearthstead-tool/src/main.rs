mod config;
mod error;
mod planner;
mod report;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hearthstead_core::{Catalog, Location};

use crate::planner::Planner;
use crate::report::display_name;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Bill-of-materials planner for houses and homesteads", long_about = None)]
struct Cli {
    /// Directory containing rooms.info and furniture.info
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan a dwelling interactively and print its bill of materials
    Plan,
    /// List the purchasable locations and their costs
    Locations,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let dir = config::resolve_catalog_dir(cli.catalog_dir)?;

    match cli.command {
        Command::Plan => {
            let catalog = Catalog::load(&dir)?;
            let house = {
                let stdin = io::stdin();
                let stdout = io::stdout();
                Planner::new(&catalog, stdin.lock(), stdout.lock()).run()?
            };
            print!("{}", report::render(&house));
        }
        Command::Locations => {
            for &location in Location::ALL {
                let tenure = if location.is_homestead() { "plot" } else { "deed" };
                println!(
                    "{}: {} gold ({tenure})",
                    display_name(location.name()),
                    location.cost()
                );
            }
        }
    }

    Ok(())
}

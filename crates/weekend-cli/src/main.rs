//! Weekend planner CLI
//!
//! Command-line front end for the weekend planner core.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use weekend_core::{Catalog, PlannerBuilder};

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize planner")?;

    let catalog = match catalog_file {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Failed to load built-in catalog")?,
    };

    let renderer = TerminalRenderer::new(!no_color);

    info!("Weekend planner started with {} catalog events", catalog.len());

    Cli::new(planner, catalog, renderer).run(command)
}

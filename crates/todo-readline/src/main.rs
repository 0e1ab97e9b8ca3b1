use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use todo_core::{TaskStore, TodoConfig};
use tracing_subscriber::EnvFilter;

mod helper;
mod menu;
mod reader;
mod render;

use menu::Menu;
use reader::RustylineReader;
use render::Renderer;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Interactive to-do list manager", long_about = None)]
struct Cli {
    /// Print status glyphs without color
    #[arg(long)]
    no_color: bool,

    /// Config file (defaults to <config dir>/todo/config.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "todo_core=debug" (logs go to stderr)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter '{}'", filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// Entry point: resolve config, set up logging, then hand a fresh store to
/// the menu loop. Tasks live only as long as this process.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TodoConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.logging.filter))?;

    let color = render::configure_color(&config.display, cli.no_color);
    let renderer = Renderer::new(&config.display, color);
    let reader = RustylineReader::new().context("Failed to initialize terminal input")?;

    let mut store = TaskStore::new();
    Menu::new(&mut store, reader, io::stdout(), renderer).run()
}

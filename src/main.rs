//! Interactive shell driving a chess game from stdin. Responses go to stdout,
//! logs to stderr (filtered through `RUST_LOG`).

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use ply::chess::game::{ErrorPolicy, Game};
use ply::chess::openings::OpeningTable;
use ply::chess::render::RenderOptions;
use ply::shell::Shell;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log rejected moves instead of reporting them.
    #[arg(long)]
    lenient: bool,
    /// JSON corpus of openings: `[{"eco", "name", "moves"}]`.
    #[arg(long)]
    openings: Option<PathBuf>,
    /// Draw the board with letter codes instead of Unicode figurines.
    #[arg(long)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    tracing::info!(version = %ply::version(), "starting");

    let mut game = Game::new();
    if args.lenient {
        game = game.with_error_policy(ErrorPolicy::Suppress);
    }
    if let Some(path) = &args.openings {
        game = game.with_openings(Arc::new(OpeningTable::load(path)?));
    }
    let render = if args.ascii {
        RenderOptions::ascii()
    } else {
        RenderOptions::default()
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Shell::new(game, render, &mut input, &mut output).run()
}

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::Context;
use chess_table::cli::Args;
use chess_table::{load_game, replay, write_game};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG takes precedence over --log-level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("invalid log filter {:?}", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut game = load_game(args.game.as_deref()).context("failed to load starting position")?;
    replay(&mut game, &args.moves)?;
    debug!("final position\n{}", game.board());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_game(&game, BufWriter::new(file), args.pretty)?;
        }
        None => write_game(&game, io::stdout().lock(), args.pretty)?,
    }

    Ok(())
}

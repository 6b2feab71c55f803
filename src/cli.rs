//! Command-line arguments for `chess_replay`

use std::path::PathBuf;

use clap::Parser;

/// Default tracing filter when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug, Clone)]
#[command(name = "chess_replay")]
#[command(about = "Apply coordinate-notation moves to a chess game and print the resulting snapshot")]
pub struct Args {
    /// JSON snapshot to start from (default: standard opening position)
    #[arg(short, long)]
    pub game: Option<PathBuf>,

    /// Where to write the final snapshot (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the snapshot
    #[arg(short, long)]
    pub pretty: bool,

    /// Tracing filter, e.g. `debug` or `chess_engine=trace`; `RUST_LOG` wins when set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Moves in coordinate notation, e.g. `e2e4 e7e5 e1g1 e7e8q`
    pub moves: Vec<String>,
}

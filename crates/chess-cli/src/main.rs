//! Terminal move checker - type moves like `e2 to e4` and watch the board.

mod config;
mod session;

use clap::Parser;
use config::CliConfig;
use move_engine::{Game, LenientRules};
use session::Terminal;
use std::path::PathBuf;
use tracing::Level;

/// Play moves on a chess board from the terminal.
#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Checks and applies moves typed as 'e2 to e4'")]
struct Args {
    /// Path to the configuration file [default: chess.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Piece placement to start from (e.g. "8/8/8/8/3N4/8/8/8")
    #[arg(short, long)]
    position: Option<String>,

    /// Log every accepted and rejected move to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::resolve(args.config.as_deref(), &CliConfig::default_path())?;
    tracing::info!("Config: {:?}", config);

    let board = config.starting_board(args.position.as_deref())?;
    let mut game = Game::from_board(LenientRules, board);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Terminal::new(
        stdin.lock(),
        stdout.lock(),
        config.rank_order.into(),
        config.show_player,
    )
    .run(&mut game)?;

    Ok(())
}

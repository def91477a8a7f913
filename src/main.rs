//! Plays draughts over stdin/stdout, see [`draughts::Engine`] for the protocol.
//! Logs are written to stderr, their verbosity is controlled by `RUST_LOG`.

use std::io;

use clap::Parser;
use draughts::checkers::board::Board;
use draughts::checkers::core::Color;
use draughts::Engine;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial board in compact notation, starting position if omitted.
    #[arg(long)]
    position: Option<String>,
    /// Side that moves first.
    #[arg(long, default_value = "dark", value_parser = parse_color)]
    first: Color,
}

fn parse_color(color: &str) -> anyhow::Result<Color> {
    Color::try_from(color)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let board = match args.position.as_deref() {
        Some(notation) => Board::try_from(notation)?,
        None => Board::starting(),
    };
    tracing::info!(%board, first = %args.first, "starting engine");

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Engine::new(&mut input, &mut output)
        .with_position(board, args.first)
        .run()
}

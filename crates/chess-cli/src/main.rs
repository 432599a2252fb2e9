//! chess-rules - query the rules engine from the command line.
//!
//! Loads a board layout, optionally replays a list of moves on it (which is
//! how castling and double-step eligibility are rebuilt, since the layout
//! text does not record them), then answers one query.

mod config;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use chess_core::{Color, Coordinate, Move, PieceKind};
use chess_engine::{Board, FinishReason};
use clap::{Parser, Subcommand, ValueEnum};
use config::{ToolConfig, DEFAULT_CONFIG_PATH};

/// Chess rules engine tool.
#[derive(Parser)]
#[command(name = "chess-rules")]
#[command(about = "Check moves, list destinations and detect mate on a chess position")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Layout file to start from (overrides the config file)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Moves to replay before the query, e.g. "e2e4 e7e5 g1f3"
    #[arg(long, default_value = "")]
    moves: String,

    /// Log engine decisions at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board
    Show,
    /// Check whether a move is legal
    Legal {
        /// Square to move from, e.g. e2
        #[arg(value_parser = parse_square)]
        from: Coordinate,
        /// Square to move to, e.g. e4
        #[arg(value_parser = parse_square)]
        to: Coordinate,
        /// Side making the move (defaults to the side to move)
        #[arg(long, value_enum)]
        color: Option<Side>,
    },
    /// List every legal destination of a piece
    Moves {
        /// Square holding the piece
        #[arg(value_parser = parse_square)]
        from: Coordinate,
    },
    /// Report check, checkmate or stalemate
    Status {
        /// Side to evaluate (defaults to the side to move)
        #[arg(value_enum)]
        color: Option<Side>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn parse_square(s: &str) -> Result<Coordinate, String> {
    Coordinate::from_algebraic(s).ok_or_else(|| format!("'{}' is not a square like e4", s))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ToolConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::from_str(&config.log_level)
            .with_context(|| format!("invalid log level '{}'", config.log_level))?
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut board = match cli.layout.as_ref().or(config.layout.as_ref()) {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading layout {}", path.display()))?;
            Board::parse(&text).with_context(|| format!("parsing layout {}", path.display()))?
        }
        None => Board::standard(),
    };

    let promotion = config.promotion_kind()?;
    let to_move = replay(&mut board, &cli.moves, promotion)?;

    match cli.command {
        Commands::Show => println!("{}", board),
        Commands::Legal { from, to, color } => {
            let color = color.map_or(to_move, Color::from);
            let verdict = if board.is_legal_move(from, to, color) {
                "legal"
            } else {
                "illegal"
            };
            println!("{}", verdict);
        }
        Commands::Moves { from } => {
            let destinations: Vec<String> = board
                .legal_destinations(from)
                .into_iter()
                .map(|to| to.to_string())
                .collect();
            println!("{}", destinations.join(" "));
        }
        Commands::Status { color } => {
            let color = color.map_or(to_move, Color::from);
            let status = match board.outcome(color)? {
                Some(outcome) => match (outcome.reason, outcome.winner) {
                    (FinishReason::Checkmate, Some(winner)) => {
                        format!("checkmate, {} wins", winner)
                    }
                    _ => "stalemate".to_string(),
                },
                None if board.is_in_check(color) => format!("{} is in check", color),
                None => "ongoing".to_string(),
            };
            println!("{}", status);
        }
    }

    Ok(())
}

/// Plays each move in `moves` after checking it is legal for the side to move,
/// starting with White. Returns the side to move afterwards.
fn replay(board: &mut Board, moves: &str, promotion: PieceKind) -> anyhow::Result<Color> {
    let mut side = Color::White;
    for text in moves.split_whitespace() {
        let m: Move = text.parse()?;
        if !board.is_legal_move(m.from, m.to, side) {
            bail!("illegal move {} for {}", m, side);
        }
        board
            .apply_move(m.from, m.to, || m.promotion.unwrap_or(promotion))
            .with_context(|| format!("applying {}", m))?;
        tracing::info!(%side, mv = %m, "replayed move");
        side = side.opposite();
    }
    Ok(side)
}

//! Two-player chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid with cached king locations and the textual layout
//! - Move legality, including castling and the rule that a move may not leave
//!   the mover's own king threatened
//! - Threat detection, checkmate and stalemate
//! - Move application with castling and promotion
//!
//! # Architecture
//!
//! Pieces are plain values and the board is a fixed-size array, so a legality
//! query can clone the board, play the move on the clone and ask whether the
//! mover's king is threatened there. The authoritative board is only changed
//! by [`Board::apply_move`]. Nothing is cached between queries.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Coordinate, PieceKind};
//! use chess_engine::Board;
//!
//! let mut board = Board::standard();
//! let e2 = Coordinate::from_algebraic("e2").unwrap();
//! let e4 = Coordinate::from_algebraic("e4").unwrap();
//!
//! assert!(board.is_legal_move(e2, e4, Color::White));
//! board.apply_move(e2, e4, || PieceKind::Queen).unwrap();
//! assert_eq!(board.is_in_checkmate(Color::Black), Ok(false));
//! ```

mod board;
mod error;
mod legality;
mod terminal;
mod threat;

pub use board::Board;
pub use error::EngineError;
pub use terminal::{FinishReason, GameOutcome};

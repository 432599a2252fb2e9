//! Engine error type.

use chess_core::{Color, Coordinate, GeometryError, LayoutError, PieceKind};
use thiserror::Error;

/// Errors returned by board operations.
///
/// An illegal move is never an error: legality queries answer `false`.
/// These variants are reserved for malformed input and broken invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("cannot promote a pawn to a {0}")]
    InvalidPromotionChoice(PieceKind),

    #[error("no piece on {0}")]
    EmptySquare(Coordinate),

    #[error("{color} king is threatened but no attacking piece was found")]
    NoAttacker { color: Color },
}

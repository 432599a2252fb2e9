//! Threat detection.
//!
//! A king threatens the squares around it; this is decided by adjacency
//! rather than by the king's move rule, since that rule itself asks whether
//! squares are threatened. Every other piece threatens the squares its move
//! rule reaches, without the self-check simulation. For a pawn that is the
//! empty square it can step to and any diagonal holding an enemy piece.

use chess_core::{Color, Coordinate, Piece, PieceKind};

use crate::Board;

impl Board {
    /// Returns true if any piece of `by` threatens `square`.
    pub fn is_square_threatened(&self, square: Coordinate, by: Color) -> bool {
        self.pieces(by)
            .any(|(from, piece)| self.threatens(from, piece, square))
    }

    /// Returns true if `color`'s king is threatened.
    ///
    /// A color without a king on the board is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_threatened(king, color.opposite()))
    }

    /// Returns true if `piece`, standing on `from`, threatens `target`.
    pub(crate) fn threatens(&self, from: Coordinate, piece: Piece, target: Coordinate) -> bool {
        match piece.kind {
            PieceKind::King => from.is_adjacent(target),
            _ => self.follows_piece_rule(from, target, piece),
        }
    }
}

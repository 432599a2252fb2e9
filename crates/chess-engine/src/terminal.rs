//! Checkmate and stalemate detection.

use chess_core::{Color, Coordinate, PieceKind};
use tracing::error;

use crate::{Board, EngineError};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The side to move is in check and cannot escape.
    Checkmate,
    /// The side to move is not in check but has no legal move.
    Stalemate,
}

/// The result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// The winning color, or `None` for a draw.
    pub winner: Option<Color>,
    pub reason: FinishReason,
}

impl Board {
    /// Returns true if `color` is checkmated.
    ///
    /// Checking pieces are found with the same move-rule threat test that
    /// decides whether the king is threatened, not with full legality, so a
    /// pinned piece still counts as an attacker.
    ///
    /// Fails with [`EngineError::NoAttacker`] if the king is threatened but no
    /// attacking piece can be found, which means the board is inconsistent.
    pub fn is_in_checkmate(&self, color: Color) -> Result<bool, EngineError> {
        let Some(king) = self.king_square(color) else {
            return Ok(false);
        };
        if !self.is_square_threatened(king, color.opposite()) {
            return Ok(false);
        }

        let blocking = self.blocking_squares(king, color)?;
        let can_block = blocking.iter().any(|&square| {
            self.pieces(color)
                .any(|(from, _)| self.is_legal_move(from, square, color))
        });
        if can_block {
            return Ok(false);
        }

        Ok(self.legal_destinations(king).is_empty())
    }

    /// Returns true if `color` is stalemated.
    ///
    /// Any piece other than pawns and the king is assumed to have a move, so
    /// only bare king-and-pawn armies are searched. A color without a king is
    /// never stalemated.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        if self.is_in_check(color) {
            return false;
        }
        if self
            .pieces(color)
            .any(|(_, piece)| !matches!(piece.kind, PieceKind::King | PieceKind::Pawn))
        {
            return false;
        }

        let pawn_can_move = self
            .pieces(color)
            .filter(|(_, piece)| piece.kind == PieceKind::Pawn)
            .any(|(from, _)| {
                std::iter::once(color.forward())
                    .chain(color.pawn_captures())
                    .filter_map(|direction| from.step(direction).ok())
                    .any(|to| self.is_legal_move(from, to, color))
            });
        if pawn_can_move {
            return false;
        }

        self.king_square(color)
            .is_some_and(|king| self.legal_destinations(king).is_empty())
    }

    /// Returns how the game ended if `color`, the side to move, can't play on.
    pub fn outcome(&self, color: Color) -> Result<Option<GameOutcome>, EngineError> {
        if self.is_in_checkmate(color)? {
            return Ok(Some(GameOutcome {
                winner: Some(color.opposite()),
                reason: FinishReason::Checkmate,
            }));
        }
        if self.is_in_stalemate(color) {
            return Ok(Some(GameOutcome {
                winner: None,
                reason: FinishReason::Stalemate,
            }));
        }
        Ok(None)
    }

    /// Squares that end the check on `king` when moved to: the attacker's
    /// square and, for a sliding attacker, the line up to the king.
    ///
    /// A double check can only be answered by the king, so it yields none.
    fn blocking_squares(
        &self,
        king: Coordinate,
        color: Color,
    ) -> Result<Vec<Coordinate>, EngineError> {
        let attackers: Vec<Coordinate> = self
            .pieces(color.opposite())
            .filter(|&(from, piece)| self.threatens(from, piece, king))
            .map(|(from, _)| from)
            .collect();

        match attackers.as_slice() {
            [] => {
                error!(%color, %king, "king threatened without an attacker");
                Err(EngineError::NoAttacker { color })
            }
            [attacker] => {
                let mut squares = attacker.squares_between(king)?;
                squares.push(*attacker);
                Ok(squares)
            }
            _ => Ok(Vec::new()),
        }
    }
}

//! Move legality.
//!
//! Each piece kind has one geometric rule, selected by a match on
//! [`PieceKind`]. A move is legal when its kind's rule accepts it and, after
//! playing it on a scratch copy of the board, the mover's king is not
//! threatened.

use std::collections::BTreeSet;

use chess_core::{Color, Coordinate, Direction, Piece, PieceKind};
use tracing::trace;

use crate::Board;

impl Board {
    /// Returns true if `color` may move the piece on `start` to `finish`.
    ///
    /// Moving from an empty square or a square holding the other color's
    /// piece is simply illegal.
    pub fn is_legal_move(&self, start: Coordinate, finish: Coordinate, color: Color) -> bool {
        let Some(piece) = self.piece_at(start) else {
            return false;
        };
        if piece.color != color || !self.follows_piece_rule(start, finish, piece) {
            return false;
        }

        let mut scratch = self.clone();
        if scratch
            .apply_move(start, finish, || PieceKind::Queen)
            .is_err()
        {
            return false;
        }
        if scratch.is_in_check(color) {
            trace!(%start, %finish, %color, "move rejected: leaves own king threatened");
            return false;
        }
        true
    }

    /// Returns every square the piece on `from` may legally move to.
    ///
    /// An empty square has no destinations.
    pub fn legal_destinations(&self, from: Coordinate) -> BTreeSet<Coordinate> {
        let Some(piece) = self.piece_at(from) else {
            return BTreeSet::new();
        };
        Coordinate::all()
            .filter(|&to| self.is_legal_move(from, to, piece.color))
            .collect()
    }

    /// The kind-specific rule, without the self-check simulation.
    pub(crate) fn follows_piece_rule(
        &self,
        start: Coordinate,
        finish: Coordinate,
        piece: Piece,
    ) -> bool {
        match piece.kind {
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                self.is_sliding_move(start, finish, piece)
            }
            PieceKind::Knight => self.is_knight_move(start, finish, piece.color),
            PieceKind::Pawn => self.is_pawn_move(start, finish, piece),
            PieceKind::King => self.is_king_move(start, finish, piece),
        }
    }

    /// True when no piece stands strictly between two aligned squares.
    pub(crate) fn is_path_clear(&self, start: Coordinate, finish: Coordinate) -> bool {
        start
            .squares_between(finish)
            .is_ok_and(|squares| squares.into_iter().all(|at| self.is_empty(at)))
    }

    fn is_sliding_move(&self, start: Coordinate, finish: Coordinate, piece: Piece) -> bool {
        let Ok(direction) = start.direction_to(finish) else {
            return false;
        };
        piece.kind.directions().contains(&direction)
            && self.is_path_clear(start, finish)
            && !self.is_occupied_by(finish, piece.color)
    }

    fn is_knight_move(&self, start: Coordinate, finish: Coordinate, color: Color) -> bool {
        start.direction_to(finish) == Ok(Direction::Knight) && !self.is_occupied_by(finish, color)
    }

    fn is_pawn_move(&self, start: Coordinate, finish: Coordinate, pawn: Piece) -> bool {
        let Ok(direction) = start.direction_to(finish) else {
            return false;
        };
        let rows = start.row_distance(finish);

        if direction == pawn.color.forward() {
            match rows {
                1 => self.is_empty(finish),
                2 => !pawn.has_moved && self.is_empty(finish) && self.is_path_clear(start, finish),
                _ => false,
            }
        } else if pawn.color.pawn_captures().contains(&direction) {
            rows == 1 && self.is_occupied_by(finish, pawn.color.opposite())
        } else {
            false
        }
    }

    fn is_king_move(&self, start: Coordinate, finish: Coordinate, king: Piece) -> bool {
        let rows = start.row_distance(finish);
        let columns = start.column_distance(finish);

        if rows == 0 && columns == 2 {
            return self.is_castling_move(start, finish, king);
        }

        rows <= 1
            && columns <= 1
            && start != finish
            && !self.is_occupied_by(finish, king.color)
            && !self.is_square_threatened(finish, king.color.opposite())
    }

    fn is_castling_move(&self, start: Coordinate, finish: Coordinate, king: Piece) -> bool {
        if king.has_moved {
            return false;
        }
        let Ok(direction) = start.direction_to(finish) else {
            return false;
        };
        let corner = match direction {
            Direction::Right => Coordinate::SIZE as i32 - 1,
            Direction::Left => 0,
            _ => return false,
        };
        let Ok(rook_square) = Coordinate::new(start.row() as i32, corner) else {
            return false;
        };
        let Ok(passage) = start.step(direction) else {
            return false;
        };

        let rook_ready = self.piece_at(rook_square).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        });
        let opponent = king.color.opposite();

        rook_ready
            && self.is_path_clear(start, rook_square)
            && [start, passage, finish]
                .into_iter()
                .all(|at| !self.is_square_threatened(at, opponent))
    }
}

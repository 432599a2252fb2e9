//! Board representation and move application.

use std::fmt;
use std::str::FromStr;

use chess_core::{Color, Coordinate, Direction, Grid, Layout, Move, Piece, PieceKind};
use tracing::debug;

use crate::EngineError;

/// An 8x8 grid of pieces with the king locations cached.
///
/// A board is a plain value: cloning copies every square, so a clone can be
/// mutated without affecting the original. The authoritative board changes
/// only through [`apply_move`](Board::apply_move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Grid,
    /// King coordinates, indexed by color.
    kings: [Option<Coordinate>; 2],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board::from_layout(Layout::empty())
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        Board::from_layout(Layout::standard())
    }

    /// Creates a board from layout text.
    ///
    /// Piece counts are not validated. If a color has several kings the last
    /// one parsed (in row-major order) is cached; with none, that color has no
    /// king and is never considered in check.
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        Ok(Board::from_layout(Layout::parse(text)?))
    }

    /// Creates a board from a parsed layout.
    pub fn from_layout(layout: Layout) -> Self {
        let mut kings = [None; 2];
        for (at, piece) in layout.placements() {
            if piece.kind == PieceKind::King {
                kings[piece.color.index()] = Some(at);
            }
        }
        Board {
            squares: layout.into_grid(),
            kings,
        }
    }

    /// Returns the layout of this board. `has_moved` flags are not kept.
    pub fn to_layout(&self) -> Layout {
        Layout::from_grid(self.squares)
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.squares[at.row() as usize][at.column() as usize]
    }

    /// Returns the cached king coordinate for a color.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        self.kings[color.index()]
    }

    /// Iterates over the pieces of one color, row by row.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |at| {
            self.piece_at(at)
                .filter(|piece| piece.color == color)
                .map(|piece| (at, piece))
        })
    }

    #[inline]
    pub(crate) fn is_empty(&self, at: Coordinate) -> bool {
        self.piece_at(at).is_none()
    }

    /// True when `at` holds a piece of `color`.
    #[inline]
    pub(crate) fn is_occupied_by(&self, at: Coordinate, color: Color) -> bool {
        self.piece_at(at).is_some_and(|piece| piece.color == color)
    }

    #[inline]
    fn set(&mut self, at: Coordinate, piece: Option<Piece>) {
        self.squares[at.row() as usize][at.column() as usize] = piece;
    }

    /// Moves the piece at `start` to `finish` without checking legality.
    ///
    /// Callers validate with [`is_legal_move`](Board::is_legal_move) first.
    /// A king moving two columns also brings the rook from that side's corner
    /// to the square the king passed over. A pawn reaching its last row is
    /// replaced by the kind returned from `promotion`, which is only called
    /// when a promotion actually happens.
    pub fn apply_move<F>(
        &mut self,
        start: Coordinate,
        finish: Coordinate,
        promotion: F,
    ) -> Result<(), EngineError>
    where
        F: FnOnce() -> PieceKind,
    {
        let piece = self.piece_at(start).ok_or(EngineError::EmptySquare(start))?;

        let mut placed = piece;
        if piece.kind == PieceKind::Pawn && finish.row() == piece.color.promotion_row() {
            let kind = promotion();
            if !kind.is_promotable() {
                return Err(EngineError::InvalidPromotionChoice(kind));
            }
            debug!(%start, %finish, %kind, color = %piece.color, "promoting pawn");
            placed = Piece::new(kind, piece.color);
        }

        if piece.kind == PieceKind::King {
            if start.row_distance(finish) == 0 && start.column_distance(finish) == 2 {
                self.castle_rook(start, finish)?;
            }
            self.kings[piece.color.index()] = Some(finish);
        }

        self.set(start, None);
        self.set(finish, Some(placed.moved()));
        debug!(%start, %finish, piece = %piece, "applied move");
        Ok(())
    }

    /// Applies a parsed move, promoting to its chosen kind or a queen.
    pub fn apply(&mut self, m: Move) -> Result<(), EngineError> {
        self.apply_move(m.from, m.to, || m.promotion.unwrap_or(PieceKind::Queen))
    }

    /// Relocates the castling rook for a king moving from `start` to `finish`.
    fn castle_rook(&mut self, start: Coordinate, finish: Coordinate) -> Result<(), EngineError> {
        let direction = start.direction_to(finish)?;
        let corner = match direction {
            Direction::Right => Coordinate::SIZE as i32 - 1,
            _ => 0,
        };
        let rook_start = Coordinate::new(start.row() as i32, corner)?;
        let rook_finish = start.step(direction)?;

        if let Some(rook) = self.piece_at(rook_start) {
            self.set(rook_start, None);
            self.set(rook_finish, Some(rook.moved()));
            debug!(from = %rook_start, to = %rook_finish, "castling rook relocated");
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_layout())
    }
}

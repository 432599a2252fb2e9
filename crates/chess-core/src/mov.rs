//! Move representation.

use crate::{Coordinate, PieceKind};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing move text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move '{0}': expected 4 or 5 characters such as e2e4 or e7e8q")]
    InvalidLength(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("invalid promotion letter '{0}'")]
    InvalidPromotion(char),
}

/// A move from one coordinate to another.
///
/// The promotion kind is only consulted when a pawn reaches its last row.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move with no promotion choice.
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a move carrying a promotion choice.
    #[inline]
    pub const fn with_promotion(from: Coordinate, to: Coordinate, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_text(self) -> String {
        match self.promotion {
            Some(kind) => format!(
                "{}{}{}",
                self.from,
                self.to,
                kind.to_char(crate::Color::Black)
            ),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength(s.to_string()));
        }
        let square = |text: &str| {
            Coordinate::from_algebraic(text)
                .ok_or_else(|| MoveParseError::InvalidSquare(text.to_string()))
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;
        let promotion = match s.chars().nth(4) {
            Some(letter) => Some(
                PieceKind::from_letter(letter).ok_or(MoveParseError::InvalidPromotion(letter))?,
            ),
            None => None,
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_text())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

//! Textual board layout parsing and printing.
//!
//! A layout is up to eight newline-separated rows, row 0 first. Each character
//! is one square: uppercase letters are White, lowercase Black, `-` is empty.
//! Rows may be shorter than eight characters; missing squares are empty.
//!
//! The layout does not carry `has_moved` flags, so every parsed piece starts
//! out unmoved.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Coordinate, Piece};

/// The standard starting position.
pub const STANDARD_LAYOUT: &str = "rhbqkbhr\npppppppp\n\n\n\n\nPPPPPPPP\nRHBQKBHR";

/// Errors that can occur when parsing a layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unrecognized character '{ch}' at row {row}, column {column}")]
    UnknownCharacter { ch: char, row: usize, column: usize },

    #[error("square at row {row}, column {column} is outside the board")]
    OutOfRange { row: usize, column: usize },
}

/// The contents of every square, indexed `[row][column]`.
pub type Grid = [[Option<Piece>; 8]; 8];

/// A parsed board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
}

impl Layout {
    /// An empty board.
    pub const fn empty() -> Self {
        Layout {
            grid: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        Self::parse(STANDARD_LAYOUT).expect("STANDARD_LAYOUT is valid")
    }

    /// Wraps an existing grid.
    pub const fn from_grid(grid: Grid) -> Self {
        Layout { grid }
    }

    /// Parses layout text.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut layout = Layout::empty();

        for (row, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            for (column, ch) in line.chars().enumerate() {
                if row >= Coordinate::SIZE as usize || column >= Coordinate::SIZE as usize {
                    return Err(LayoutError::OutOfRange { row, column });
                }
                layout.grid[row][column] = match ch {
                    '-' => None,
                    _ => Some(
                        Piece::from_char(ch)
                            .ok_or(LayoutError::UnknownCharacter { ch, row, column })?,
                    ),
                };
            }
        }

        Ok(layout)
    }

    /// Returns the piece on a square.
    #[inline]
    pub fn get(&self, at: Coordinate) -> Option<Piece> {
        self.grid[at.row() as usize][at.column() as usize]
    }

    /// Iterates over the occupied squares, row by row.
    pub fn placements(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(|at| self.get(at).map(|piece| (at, piece)))
    }

    /// Consumes the layout, returning its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Layout {
    /// Writes eight full rows separated by newlines, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for square in row {
                let ch = square.map_or('-', Piece::to_char);
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

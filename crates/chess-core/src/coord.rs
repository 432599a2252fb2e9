//! Board coordinates and the geometry between them.

use std::fmt;

use thiserror::Error;

/// Errors produced by coordinate arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("coordinate ({row}, {column}) is outside the board")]
    OutOfRange { row: i32, column: i32 },

    #[error("{from} and {to} share no line, diagonal or knight jump")]
    NoDirection { from: Coordinate, to: Coordinate },

    #[error("{0:?} is not a straight-line direction")]
    NotLinear(Direction),
}

/// The relation between two coordinates.
///
/// "Up" points towards row 0, which is Black's back row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    /// A knight jump: not a line, so nothing lies between its endpoints.
    Knight,
}

impl Direction {
    /// The four orthogonal directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The four diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// All eight straight-line directions.
    pub const LINES: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Returns the (row, column) step of a straight-line direction.
    ///
    /// Knight jumps have no single step and return `None`.
    #[inline]
    pub const fn delta(self) -> Option<(i32, i32)> {
        match self {
            Direction::Up => Some((-1, 0)),
            Direction::Down => Some((1, 0)),
            Direction::Left => Some((0, -1)),
            Direction::Right => Some((0, 1)),
            Direction::UpLeft => Some((-1, -1)),
            Direction::UpRight => Some((-1, 1)),
            Direction::DownLeft => Some((1, -1)),
            Direction::DownRight => Some((1, 1)),
            Direction::Knight => None,
        }
    }

    /// Returns true for the four diagonals.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }

    /// Classifies the relation from `from` to `to`.
    ///
    /// Equal rows give Left/Right, equal columns Up/Down, equal row-minus-column
    /// or row-plus-column a diagonal. Anything else within two rows and two
    /// columns is a knight jump. Identical coordinates have no direction.
    pub fn between(from: Coordinate, to: Coordinate) -> Result<Direction, GeometryError> {
        let rows = to.row as i32 - from.row as i32;
        let columns = to.column as i32 - from.column as i32;

        let direction = match (rows, columns) {
            (0, 0) => None,
            (0, c) if c > 0 => Some(Direction::Right),
            (0, _) => Some(Direction::Left),
            (r, 0) if r < 0 => Some(Direction::Up),
            (_, 0) => Some(Direction::Down),
            (r, c) if r == c && r < 0 => Some(Direction::UpLeft),
            (r, c) if r == c => Some(Direction::DownRight),
            (r, c) if r == -c && r < 0 => Some(Direction::UpRight),
            (r, c) if r == -c => Some(Direction::DownLeft),
            (r, c) if r.abs() <= 2 && c.abs() <= 2 => Some(Direction::Knight),
            _ => None,
        };

        direction.ok_or(GeometryError::NoDirection { from, to })
    }
}

/// A square of the 8x8 grid, addressed by row and column.
///
/// Row 0 is the top of the printed board (Black's back row) and column 0 is
/// the left edge (the a-file). Coordinates can only be built through checked
/// constructors, so every value is on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Number of rows and columns on the board.
    pub const SIZE: u8 = 8;

    /// Creates a coordinate, failing if it lies off the board.
    pub const fn new(row: i32, column: i32) -> Result<Self, GeometryError> {
        if row < 0 || row >= Self::SIZE as i32 || column < 0 || column >= Self::SIZE as i32 {
            return Err(GeometryError::OutOfRange { row, column });
        }
        Ok(Coordinate {
            row: row as u8,
            column: column as u8,
        })
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Iterates over every square, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |column| Coordinate { row, column }))
    }

    /// Returns the coordinate shifted by the given row and column offsets.
    pub const fn offset(self, rows: i32, columns: i32) -> Result<Self, GeometryError> {
        Self::new(self.row as i32 + rows, self.column as i32 + columns)
    }

    /// Returns the adjacent coordinate in a straight-line direction.
    pub fn step(self, direction: Direction) -> Result<Self, GeometryError> {
        let (rows, columns) = direction
            .delta()
            .ok_or(GeometryError::NotLinear(direction))?;
        self.offset(rows, columns)
    }

    /// Absolute row difference between two coordinates.
    #[inline]
    pub const fn row_distance(self, other: Coordinate) -> u8 {
        self.row.abs_diff(other.row)
    }

    /// Absolute column difference between two coordinates.
    #[inline]
    pub const fn column_distance(self, other: Coordinate) -> u8 {
        self.column.abs_diff(other.column)
    }

    /// True when the two coordinates touch (including diagonally).
    #[inline]
    pub const fn is_adjacent(self, other: Coordinate) -> bool {
        let rows = self.row_distance(other);
        let columns = self.column_distance(other);
        rows <= 1 && columns <= 1 && rows + columns > 0
    }

    /// Classifies the relation from this coordinate to `other`.
    #[inline]
    pub fn direction_to(self, other: Coordinate) -> Result<Direction, GeometryError> {
        Direction::between(self, other)
    }

    /// Returns the squares strictly between two aligned coordinates.
    ///
    /// Knight jumps and adjacent squares have nothing between them.
    pub fn squares_between(self, other: Coordinate) -> Result<Vec<Coordinate>, GeometryError> {
        let direction = self.direction_to(other)?;
        let mut squares = Vec::new();
        if direction == Direction::Knight {
            return Ok(squares);
        }
        let mut current = self.step(direction)?;
        while current != other {
            squares.push(current);
            current = current.step(direction)?;
        }
        Ok(squares)
    }

    /// Returns the up to eight squares a knight on this coordinate can reach.
    pub fn knight_jumps(self) -> impl Iterator<Item = Coordinate> {
        const JUMPS: [(i32, i32); 8] = [
            (-2, -1),
            (-2, 1),
            (-1, -2),
            (-1, 2),
            (1, -2),
            (1, 2),
            (2, -1),
            (2, 1),
        ];
        JUMPS
            .into_iter()
            .filter_map(move |(rows, columns)| self.offset(rows, columns).ok())
    }

    /// Returns the up to eight squares surrounding this coordinate.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        Direction::LINES
            .into_iter()
            .filter_map(move |direction| self.step(direction).ok())
    }

    /// Parses a square from algebraic notation (e.g., "e4" is row 4, column 4).
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Coordinate::new((b'8' - rank) as i32, (file - b'a') as i32).ok()
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!(
            "{}{}",
            (b'a' + self.column) as char,
            (b'8' - self.row) as char
        )
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.row, self.column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

//! Core types for chess rules.
//!
//! This crate provides the fundamental types used by the rules engine:
//! - [`Color`] for the two players
//! - [`Coordinate`] and [`Direction`] for board geometry
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`Move`] for move representation
//! - [`Layout`] for the textual board layout

mod color;
mod coord;
mod layout;
mod mov;
mod piece;

pub use color::Color;
pub use coord::{Coordinate, Direction, GeometryError};
pub use layout::{Grid, Layout, LayoutError, STANDARD_LAYOUT};
pub use mov::{Move, MoveParseError};
pub use piece::{Piece, PieceKind};

//! Board coordinates, compass directions and direction masks.
//!
//! This module provides the foundational coordinate types for the board:
//! - `Square`: an interior cell, addressed by column `x` (a-h) and row `y` (1-8)
//! - `Direction`: the eight compass directions a capture can run in
//! - `DirectionMask`: the set of capturing directions for one square
//!
//! Rows grow downwards, so `North` points towards row 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of playable columns and rows
pub const BOARD_SIZE: usize = 8;

/// Column labels, left to right
pub const COLUMN_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Row labels, top to bottom
pub const ROW_LABELS: [char; BOARD_SIZE] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// One of the eight compass directions.
///
/// The discriminant is the bit the direction owns in a [`DirectionMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Towards column a
    West = 1,
    /// Towards a1
    NorthWest = 2,
    /// Towards row 1
    North = 4,
    /// Towards h1
    NorthEast = 8,
    /// Towards column h
    East = 16,
    /// Towards h8
    SouthEast = 32,
    /// Towards row 8
    South = 64,
    /// Towards a8
    SouthWest = 128,
}

impl Direction {
    /// All directions in mask-bit order
    pub const ALL: [Direction; 8] = [
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
    ];

    /// Column and row increment for one step in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// The bit this direction occupies in a mask
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// Set of directions, one bit per [`Direction`].
///
/// A zero mask on a square means "not a legal move".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionMask(u8);

impl DirectionMask {
    /// The mask with no directions set
    pub const EMPTY: DirectionMask = DirectionMask(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Number of capturing directions
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the directions in the mask, in bit order
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl From<Direction> for DirectionMask {
    fn from(direction: Direction) -> Self {
        Self(direction.bit())
    }
}

impl FromIterator<Direction> for DirectionMask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut mask = DirectionMask::EMPTY;
        for direction in iter {
            mask.insert(direction);
        }
        mask
    }
}

/// Errors produced when reading a move token such as `f5`
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ParseSquareError {
    #[error("move must be at least two characters, e.g. f5")]
    TooShort,

    #[error("column '{0}' is not between a and h")]
    BadColumn(char),

    #[error("row '{0}' is not between 1 and 8")]
    BadRow(char),

    #[error("unexpected characters after square")]
    TrailingInput,
}

/// An interior cell of the board.
///
/// `x` is the column (1 = a, 8 = h) and `y` the row (1 = top, 8 = bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    // Ordered row-first so sorting follows reading order
    y: u8,
    x: u8,
}

impl Square {
    /// Create a square from 1-based column and row, or `None` when off the board
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let range = 1..=BOARD_SIZE as i32;
        if range.contains(&x) && range.contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Column, 1..=8
    pub const fn x(&self) -> i32 {
        self.x as i32
    }

    /// Row, 1..=8
    pub const fn y(&self) -> i32 {
        self.y as i32
    }

    /// Every interior square in reading order (a1, b1, ..., h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE as u8).flat_map(|y| (1..=BOARD_SIZE as u8).map(move |x| Square { x, y }))
    }

    /// Read a square from the first two characters of a move token.
    ///
    /// Anything after the second character is ignored, so `f5` and `f5!` both
    /// name f5.
    pub fn from_token(token: &str) -> Result<Self, ParseSquareError> {
        let mut chars = token.chars();
        let (Some(column), Some(row)) = (chars.next(), chars.next()) else {
            return Err(ParseSquareError::TooShort);
        };

        let x = COLUMN_LABELS
            .iter()
            .position(|&c| c == column)
            .ok_or(ParseSquareError::BadColumn(column))?;
        let y = ROW_LABELS
            .iter()
            .position(|&c| c == row)
            .ok_or(ParseSquareError::BadRow(row))?;

        Ok(Self {
            x: x as u8 + 1,
            y: y as u8 + 1,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            COLUMN_LABELS[self.x as usize - 1],
            ROW_LABELS[self.y as usize - 1]
        )
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Strict parse: exactly two characters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let square = Square::from_token(s)?;
        if s.chars().count() > 2 {
            return Err(ParseSquareError::TrailingInput);
        }
        Ok(square)
    }
}

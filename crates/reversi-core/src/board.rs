//! Board representation: an 8x8 grid inside a 10x10 sentinel ring.
//!
//! This module contains:
//! - Disc colors and cell contents
//! - The padded board and its directional scans
//! - A plain-text diagram format (`X` black, `O` white, `.` empty)
//!
//! Every border cell holds [`Cell::Sentinel`], so a scan walking outwards
//! from an interior square always stops on the ring and never needs a bounds
//! check.

use crate::coord::{Direction, DirectionMask, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side length of the padded grid
pub const PADDED_SIZE: usize = BOARD_SIZE + 2;

/// A disc color, which is also a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of one cell of the padded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
    /// Border marker, never found on an interior square
    Sentinel,
}

impl Cell {
    /// The disc color in this cell, if any
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Sentinel => None,
        }
    }

    /// Diagram character for an interior cell
    pub const fn symbol(self) -> char {
        match self {
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Empty => '.',
            Cell::Sentinel => '#',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Errors from reading a board diagram
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 8 rows, found {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 8")]
    WrongRowLength { row: usize, len: usize },

    #[error("unknown cell '{symbol}' in row {row}")]
    BadCell { row: usize, symbol: char },
}

/// The padded game board.
///
/// Indexed `[y][x]` with interior squares at `1..=8` on both axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; PADDED_SIZE]; PADDED_SIZE],
}

impl Board {
    /// A board with the sentinel ring and no discs
    pub fn empty() -> Self {
        let mut cells = [[Cell::Empty; PADDED_SIZE]; PADDED_SIZE];
        let last = PADDED_SIZE - 1;
        for i in 0..PADDED_SIZE {
            cells[0][i] = Cell::Sentinel;
            cells[last][i] = Cell::Sentinel;
            cells[i][0] = Cell::Sentinel;
            cells[i][last] = Cell::Sentinel;
        }
        Self { cells }
    }

    /// The standard starting position: d4/e5 White, e4/d5 Black
    pub fn standard() -> Self {
        let mut board = Self::empty();
        let half = BOARD_SIZE / 2;
        board.cells[half][half] = Cell::White;
        board.cells[half + 1][half + 1] = Cell::White;
        board.cells[half][half + 1] = Cell::Black;
        board.cells[half + 1][half] = Cell::Black;
        board
    }

    /// Contents of an interior square
    pub fn get(&self, square: Square) -> Cell {
        self.cell(square.x(), square.y())
    }

    /// Contents of any padded cell; `x` and `y` must lie in `0..=9`
    fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[y as usize][x as usize]
    }

    fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.y() as usize][square.x() as usize] = cell;
    }

    /// Whether placing `color` at `square` captures along `direction`
    fn captures_towards(&self, square: Square, color: Color, direction: Direction) -> bool {
        let own = Cell::from(color);
        let theirs = Cell::from(color.opponent());
        let (dx, dy) = direction.delta();
        let (mut x, mut y) = (square.x() + dx, square.y() + dy);

        if self.cell(x, y) != theirs {
            return false;
        }
        while self.cell(x, y) == theirs {
            x += dx;
            y += dy;
        }
        self.cell(x, y) == own
    }

    /// Directions in which a disc of `color` placed at `square` would capture.
    ///
    /// Occupied squares always give an empty mask.
    pub fn capture_mask(&self, square: Square, color: Color) -> DirectionMask {
        if self.get(square) != Cell::Empty {
            return DirectionMask::EMPTY;
        }
        Direction::ALL
            .into_iter()
            .filter(|&d| self.captures_towards(square, color, d))
            .collect()
    }

    /// Whether `color` has at least one capturing placement
    pub fn has_capture(&self, color: Color) -> bool {
        Square::all().any(|sq| !self.capture_mask(sq, color).is_empty())
    }

    /// Place a disc and flip every run flagged in `mask`.
    ///
    /// Each flagged run must end on a disc of `color`, which holds for any
    /// mask produced by [`Board::capture_mask`] on this board. Returns the
    /// flipped squares.
    pub(crate) fn place_and_flip(
        &mut self,
        square: Square,
        color: Color,
        mask: DirectionMask,
    ) -> Vec<Square> {
        let own = Cell::from(color);
        let theirs = Cell::from(color.opponent());
        let mut flipped = Vec::new();

        self.set(square, own);
        for direction in mask.iter() {
            let (dx, dy) = direction.delta();
            let (mut x, mut y) = (square.x() + dx, square.y() + dy);
            while self.cell(x, y) == theirs {
                self.cells[y as usize][x as usize] = own;
                // Interior by construction: the run is bounded by an own disc
                if let Some(sq) = Square::new(x, y) {
                    flipped.push(sq);
                }
                x += dx;
                y += dy;
            }
        }
        flipped
    }

    /// Number of discs of one color
    pub fn count(&self, color: Color) -> u32 {
        let target = Cell::from(color);
        Square::all().filter(|&sq| self.get(sq) == target).count() as u32
    }

    /// Number of discs of either color
    pub fn disc_count(&self) -> u32 {
        self.count(Color::Black) + self.count(Color::White)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    /// Eight lines of `X`, `O` and `.`, row 1 first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=BOARD_SIZE as i32 {
            for x in 1..=BOARD_SIZE as i32 {
                write!(f, "{}", self.cell(x, y).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a diagram; blank lines and surrounding whitespace are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (y, line) in rows.iter().enumerate() {
            let row = y + 1;
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(BoardError::WrongRowLength { row, len });
            }
            for (x, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    'X' | 'x' => Cell::Black,
                    'O' | 'o' => Cell::White,
                    '.' => Cell::Empty,
                    _ => return Err(BoardError::BadCell { row, symbol }),
                };
                board.cells[row][x + 1] = cell;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(token: &str) -> Square {
        token.parse().unwrap()
    }

    #[test]
    fn test_border_is_sentinel() {
        let board = Board::standard();
        let last = PADDED_SIZE - 1;
        for i in 0..PADDED_SIZE {
            assert_eq!(board.cells[0][i], Cell::Sentinel);
            assert_eq!(board.cells[last][i], Cell::Sentinel);
            assert_eq!(board.cells[i][0], Cell::Sentinel);
            assert_eq!(board.cells[i][last], Cell::Sentinel);
        }
        assert!(Square::all().all(|s| board.get(s) != Cell::Sentinel));
    }

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.get(sq("d4")), Cell::White);
        assert_eq!(board.get(sq("e5")), Cell::White);
        assert_eq!(board.get(sq("e4")), Cell::Black);
        assert_eq!(board.get(sq("d5")), Cell::Black);
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
    }

    #[test]
    fn test_capture_mask_on_opening() {
        let board = Board::standard();
        assert_eq!(board.capture_mask(sq("d3"), Color::Black), DirectionMask::from(Direction::South));
        assert_eq!(board.capture_mask(sq("c4"), Color::Black), DirectionMask::from(Direction::East));
        assert_eq!(board.capture_mask(sq("f5"), Color::Black), DirectionMask::from(Direction::West));
        assert_eq!(board.capture_mask(sq("e6"), Color::Black), DirectionMask::from(Direction::North));
        assert!(board.capture_mask(sq("d4"), Color::Black).is_empty());
        assert!(board.capture_mask(sq("a1"), Color::Black).is_empty());
    }

    #[test]
    fn test_capture_needs_closing_disc() {
        let board: Board = "
            XOO.....
            ........
            ........
            ........
            ........
            ........
            ........
            .....OOX
        "
        .parse()
        .unwrap();

        // a1 X then O O then empty d1: white cannot close, black at d1 can
        assert_eq!(board.capture_mask(sq("d1"), Color::Black), DirectionMask::from(Direction::West));
        assert!(board.capture_mask(sq("d1"), Color::White).is_empty());
        // e8 towards the east: O O X, closes on h8
        assert_eq!(board.capture_mask(sq("e8"), Color::Black), DirectionMask::from(Direction::East));
    }

    #[test]
    fn test_multiple_directions() {
        let board: Board = "
            X.X.X...
            .OOO....
            XO.OX...
            .OOO....
            X.X.X...
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        let mask = board.capture_mask(sq("c3"), Color::Black);
        assert_eq!(mask.bits(), 0xFF);

        let mut copy = board.clone();
        let flipped = copy.place_and_flip(sq("c3"), Color::Black, mask);
        assert_eq!(flipped.len(), 8);
        assert_eq!(copy.count(Color::White), 0);
        assert_eq!(copy.count(Color::Black), 17);
    }

    #[test]
    fn test_flip_leaves_other_runs_alone() {
        let mut board = Board::standard();
        let mask = board.capture_mask(sq("f5"), Color::Black);
        let flipped = board.place_and_flip(sq("f5"), Color::Black, mask);

        assert_eq!(flipped, vec![sq("e5")]);
        assert_eq!(board.get(sq("d4")), Cell::White);
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(board.count(Color::White), 1);
    }

    #[test]
    fn test_diagram_round_trip() {
        let board = Board::standard();
        let text = board.to_string();
        assert_eq!(text.lines().nth(3), Some("...OX..."));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!("X".parse::<Board>(), Err(BoardError::WrongRowCount(1)));

        let short = "........\n".repeat(7) + ".......";
        assert_eq!(
            short.parse::<Board>(),
            Err(BoardError::WrongRowLength { row: 8, len: 7 })
        );

        let bad = "........\n".repeat(7) + "...#....";
        assert_eq!(
            bad.parse::<Board>(),
            Err(BoardError::BadCell { row: 8, symbol: '#' })
        );
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent().opponent(), Color::White);
    }
}

//! Core game state machine.
//!
//! This module contains the `GameState` struct: the board, the side to move,
//! the legal-move table for that side, and the turn/pass/game-over rules.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, Color};
use crate::coord::{DirectionMask, Square, BOARD_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Placements that fill the board from the starting position
pub const MAX_TURNS: u32 = (BOARD_SIZE * BOARD_SIZE) as u32 - 4;

/// Errors that can occur when applying actions
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("cannot place a disc on {0}")]
    IllegalMove(Square),

    #[error("a legal placement exists, passing is not allowed")]
    MustPlace,

    #[error("game is over")]
    GameOver,
}

/// Final or running disc counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    pub fn total(&self) -> u32 {
        self.black + self.white
    }

    pub fn outcome(&self) -> Outcome {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Outcome::BlackWins,
            std::cmp::Ordering::Less => Outcome::WhiteWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::BlackWins => Some(Color::Black),
            Outcome::WhiteWins => Some(Color::White),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BlackWins => f.write_str("Black wins"),
            Outcome::WhiteWins => f.write_str("White wins"),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Capturing directions of every interior square for one color.
///
/// Squares with an empty mask are not legal moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoves {
    color: Color,
    masks: [[DirectionMask; BOARD_SIZE]; BOARD_SIZE],
}

impl LegalMoves {
    /// Full scan of `board` for placements by `color`
    pub fn compute(board: &Board, color: Color) -> Self {
        let mut masks = [[DirectionMask::EMPTY; BOARD_SIZE]; BOARD_SIZE];
        for square in Square::all() {
            masks[square.y() as usize - 1][square.x() as usize - 1] =
                board.capture_mask(square, color);
        }
        Self { color, masks }
    }

    /// The color these moves are for
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn mask(&self, square: Square) -> DirectionMask {
        self.masks[square.y() as usize - 1][square.x() as usize - 1]
    }

    pub fn contains(&self, square: Square) -> bool {
        !self.mask(square).is_empty()
    }

    /// Legal squares with their masks, in reading order
    pub fn iter(&self) -> impl Iterator<Item = (Square, DirectionMask)> + '_ {
        Square::all()
            .map(|sq| (sq, self.mask(sq)))
            .filter(|(_, mask)| !mask.is_empty())
    }

    pub fn squares(&self) -> Vec<Square> {
        self.iter().map(|(sq, _)| sq).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The game board
    board: Board,
    /// Side to move
    current_color: Color,
    /// Successful placements so far; passes do not count
    turn_count: u32,
    /// Set once by `evaluate_game_over`, never cleared
    is_over: bool,
    /// Always computed for `current_color` on the current board
    legal_moves: LegalMoves,
}

impl GameState {
    /// Create a new game from the standard position, Black to move
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::Black)
    }

    /// Start from an arbitrary position.
    ///
    /// The turn counter is derived from the discs beyond the starting four.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let turn_count = board.disc_count().saturating_sub(4).min(MAX_TURNS);
        let legal_moves = LegalMoves::compute(&board, to_move);
        Self {
            board,
            current_color: to_move,
            turn_count,
            is_over: false,
            legal_moves,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Whether the game has been declared over by [`GameState::evaluate_game_over`]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Legal placements for the side to move
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    /// Legal placements for any color on the current board
    pub fn compute_legal_moves(&self, color: Color) -> LegalMoves {
        LegalMoves::compute(&self.board, color)
    }

    /// Whether the side to move may place on `square`
    pub fn is_legal_move(&self, square: Square) -> bool {
        self.legal_moves.contains(square)
    }

    /// Like [`GameState::is_legal_move`] for raw 1-based coordinates.
    ///
    /// Coordinates off the board are simply not legal.
    pub fn is_legal_at(&self, x: i32, y: i32) -> bool {
        Square::new(x, y).is_some_and(|sq| self.is_legal_move(sq))
    }

    /// Get all currently valid actions for the side to move
    pub fn valid_actions(&self) -> Vec<GameAction> {
        if self.is_over {
            return Vec::new();
        }
        let places: Vec<GameAction> = self
            .legal_moves
            .iter()
            .map(|(sq, _)| GameAction::Place(sq))
            .collect();
        if places.is_empty() {
            vec![GameAction::Pass]
        } else {
            places
        }
    }

    /// Apply an action for the side to move
    pub fn apply_action(&mut self, action: GameAction) -> Result<GameEvent, GameError> {
        match action {
            GameAction::Place(square) => self.apply_move(square),
            GameAction::Pass => self.attempt_pass(),
        }
    }

    /// Place a disc for the side to move and turn over the captured runs.
    ///
    /// On error nothing changes.
    pub fn apply_move(&mut self, square: Square) -> Result<GameEvent, GameError> {
        if self.is_over {
            return Err(GameError::GameOver);
        }

        let mask = self.legal_moves.mask(square);
        if mask.is_empty() {
            return Err(GameError::IllegalMove(square));
        }

        let color = self.current_color;
        let flipped = self.board.place_and_flip(square, color, mask);
        self.turn_count += 1;
        self.switch_sides();

        Ok(GameEvent::DiscPlaced {
            color,
            square,
            flipped,
        })
    }

    /// Hand the turn to the opponent when the side to move cannot place.
    ///
    /// Fails with [`GameError::MustPlace`] if a placement exists and with
    /// [`GameError::GameOver`] if the game is, or by this check becomes, over.
    pub fn attempt_pass(&mut self) -> Result<GameEvent, GameError> {
        if self.is_over {
            return Err(GameError::GameOver);
        }
        if !self.legal_moves.is_empty() {
            return Err(GameError::MustPlace);
        }
        if self.evaluate_game_over() {
            return Err(GameError::GameOver);
        }

        let color = self.current_color;
        self.switch_sides();
        Ok(GameEvent::Passed { color })
    }

    /// Decide whether the game has ended, marking it over if so.
    ///
    /// The game ends when all placements have been made or when neither
    /// side can place. A side that is blocked while its opponent can still
    /// move has to pass instead.
    pub fn evaluate_game_over(&mut self) -> bool {
        if self.is_over {
            return true;
        }
        if self.turn_count >= MAX_TURNS {
            self.is_over = true;
            return true;
        }
        if !self.legal_moves.is_empty() {
            return false;
        }
        if self.board.has_capture(self.current_color.opponent()) {
            return false;
        }
        self.is_over = true;
        true
    }

    /// A legal placement drawn uniformly at random, or `None` if there is none
    pub fn choose_random_legal_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Square> {
        self.legal_moves.squares().choose(rng).copied()
    }

    /// Disc counts for both colors
    pub fn summarize(&self) -> Score {
        Score {
            black: self.board.count(Color::Black),
            white: self.board.count(Color::White),
        }
    }

    fn switch_sides(&mut self) {
        self.current_color = self.current_color.opponent();
        self.legal_moves = LegalMoves::compute(&self.board, self.current_color);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

//! Reversi - an Othello rules engine
//!
//! This crate provides the core game logic, including:
//! - A sentinel-padded 8x8 board with directional capture scans
//! - Legal-move tables keyed by capturing direction
//! - Placement, flipping, passing and game-over detection
//! - A uniform-random computer player
//!
//! # Modules
//!
//! - [`coord`]: Squares, compass directions and direction masks
//! - [`board`]: Board representation and text diagrams
//! - [`game`]: Game state machine
//! - [`actions`]: Place/pass actions and the events they produce
//! - [`bot`]: Random computer player

pub mod actions;
pub mod board;
pub mod bot;
pub mod coord;
pub mod game;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{Board, BoardError, Cell, Color};
pub use bot::Bot;
pub use coord::{Direction, DirectionMask, ParseSquareError, Square, BOARD_SIZE};
pub use game::{GameError, GameState, LegalMoves, Outcome, Score, MAX_TURNS};

//! Actions a side can take and the events they produce.

use crate::board::Color;
use crate::coord::Square;
use serde::{Deserialize, Serialize};

/// Everything the side to move can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Put a disc on a square
    Place(Square),
    /// Give up the turn; only allowed with no legal placement
    Pass,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A disc was placed and the listed opposing discs turned over
    DiscPlaced {
        color: Color,
        square: Square,
        flipped: Vec<Square>,
    },

    /// A side had no legal placement and handed the turn over
    Passed { color: Color },
}

impl GameEvent {
    /// The side that acted
    pub fn color(&self) -> Color {
        match self {
            GameEvent::DiscPlaced { color, .. } | GameEvent::Passed { color } => *color,
        }
    }
}

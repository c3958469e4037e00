//! Computer player.
//!
//! The bot has no evaluation: it picks uniformly among the legal placements
//! and passes only when it has to.

use crate::actions::GameAction;
use crate::board::Color;
use crate::coord::Square;
use crate::game::GameState;
use rand::prelude::*;

/// A computer player for one color
pub struct Bot {
    pub color: Color,
    rng: StdRng,
}

impl Bot {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a placement, or `None` if it is not this bot's turn or it has none
    pub fn choose_move(&mut self, game: &GameState) -> Option<Square> {
        if game.current_color() != self.color || game.is_over() {
            return None;
        }
        game.choose_random_legal_move(&mut self.rng)
    }

    /// Choose an action from the valid actions
    pub fn choose_action(&mut self, game: &GameState) -> Option<GameAction> {
        if game.current_color() != self.color {
            return None;
        }
        game.valid_actions().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_bot_only_moves_on_its_turn() {
        let game = GameState::new();
        let mut white = Bot::with_seed(Color::White, 3);
        assert_eq!(white.choose_move(&game), None);
        assert_eq!(white.choose_action(&game), None);

        let mut black = Bot::with_seed(Color::Black, 3);
        let choice = black.choose_move(&game).unwrap();
        assert!(game.is_legal_move(choice));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut game_a = GameState::new();
        let mut game_b = GameState::new();
        let mut bots_a = [Bot::with_seed(Color::Black, 11), Bot::with_seed(Color::White, 12)];
        let mut bots_b = [Bot::with_seed(Color::Black, 11), Bot::with_seed(Color::White, 12)];

        for _ in 0..20 {
            if game_a.evaluate_game_over() {
                break;
            }
            game_b.evaluate_game_over();
            let idx = game_a.current_color() as usize;
            let a = bots_a[idx].choose_action(&game_a).unwrap();
            let b = bots_b[idx].choose_action(&game_b).unwrap();
            assert_eq!(a, b);
            game_a.apply_action(a).unwrap();
            game_b.apply_action(b).unwrap();
        }
        assert_eq!(game_a, game_b);
    }

    #[test]
    fn test_blocked_bot_passes() {
        let board: Board = "
            OX......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        let game = GameState::from_board(board, Color::Black);
        let mut bot = Bot::with_seed(Color::Black, 5);

        assert_eq!(bot.choose_move(&game), None);
        assert_eq!(bot.choose_action(&game), Some(GameAction::Pass));
    }
}

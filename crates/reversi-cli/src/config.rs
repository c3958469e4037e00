//! Command-line configuration and play-mode resolution.

use clap::{Parser, ValueEnum};
use reversi_core::Color;

/// Legacy positional mode tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeToken {
    /// Human plays Black (first position only)
    #[value(name = "B")]
    Black,
    /// Human plays White (first position only)
    #[value(name = "W")]
    White,
    /// Computer takes the human's seat too
    #[value(name = "c")]
    Computer,
    /// A second human takes the computer's seat
    #[value(name = "p")]
    Players,
}

/// Format of the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "reversi", version, about = "Play Reversi in the terminal")]
pub struct Cli {
    /// Play mode: [B|W] picks the human color, `c` computer vs computer,
    /// `p` human vs human
    #[arg(value_enum, num_args = 0..=2)]
    pub mode: Vec<ModeToken>,

    /// Seed for the computer players
    #[arg(long, env = "REVERSI_SEED")]
    pub seed: Option<u64>,

    /// Pause after each computer move, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// How to print the final result
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl Cli {
    /// Resolve who controls each color.
    ///
    /// Only the first token can pick the human color; `c` and `p` count in
    /// either position.
    pub fn players(&self) -> Players {
        let first = self.mode.first().copied();
        let second = self.mode.get(1).copied();
        let given = |token: ModeToken| first == Some(token) || second == Some(token);

        let human_color = if first == Some(ModeToken::White) {
            Color::White
        } else {
            Color::Black
        };
        let human_seat = if given(ModeToken::Computer) {
            Seat::Computer
        } else {
            Seat::Human
        };
        let other_seat = if given(ModeToken::Players) {
            Seat::Human
        } else {
            Seat::Computer
        };

        Players::new(human_color, human_seat, other_seat)
    }
}

/// Who makes the moves for a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer,
}

/// Seat assignment for both colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    pub black: Seat,
    pub white: Seat,
}

impl Players {
    fn new(first_color: Color, first: Seat, other: Seat) -> Self {
        match first_color {
            Color::Black => Self {
                black: first,
                white: other,
            },
            Color::White => Self {
                black: other,
                white: first,
            },
        }
    }

    pub fn seat(&self, color: Color) -> Seat {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players_for(args: &[&str]) -> Players {
        let argv = std::iter::once("reversi").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().players()
    }

    #[test]
    fn test_default_is_human_black() {
        assert_eq!(
            players_for(&[]),
            Players {
                black: Seat::Human,
                white: Seat::Computer
            }
        );
    }

    #[test]
    fn test_human_white() {
        assert_eq!(
            players_for(&["W"]),
            Players {
                black: Seat::Computer,
                white: Seat::Human
            }
        );
    }

    #[test]
    fn test_computer_vs_computer() {
        let all_computer = Players {
            black: Seat::Computer,
            white: Seat::Computer,
        };
        assert_eq!(players_for(&["c"]), all_computer);
        assert_eq!(players_for(&["W", "c"]), all_computer);
    }

    #[test]
    fn test_human_vs_human() {
        let all_human = Players {
            black: Seat::Human,
            white: Seat::Human,
        };
        assert_eq!(players_for(&["p"]), all_human);
        assert_eq!(players_for(&["B", "p"]), all_human);
    }

    #[test]
    fn test_color_only_read_from_first_token() {
        // W in second position is ignored
        assert_eq!(
            players_for(&["c", "W"]),
            Players {
                black: Seat::Computer,
                white: Seat::Computer
            }
        );
        assert_eq!(
            players_for(&["p", "W"]).seat(Color::White),
            Seat::Human
        );
    }

    #[test]
    fn test_both_c_and_p() {
        // The human's seat goes to the computer, the other seat to a human
        assert_eq!(
            players_for(&["c", "p"]),
            Players {
                black: Seat::Computer,
                white: Seat::Human
            }
        );
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        assert!(Cli::try_parse_from(["reversi", "x"]).is_err());
        assert!(Cli::try_parse_from(["reversi", "b"]).is_err());
        assert!(Cli::try_parse_from(["reversi", "B", "c", "p"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from(["reversi", "c", "--seed", "42", "--format", "json"]).unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.delay_ms, 0);
    }
}

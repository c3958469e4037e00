//! One game session: prompt, read or pick a move, apply it, repeat.

use crate::config::{Players, Seat};
use crate::render::render_board;
use reversi_core::{Bot, Color, GameError, GameEvent, GameState, Score, Square};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Token that ends the session immediately
pub const EXIT_TOKEN: &str = "exit";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("computer player for {0} was asked to move without a legal move")]
    NoLegalMove(Color),

    #[error("no computer player is seated for {0}")]
    MissingBot(Color),
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: Score,
    pub turns: u32,
    /// Left with `exit` or end of input rather than by the rules
    pub aborted: bool,
}

/// Drives one game between the configured seats
pub struct Session<R, W> {
    game: GameState,
    players: Players,
    bots: Vec<Bot>,
    input: R,
    output: W,
    delay: Duration,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Set up a game from the standard position.
    ///
    /// With a seed, Black's computer uses `seed` and White's `seed + 1`.
    pub fn new(players: Players, seed: Option<u64>, input: R, output: W) -> Self {
        let bots = [Color::Black, Color::White]
            .into_iter()
            .filter(|&c| players.seat(c) == Seat::Computer)
            .map(|c| match seed {
                Some(seed) => Bot::with_seed(c, seed.wrapping_add(c as u64)),
                None => Bot::new(c),
            })
            .collect();

        Self {
            game: GameState::new(),
            players,
            bots,
            input,
            output,
            delay: Duration::ZERO,
        }
    }

    /// Pause after every computer move
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Play until the game ends or a side types `exit`
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        info!(players = ?self.players, "session started");
        let mut aborted = false;

        loop {
            write!(self.output, "{}", render_board(self.game.board()))?;
            let color = self.game.current_color();
            write!(self.output, "{color} to move: ")?;
            self.output.flush()?;

            let token = match self.players.seat(color) {
                Seat::Human => self.read_token()?,
                Seat::Computer => {
                    let square = self.computer_move(color)?;
                    writeln!(self.output, "{square}")?;
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                    Some(square.to_string())
                }
            };
            writeln!(self.output)?;

            let Some(token) = token.filter(|t| t != EXIT_TOKEN) else {
                info!(%color, "session left before the end");
                writeln!(self.output, "Goodbye")?;
                aborted = true;
                break;
            };

            let square = match Square::from_token(&token) {
                Ok(square) => square,
                Err(e) => {
                    debug!(%token, error = %e, "malformed move");
                    writeln!(self.output, "Enter a move in the form f5 ({e})")?;
                    continue;
                }
            };

            match self.game.apply_move(square) {
                Ok(event) => log_event(&event),
                Err(GameError::IllegalMove(_)) => {
                    debug!(%square, %color, "illegal move");
                    writeln!(self.output, "You cannot place a disc on {square}")?;
                    continue;
                }
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    break;
                }
            }

            if self.game.evaluate_game_over() {
                writeln!(self.output, "Game over")?;
                break;
            }

            match self.game.attempt_pass() {
                Ok(event) => {
                    log_event(&event);
                    writeln!(self.output, "{} has no legal move and passes", event.color())?;
                    writeln!(self.output)?;
                }
                Err(GameError::MustPlace) => {}
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    break;
                }
            }
        }

        write!(self.output, "{}", render_board(self.game.board()))?;
        writeln!(self.output)?;
        self.output.flush()?;

        let summary = SessionSummary {
            score: self.game.summarize(),
            turns: self.game.turn_count(),
            aborted,
        };
        info!(
            black = summary.score.black,
            white = summary.score.white,
            turns = summary.turns,
            "session finished"
        );
        Ok(summary)
    }

    /// One line from the human, without its line ending; `None` at end of input
    fn read_token(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    fn computer_move(&mut self, color: Color) -> Result<Square, SessionError> {
        let bot = self
            .bots
            .iter_mut()
            .find(|b| b.color == color)
            .ok_or(SessionError::MissingBot(color))?;
        bot.choose_move(&self.game)
            .ok_or(SessionError::NoLegalMove(color))
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::DiscPlaced {
            color,
            square,
            flipped,
        } => debug!(%color, %square, flipped = flipped.len(), "disc placed"),
        GameEvent::Passed { color } => debug!(%color, "passed"),
    }
}

//! Final result of a session, as text or JSON.

use reversi_core::{Outcome, Score};
use serde::Serialize;

/// What the driver prints when the session ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalReport {
    pub black: u32,
    pub white: u32,
    pub outcome: Outcome,
    /// Placements made, passes excluded
    pub turns: u32,
    /// The session was left with `exit` before the game ended
    pub aborted: bool,
}

impl FinalReport {
    pub fn new(score: Score, turns: u32, aborted: bool) -> Self {
        Self {
            black: score.black,
            white: score.white,
            outcome: score.outcome(),
            turns,
            aborted,
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Black: {}\nWhite: {}\n{}\n",
            self.black, self.white, self.outcome
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report() {
        let report = FinalReport::new(Score { black: 40, white: 24 }, 60, false);
        assert_eq!(report.to_text(), "Black: 40\nWhite: 24\nBlack wins\n");
    }

    #[test]
    fn test_json_report() {
        let report = FinalReport::new(Score { black: 32, white: 32 }, 60, false);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["black"], 32);
        assert_eq!(value["white"], 32);
        assert_eq!(value["outcome"], "Draw");
        assert_eq!(value["aborted"], false);
    }
}

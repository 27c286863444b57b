//! Plain-text rendering of a battle, one line per concern.

use crate::battle::types::{Outcome, RoundResult, Summary};

/// Details text saved when nothing has been simulated yet
pub const NO_RESULT: &str = "No result";

pub fn status_line(summary: &Summary) -> String {
    let winner = match summary.outcome {
        Outcome::Jedi => "JEDI",
        Outcome::Sith => "SITH",
        Outcome::Draw => "Draw",
    };
    format!("Last simulation: winner — {}", winner)
}

pub fn score_line(summary: &Summary) -> String {
    format!("Jedi {} X Sith {}", summary.jedi, summary.sith)
}

/// One `Round N: winner` line per round
pub fn details_text(results: &[RoundResult]) -> String {
    results
        .iter()
        .map(|r| format!("Round {}: {}", r.round, r.winner))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tally::tally;
    use crate::battle::types::Side;

    #[test]
    fn test_report_for_jedi_win() {
        let results = vec![
            RoundResult { round: 1, winner: Side::Jedi },
            RoundResult { round: 2, winner: Side::Sith },
            RoundResult { round: 3, winner: Side::Jedi },
        ];
        let summary = tally(&results);

        assert_eq!(status_line(&summary), "Last simulation: winner — JEDI");
        assert_eq!(score_line(&summary), "Jedi 2 X Sith 1");
        assert_eq!(details_text(&results), "Round 1: jedi\nRound 2: sith\nRound 3: jedi");
    }

    #[test]
    fn test_report_for_draw() {
        let summary = tally(&[]);
        assert_eq!(status_line(&summary), "Last simulation: winner — Draw");
        assert_eq!(score_line(&summary), "Jedi 0 X Sith 0");
        assert_eq!(details_text(&[]), "");
    }
}

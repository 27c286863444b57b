use crate::battle::types::{Outcome, RoundResult, Side, Summary};
use std::cmp::Ordering;

/// Count wins per side and label the overall outcome
pub fn tally(results: &[RoundResult]) -> Summary {
    let mut jedi = 0u32;
    let mut sith = 0u32;

    for result in results {
        match result.winner {
            Side::Jedi => jedi += 1,
            Side::Sith => sith += 1,
        }
    }

    let outcome = match jedi.cmp(&sith) {
        Ordering::Greater => Outcome::Jedi,
        Ordering::Less => Outcome::Sith,
        Ordering::Equal => Outcome::Draw,
    };

    Summary { jedi, sith, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounds(winners: &[Side]) -> Vec<RoundResult> {
        winners
            .iter()
            .enumerate()
            .map(|(i, &winner)| RoundResult { round: i as u32 + 1, winner })
            .collect()
    }

    #[test]
    fn test_empty_is_draw() {
        let summary = tally(&[]);
        assert_eq!(summary, Summary { jedi: 0, sith: 0, outcome: Outcome::Draw });
    }

    #[test]
    fn test_jedi_majority() {
        let results = rounds(&[Side::Jedi, Side::Sith, Side::Jedi]);
        assert_eq!(
            tally(&results),
            Summary { jedi: 2, sith: 1, outcome: Outcome::Jedi }
        );
    }

    #[test]
    fn test_sith_majority() {
        let results = rounds(&[Side::Sith, Side::Sith, Side::Jedi, Side::Sith]);
        assert_eq!(
            tally(&results),
            Summary { jedi: 1, sith: 3, outcome: Outcome::Sith }
        );
    }

    #[test]
    fn test_even_split_is_draw() {
        let results = rounds(&[Side::Jedi, Side::Sith]);
        assert_eq!(
            tally(&results),
            Summary { jedi: 1, sith: 1, outcome: Outcome::Draw }
        );
    }

    #[test]
    fn test_tally_is_pure() {
        let results = rounds(&[Side::Sith, Side::Jedi, Side::Sith]);
        let before = results.clone();

        let first = tally(&results);
        let second = tally(&results);

        assert_eq!(first, second);
        assert_eq!(results, before, "tally should not touch its input");
        assert_eq!(first.total_rounds(), results.len() as u32);
    }
}

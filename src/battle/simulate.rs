use crate::battle::types::{Favor, RoundResult, Side};
use crate::rng::RandomSource;
use thiserror::Error;

/// Rounds fought when the caller does not choose
pub const DEFAULT_ROUNDS: u32 = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BattleError {
    #[error("Round count cannot be negative (got {0})")]
    NegativeRounds(i64),
    #[error("Round count {0} is too large")]
    TooManyRounds(i64),
}

/// Check a user-supplied round count
pub fn validate_rounds(rounds: i64) -> Result<u32, BattleError> {
    if rounds < 0 {
        return Err(BattleError::NegativeRounds(rounds));
    }
    u32::try_from(rounds).map_err(|_| BattleError::TooManyRounds(rounds))
}

/// Simulate `rounds` independent rounds
///
/// Each round draws one roll from `rng`; the Jedi win when the roll is below
/// the bias for `favor`, otherwise the Sith do.
pub fn simulate_rounds<R: RandomSource + ?Sized>(
    rounds: u32,
    favor: Favor,
    rng: &mut R,
) -> Vec<RoundResult> {
    let bias = favor.jedi_bias();

    (1..=rounds)
        .map(|round| {
            let roll = rng.next_roll();
            let winner = if roll < bias { Side::Jedi } else { Side::Sith };
            RoundResult { round, winner }
        })
        .collect()
}

//! Many battles at once
//!
//! Battle `i` is seeded with `base_seed + i`, so a batch gives the same totals
//! for the same base seed no matter how rayon schedules the work.

use crate::battle::simulate::simulate_rounds;
use crate::battle::tally::tally;
use crate::battle::types::{Favor, Outcome};
use crate::rng::BattleRng;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Aggregated totals over a batch of battles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub battles: usize,
    pub rounds_per_battle: u32,
    pub jedi_rounds: u64,
    pub sith_rounds: u64,
    pub jedi_battles: usize,
    pub sith_battles: usize,
    pub draws: usize,
}

impl BatchStats {
    fn merge(mut self, other: BatchStats) -> BatchStats {
        self.jedi_rounds += other.jedi_rounds;
        self.sith_rounds += other.sith_rounds;
        self.jedi_battles += other.jedi_battles;
        self.sith_battles += other.sith_battles;
        self.draws += other.draws;
        self
    }

    pub fn total_rounds(&self) -> u64 {
        self.jedi_rounds + self.sith_rounds
    }

    /// Share of all rounds won by the Jedi (0.0 when no rounds were fought)
    pub fn jedi_round_fraction(&self) -> f64 {
        match self.total_rounds() {
            0 => 0.0,
            total => self.jedi_rounds as f64 / total as f64,
        }
    }

    pub fn battle_fraction(&self, outcome: Outcome) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        let count = match outcome {
            Outcome::Jedi => self.jedi_battles,
            Outcome::Sith => self.sith_battles,
            Outcome::Draw => self.draws,
        };
        count as f64 / self.battles as f64
    }
}

/// Run `battles` independent battles in parallel
pub fn run_batch(
    battles: usize,
    rounds: u32,
    favor: Favor,
    base_seed: u64,
    progress: &ProgressBar,
) -> BatchStats {
    log::debug!(
        "running {} battles of {} rounds (favor {}, base seed {})",
        battles, rounds, favor, base_seed
    );

    let totals = (0..battles)
        .into_par_iter()
        .map(|i| {
            let mut rng = BattleRng::new(Some(base_seed.wrapping_add(i as u64)));
            let summary = tally(&simulate_rounds(rounds, favor, &mut rng));
            progress.inc(1);

            let mut stats = BatchStats {
                jedi_rounds: u64::from(summary.jedi),
                sith_rounds: u64::from(summary.sith),
                ..Default::default()
            };
            match summary.outcome {
                Outcome::Jedi => stats.jedi_battles = 1,
                Outcome::Sith => stats.sith_battles = 1,
                Outcome::Draw => stats.draws = 1,
            }
            stats
        })
        .reduce(BatchStats::default, BatchStats::merge);

    BatchStats {
        battles,
        rounds_per_battle: rounds,
        ..totals
    }
}

pub mod batch;
pub mod report;
pub mod simulate;
pub mod tally;
pub mod types;

pub use batch::{run_batch, BatchStats};
pub use report::{details_text, score_line, status_line, NO_RESULT};
pub use simulate::{simulate_rounds, validate_rounds, BattleError, DEFAULT_ROUNDS};
pub use tally::tally;
pub use types::{Favor, Outcome, RoundResult, Side, Summary};

use clap::{Args, Parser, Subcommand};
use galaxy_starter::battle::{
    details_text, run_batch, score_line, simulate_rounds, status_line, tally, validate_rounds,
    Favor, Outcome, DEFAULT_ROUNDS, NO_RESULT,
};
use galaxy_starter::log_store::{LogEntry, LogStore, DEFAULT_LOG_FILE};
use galaxy_starter::rng::BattleRng;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(name = "galaxy-starter")]
#[command(about = "Minimal Jedi vs Sith battle simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File where saved results are kept
    #[arg(long, global = true, env = "GALAXY_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: String,
}

#[derive(Args)]
struct BattleArgs {
    /// Number of rounds per battle
    #[arg(short, long, default_value_t = i64::from(DEFAULT_ROUNDS), allow_negative_numbers = true)]
    rounds: i64,

    /// Side to favor: "jedi", "sith" or anything else for fair odds
    #[arg(short, long, default_value = "none")]
    favor: String,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,
}

impl BattleArgs {
    fn default_battle() -> Self {
        BattleArgs {
            rounds: i64::from(DEFAULT_ROUNDS),
            favor: "none".to_string(),
            seed: None,
        }
    }

    fn favor(&self) -> Favor {
        // Favor parsing is infallible; unknown values mean fair odds
        self.favor.parse().unwrap_or_default()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single battle (default)
    Run {
        #[command(flatten)]
        battle: BattleArgs,

        /// Append the round details to the log file
        #[arg(long)]
        save: bool,
    },

    /// Simulate many battles and report win rates
    Batch {
        #[command(flatten)]
        battle: BattleArgs,

        /// Number of battles to simulate
        #[arg(short, long, default_value = "10000")]
        battles: usize,
    },

    /// List saved results
    Logs,

    /// Remove all saved results
    Clear,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let store = LogStore::new(&cli.log_file);

    match cli.command {
        Some(Commands::Run { battle, save }) => run_battle(&store, &battle, save),
        Some(Commands::Batch { battle, battles }) => run_many(&battle, battles),
        Some(Commands::Logs) => list_logs(&store),
        Some(Commands::Clear) => clear_logs(&store),
        None => run_battle(&store, &BattleArgs::default_battle(), false),
    }
}

fn rounds_or_exit(args: &BattleArgs) -> u32 {
    match validate_rounds(args.rounds) {
        Ok(rounds) => rounds,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn run_battle(store: &LogStore, args: &BattleArgs, save: bool) {
    let rounds = rounds_or_exit(args);
    let favor = args.favor();
    let mut rng = BattleRng::new(args.seed);
    log::info!("battle: {} rounds, favor {}, seed {}", rounds, favor, rng.seed());

    let results = simulate_rounds(rounds, favor, &mut rng);
    let summary = tally(&results);
    let details = details_text(&results);

    println!("\n=== Galaxy Starter ===\n");
    println!("{}", status_line(&summary));
    println!("{}", score_line(&summary));
    if !details.is_empty() {
        println!("\n{}", details);
    }
    println!("\nSeed: {}", rng.seed());

    if save {
        let details = if details.is_empty() { NO_RESULT.to_string() } else { details };
        match store.append(LogEntry::now(details)) {
            Ok(count) => {
                println!("✓ Result saved to {}", store.path().display());
                println!("Logs: {}", count);
            }
            Err(e) => {
                eprintln!("✗ Failed to save result: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_many(args: &BattleArgs, battles: usize) {
    let rounds = rounds_or_exit(args);
    let favor = args.favor();
    let base_seed = BattleRng::new(args.seed).seed();

    println!("\n=== Galaxy Starter Batch ===\n");
    println!("Battles: {}", battles);
    println!("Rounds per battle: {}", rounds);
    println!("Favor: {} (Jedi win chance {:.0}%)", favor, favor.jedi_bias() * 100.0);
    println!("Seed: {}", base_seed);
    println!();

    let progress = ProgressBar::new(battles as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} battles ({eta})") {
        progress.set_style(style);
    }

    let start = std::time::Instant::now();
    let stats = run_batch(battles, rounds, favor, base_seed, &progress);
    progress.finish_and_clear();
    let elapsed = start.elapsed();

    println!("=== Results ===\n");
    println!(
        "Rounds won by Jedi: {:.1}% ({}/{})",
        stats.jedi_round_fraction() * 100.0,
        stats.jedi_rounds,
        stats.total_rounds()
    );
    for (label, outcome) in [("Jedi", Outcome::Jedi), ("Sith", Outcome::Sith), ("Draw", Outcome::Draw)] {
        let pct = stats.battle_fraction(outcome) * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:5} {:5.1}% {}", label, pct, bar);
    }

    println!(
        "\nSimulation completed in {:.2?} ({:.0} battles/sec)",
        elapsed,
        battles as f64 / elapsed.as_secs_f64()
    );
}

fn list_logs(store: &LogStore) {
    let entries = store.load();
    println!("Logs: {}", entries.len());
    for entry in &entries {
        println!("\n[{}]\n{}", entry.when, entry.details);
    }
}

fn clear_logs(store: &LogStore) {
    match store.clear() {
        Ok(()) => println!("Logs cleared."),
        Err(e) => {
            eprintln!("✗ Failed to clear logs: {}", e);
            std::process::exit(1);
        }
    }
}

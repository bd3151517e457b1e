//! Command-line high-card game.

use core::fmt;
use core::time::Duration;
use std::io::{self, Write as _};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, bail};
use clap::Parser;
use highcard::{Deck, Game, GameOptions, Player, Sleep};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PLAYER_NAMES: [&str; 3] = ["Alice", "Bob", "Karim"];

/// Deals a shuffled deck to Alice, Bob and Karim until it runs out.
#[derive(Debug, Parser)]
#[command(name = "highcard", version, about)]
struct Cli {
    /// Seed for the deck and cheaters. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds to pause between rounds.
    #[arg(long, default_value_t = 6)]
    delay: u64,

    /// Make the named player a cheater. Can be repeated.
    #[arg(long = "cheat", value_name = "NAME")]
    cheaters: Vec<String>,

    /// Enable debug logging on stderr.
    #[arg(long)]
    debug: bool,
}

/// Writes game text straight to stdout, flushing so each line shows up
/// before the pause between rounds.
struct StdoutWriter(io::Stdout);

impl fmt::Write for StdoutWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0
            .write_all(s.as_bytes())
            .and_then(|()| self.0.flush())
            .map_err(|_| fmt::Error)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug { "highcard=debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(cli.debug)
        .init();

    for name in &cli.cheaters {
        if !PLAYER_NAMES.contains(&name.as_str()) {
            bail!("unknown player '{name}', expected one of {PLAYER_NAMES:?}");
        }
    }

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::debug!(seed, "seeding game");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let players: Vec<Player> = PLAYER_NAMES
        .iter()
        .map(|&name| {
            if cli.cheaters.iter().any(|c| c == name) {
                Player::cheater(name, rng.random())
            } else {
                Player::new(name)
            }
        })
        .collect();

    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let options = GameOptions::default().with_round_delay(Duration::from_secs(cli.delay));
    let mut game = Game::new(&players, deck, options).context("setting up game")?;

    game.play(&mut StdoutWriter(io::stdout()), Sleep)
        .context("playing game")?;

    Ok(())
}

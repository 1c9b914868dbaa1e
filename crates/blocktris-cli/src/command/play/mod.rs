use blocktris_engine::BlockSeed;
use rand::Rng as _;

use self::{app::PlayApp, gravity::Gravity};
use crate::tui::Tui;

mod app;
mod gravity;

const DEFAULT_MAX_DELAY_MS: u64 = 1000;
const DEFAULT_MIN_DELAY_MS: u64 = 75;
const DEFAULT_DELAY_DECREASE_MS: u64 = 25;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the block sequence as 32 hex digits (random if omitted)
    #[clap(long)]
    seed: Option<BlockSeed>,
    /// Descent delay at score 0, in milliseconds
    #[clap(
        long,
        default_value_t = DEFAULT_MAX_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_delay_ms: u64,
    /// Lower bound for the descent delay, in milliseconds
    #[clap(
        long,
        default_value_t = DEFAULT_MIN_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    min_delay_ms: u64,
    /// How much faster descent gets per cleared row, in milliseconds
    #[clap(long, default_value_t = DEFAULT_DELAY_DECREASE_MS)]
    delay_decrease_ms: u64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            delay_decrease_ms: DEFAULT_DELAY_DECREASE_MS,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        max_delay_ms,
        min_delay_ms,
        delay_decrease_ms,
    } = arg;

    let gravity = Gravity::from_millis(*max_delay_ms, *min_delay_ms, *delay_decrease_ms);
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut app = PlayApp::new(seed, gravity);

    Tui::new().run(&mut app)?;

    eprintln!("Seed: {}", app.seed());
    eprintln!("Score: {}", app.game().score());
    Ok(())
}

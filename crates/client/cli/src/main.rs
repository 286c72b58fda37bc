//! Console entry point.
use anyhow::Result;
use puzzle_cli::{CliApp, CliConfig, logging};
use puzzle_core::{GameEngine, PcgRng};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    let seed = config.seed_or_clock();
    tracing::info!(seed, max_turns = config.max_turns, "starting session");

    let mut rng = PcgRng::new(seed);
    let engine = GameEngine::new(&config.game_config(), &mut rng);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    CliApp::new(engine, stdin.lock(), stdout.lock()).run()
}

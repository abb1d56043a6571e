//! Memory-matching card game.
//!
//! The engine lives in [`game`] and is purely synchronous. A [`room::Room`]
//! owns one session at a time, drives its timers through a [`clock::Clock`]
//! and broadcasts display events to whatever observers sit at it.
pub mod cards;
pub mod clock;
pub mod config;
pub mod game;
pub mod players;
pub mod roster;
pub mod room;
pub mod theme;

#[cfg(feature = "web")]
pub mod wasm;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Index of a card on the board (0-based, stable once dealt).
pub type Position = usize;
/// Completed pair comparisons in a session.
pub type Moves = u32;
/// Whole seconds elapsed in a session.
pub type Seconds = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Default number of distinct pairs on the board.
pub const PAIRS: usize = 8;
/// How long a mismatched pair stays face up before flipping back.
pub const MISMATCH_DELAY: std::time::Duration = std::time::Duration::from_millis(600);
/// Period of the session timer.
pub const TICK_PERIOD: std::time::Duration = std::time::Duration::from_secs(1);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `logs/<unix>.log`. The terminal only gets warnings
/// unless `verbose` is set, so the board render stays readable.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        match verbose {
            true => log::LevelFilter::Info,
            false => log::LevelFilter::Warn,
        },
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

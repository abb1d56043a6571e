//! moranguinho terminal binary
//!
//! Plays the memory game in the terminal, lists the character roster,
//! and manages the persisted light/dark theme.

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap::builder::TypedValueParser;
use moranguinho::config::Config;
use moranguinho::players::*;
use moranguinho::room::*;
use moranguinho::roster::CHARACTERS;
use moranguinho::theme::*;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "moranguinho", version, about = "Memory game with fruity friends")]
struct Args {
    /// echo info logs to the terminal
    #[arg(short, long, global = true)]
    verbose: bool,
    /// theme preference file (defaults to the user config directory)
    #[arg(long, global = true)]
    theme_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// play a round of the memory game
    Play {
        /// distinct pairs on the board
        #[arg(short, long, default_value_t = moranguinho::PAIRS, value_parser = clap::value_parser!(u8).range(1..=8).map(usize::from))]
        pairs: usize,
        /// fixed shuffle seed
        #[arg(short, long)]
        seed: Option<u64>,
        /// milliseconds a mismatched pair stays face up
        #[arg(short, long, default_value_t = 600)]
        delay: u64,
        /// let the computer play
        #[arg(short, long)]
        auto: bool,
    },
    /// show or change the theme
    Theme {
        #[arg(value_enum, default_value_t = Switch::Show)]
        switch: Switch,
    },
    /// list the characters
    Roster,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Switch {
    Show,
    Toggle,
    Light,
    Dark,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    moranguinho::log(args.verbose)?;
    let preference = Preference::at(match args.theme_file {
        Some(path) => path,
        None => default_theme_file()?,
    });
    match args.command.unwrap_or(Action::Play {
        pairs: moranguinho::PAIRS,
        seed: None,
        delay: 600,
        auto: false,
    }) {
        Action::Play {
            pairs,
            seed,
            delay,
            auto,
        } => {
            let config = Config {
                seed,
                ..Config::default()
                    .with_pairs(pairs)
                    .with_delay(Duration::from_millis(delay))
            };
            play(config, preference.load()?, auto).await
        }
        Action::Theme { switch } => {
            log::info!("[theme] preference at {}", preference.path().display());
            let theme = match switch {
                Switch::Show => preference.load()?,
                Switch::Toggle => preference.toggle()?,
                Switch::Light => save(&preference, Theme::Light)?,
                Switch::Dark => save(&preference, Theme::Dark)?,
            };
            println!("{}", theme);
            Ok(())
        }
        Action::Roster => {
            CHARACTERS.iter().for_each(|c| println!("{}", c));
            Ok(())
        }
    }
}

async fn play(config: Config, theme: Theme, auto: bool) -> anyhow::Result<()> {
    let mut room = Room::from(config);
    let handle = room.handle();
    room.sit(Human::from(theme));
    if auto {
        room.sit(
            Fish::from(handle.clone())
                .with_pace(Duration::from_millis(400))
                .quitting(),
        );
    }
    // the prompt thread is the only sender of Quit in interactive play,
    // so it has already returned by the time the room closes
    let prompt = (!auto).then(|| {
        let handle = handle.clone();
        tokio::task::spawn_blocking(move || Human::prompt(handle))
    });
    handle.start()?;
    let snapshot = room.run().await;
    log::info!("left after {} moves", snapshot.moves);
    if let Some(prompt) = prompt {
        prompt.await.context("prompt thread panicked")??;
    }
    Ok(())
}

fn save(preference: &Preference, theme: Theme) -> anyhow::Result<Theme> {
    preference.save(theme)?;
    Ok(theme)
}

fn default_theme_file() -> anyhow::Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("moranguinho").join("theme.json"))
        .context("no config directory on this platform")
}

use crate::Seconds;
use crate::cards::State;
use crate::game::*;
use crate::room::*;
use crate::theme::Theme;
use colored::Colorize;
use dialoguer::Input;

/// Terminal player. Renders every board update in the chosen theme and
/// reads card numbers from stdin on a blocking thread.
#[derive(Debug, Default)]
pub struct Human {
    theme: Theme,
}

impl From<Theme> for Human {
    fn from(theme: Theme) -> Self {
        Self { theme }
    }
}

#[async_trait::async_trait]
impl Observer for Human {
    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Update(snapshot) => println!("\n{}", self.render(snapshot)),
            Event::Won(summary) => println!("\n{}\n", self.banner(summary)),
            Event::Tick(_) => {}
        }
    }
}

/// input loop
impl Human {
    /// Read commands until the player quits or stdin closes.
    /// Blocks, so run it with `tokio::task::spawn_blocking`.
    pub fn prompt(handle: Handle) -> anyhow::Result<()> {
        loop {
            let line = Input::<String>::new()
                .with_prompt("card # | r reset | n new | q quit")
                .report(false)
                .allow_empty(true)
                .interact_text();
            let command = match line {
                Ok(line) => Self::parse(&line),
                Err(e) => {
                    log::debug!("[human] input closed: {}", e);
                    Some(Command::Quit)
                }
            };
            match command {
                Some(Command::Quit) => return handle.quit(),
                Some(command) => handle.send(command)?,
                None => println!("{}", "enter a card number, r, n or q".dimmed()),
            }
        }
    }

    fn parse(line: &str) -> Option<Command> {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" => Some(Command::Quit),
            "r" | "reset" => Some(Command::Reset),
            "n" | "new" => Some(Command::Dismiss),
            other => other.parse().ok().map(Command::Activate),
        }
    }
}

/// rendering
impl Human {
    const COLUMNS: usize = 4;

    fn render(&self, snapshot: &Snapshot) -> String {
        let header = format!(
            "moves {}   time {}{}",
            snapshot.moves,
            timer(snapshot.elapsed),
            if snapshot.locked { "   ..." } else { "" }
        );
        let rows = snapshot
            .cards
            .chunks(Self::COLUMNS)
            .map(|row| {
                row.iter()
                    .map(|card| self.cell(card))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>();
        format!("{}\n{}", header, rows.join("\n"))
    }

    fn cell(&self, card: &CardView) -> String {
        let face = match card.glyph {
            Some(glyph) => format!(" {} ", glyph),
            None => format!("{:>3} ", card.position),
        };
        match (card.state, self.theme) {
            (State::Hidden, Theme::Light) => format!("[{}]", face).blue().to_string(),
            (State::Hidden, Theme::Dark) => format!("[{}]", face).bright_magenta().to_string(),
            (State::Revealed, Theme::Light) => format!("[{}]", face).bold().to_string(),
            (State::Revealed, Theme::Dark) => format!("[{}]", face).bold().bright_white().to_string(),
            (State::Matched, _) => format!("[{}]", face).dimmed().to_string(),
        }
    }

    fn banner(&self, summary: &Summary) -> String {
        let text = format!(
            "You won in {} with {} moves. Enter n to play again.",
            timer(summary.elapsed),
            summary.moves
        );
        match self.theme {
            Theme::Light => text.magenta().bold().to_string(),
            Theme::Dark => text.bright_cyan().bold().to_string(),
        }
    }
}

/// MM:SS, minutes keep growing past 99
pub fn timer(seconds: Seconds) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

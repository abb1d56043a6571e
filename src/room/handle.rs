use super::command::Command;
use crate::Position;
use anyhow::Context;
use tokio::sync::mpsc::UnboundedSender;

/// Cloneable remote control for a running Room.
#[derive(Debug, Clone)]
pub struct Handle(UnboundedSender<Command>);

impl From<UnboundedSender<Command>> for Handle {
    fn from(sender: UnboundedSender<Command>) -> Self {
        Self(sender)
    }
}

impl Handle {
    pub fn send(&self, command: Command) -> anyhow::Result<()> {
        self.0.send(command).context("room is closed")
    }
    pub fn start(&self) -> anyhow::Result<()> {
        self.send(Command::Start)
    }
    pub fn reset(&self) -> anyhow::Result<()> {
        self.send(Command::Reset)
    }
    pub fn activate(&self, position: Position) -> anyhow::Result<()> {
        self.send(Command::Activate(position))
    }
    pub fn dismiss(&self) -> anyhow::Result<()> {
        self.send(Command::Dismiss)
    }
    pub fn quit(&self) -> anyhow::Result<()> {
        self.send(Command::Quit)
    }
}

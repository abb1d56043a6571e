use crate::Position;

/// Inbound actions a room accepts from its players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// deal a fresh board
    Start,
    /// abandon the current board and deal again
    Reset,
    /// flip the card at a position
    Activate(Position),
    /// close the win summary, which deals again
    Dismiss,
    /// shut the room down
    Quit,
}

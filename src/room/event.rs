use crate::Seconds;
use crate::game::*;

/// Events broadcast by a Room to every observer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// the board, counters or lock changed
    Update(Snapshot),
    /// the session timer advanced
    Tick(Seconds),
    /// the last pair was matched
    Won(Summary),
}

use crate::Moves;
use crate::Seconds;

/// Final tally of a won session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub elapsed: Seconds,
    pub moves: Moves,
}

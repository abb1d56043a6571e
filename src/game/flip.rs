use super::summary::Summary;
use crate::Position;

/// Outcome of activating a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// locked window, session not running, out of range, or card already face up
    Ignored,
    /// first card of a pair is face up
    Revealed(Position),
    /// second card shares the first's token, both are now matched
    Matched(Position, Position),
    /// second card differs; the pair stays face up until rolled back
    Mismatched(Position, Position),
    /// the last pair was matched
    Won(Summary),
}

impl Flip {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Revealed(_) => "revealed",
            Self::Matched(..) => "matched",
            Self::Mismatched(..) => "mismatched",
            Self::Won(_) => "won",
        }
    }
}

impl std::fmt::Display for Flip {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ignored => write!(f, "ignored"),
            Self::Revealed(p) => write!(f, "revealed #{}", p),
            Self::Matched(a, b) => write!(f, "matched #{} #{}", a, b),
            Self::Mismatched(a, b) => write!(f, "mismatched #{} #{}", a, b),
            Self::Won(s) => write!(f, "won in {}s with {} moves", s.elapsed, s.moves),
        }
    }
}

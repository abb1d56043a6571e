use crate::Position;

/// Cards revealed but not yet resolved.
///
/// There is no state for a third card: a pair waiting on its verdict
/// is the locked window, and every flip is ignored until it resolves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    One(Position),
    Two(Position, Position),
}

impl Selection {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Two(..))
    }
}

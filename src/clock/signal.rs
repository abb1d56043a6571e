/// Counter bumped on every deal. Timers stamp their signals with it so a
/// room can drop anything scheduled for a session that no longer exists.
pub type Epoch = u64;

/// Deferred wake-ups delivered by the [`super::Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// one timer period has passed
    Tick(Epoch),
    /// the mismatch display delay is over
    Rollback(Epoch),
}

impl Signal {
    pub fn epoch(&self) -> Epoch {
        match self {
            Self::Tick(epoch) | Self::Rollback(epoch) => *epoch,
        }
    }
}

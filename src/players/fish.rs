use crate::room::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// CPU player that flips a random face-down card whenever the board accepts input.
/// Has no memory, so it mostly demonstrates the lock and rollback cycle.
pub struct Fish {
    handle: Handle,
    rng: SmallRng,
    pace: Duration,
    quit: bool,
}

impl From<Handle> for Fish {
    fn from(handle: Handle) -> Self {
        Self {
            handle,
            rng: SmallRng::from_os_rng(),
            pace: Duration::ZERO,
            quit: false,
        }
    }
}

impl Fish {
    /// wait this long before each flip, so a human can follow along
    pub fn with_pace(self, pace: Duration) -> Self {
        Self { pace, ..self }
    }
    /// close the room once the board is cleared
    pub fn quitting(self) -> Self {
        Self { quit: true, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..self
        }
    }
}

#[async_trait::async_trait]
impl Observer for Fish {
    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Update(snapshot) => {
                let Some(position) = snapshot.playable().choose(&mut self.rng).copied() else {
                    return;
                };
                if !self.pace.is_zero() {
                    tokio::time::sleep(self.pace).await;
                }
                if let Err(e) = self.handle.activate(position) {
                    log::warn!("[fish] {}", e);
                }
            }
            Event::Won(_) if self.quit => {
                if let Err(e) = self.handle.quit() {
                    log::warn!("[fish] {}", e);
                }
            }
            Event::Won(_) | Event::Tick(_) => {}
        }
    }
}

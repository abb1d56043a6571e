use super::event::*;

/// Anything that wants to watch a room: terminal renderers, bots, test probes.
///
/// Observers run in their own task (see [`super::Actor`]) so a slow render
/// never stalls the room. Observers that also play hold a [`super::Handle`]
/// and answer events with commands.
#[async_trait::async_trait]
pub trait Observer: Send {
    /// Receive every event the room broadcasts, in order.
    async fn notify(&mut self, event: &Event);
}

use super::*;
use tokio::sync::mpsc::*;

/// Wrapper that runs an Observer in its own async task.
///
/// - Room broadcasts Event to every actor's inbox
/// - Actor forwards each event to Observer::notify, one at a time
/// - Actor exits once the room drops its inbox
pub struct Actor {
    id: usize,
    observer: Box<dyn Observer>,
    getter: UnboundedReceiver<Event>,
}

impl Actor {
    pub fn spawn(id: usize, observer: Box<dyn Observer>) -> UnboundedSender<Event> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            id,
            observer,
            getter: rx,
        };
        tokio::spawn(actor.run());
        tx
    }
    async fn run(mut self) {
        while let Some(ref event) = self.getter.recv().await {
            self.observer.notify(event).await;
        }
        log::debug!("[actor] O{} left the room", self.id);
    }
}

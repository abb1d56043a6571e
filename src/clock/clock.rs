use super::*;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Single time source for a room.
///
/// Schedules two kinds of tasks, a repeating tick and a one-shot delay, and
/// delivers their [`Signal`]s on the room's channel. Every task is owned by
/// the returned [`Timer`], so nothing outlives the handle that scheduled it.
#[derive(Debug, Clone)]
pub struct Clock {
    sender: UnboundedSender<Signal>,
}

impl Clock {
    pub fn new(sender: UnboundedSender<Signal>) -> Self {
        Self { sender }
    }

    /// Send `signal` once per `period`, first one a full period from now.
    pub fn every(&self, period: Duration, signal: Signal) -> Timer {
        let sender = self.sender.clone();
        Timer::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(signal).is_err() {
                    break;
                }
            }
        })
    }

    /// Send `signal` once after `delay`.
    pub fn after(&self, delay: Duration, signal: Signal) -> Timer {
        let sender = self.sender.clone();
        Timer::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(signal);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    use tokio::time::Instant;

    const SECOND: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn repeats_every_period() {
        let (tx, mut rx) = unbounded_channel();
        let clock = Clock::new(tx);
        let start = Instant::now();
        let _timer = clock.every(SECOND, Signal::Tick(1));
        for n in 1..=3 {
            assert_eq!(rx.recv().await, Some(Signal::Tick(1)));
            assert!(start.elapsed() >= SECOND * n);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let (tx, mut rx) = unbounded_channel();
        let clock = Clock::new(tx);
        let start = Instant::now();
        let _timer = clock.after(Duration::from_millis(600), Signal::Rollback(4));
        assert_eq!(rx.recv().await, Some(Signal::Rollback(4)));
        assert!(start.elapsed() >= Duration::from_millis(600));
        let silence = tokio::time::timeout(SECOND * 10, rx.recv()).await;
        assert!(silence.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks() {
        let (tx, mut rx) = unbounded_channel();
        let clock = Clock::new(tx);
        let mut timer = clock.every(SECOND, Signal::Tick(0));
        assert_eq!(rx.recv().await, Some(Signal::Tick(0)));
        timer.cancel();
        assert!(!timer.is_scheduled());
        let silence = tokio::time::timeout(SECOND * 10, rx.recv()).await;
        assert!(silence.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let (tx, mut rx) = unbounded_channel();
        let clock = Clock::new(tx);
        drop(clock.after(SECOND, Signal::Rollback(0)));
        let silence = tokio::time::timeout(SECOND * 10, rx.recv()).await;
        assert!(silence.is_err());
    }

    #[test]
    fn degrades_without_runtime() {
        let (tx, _rx) = unbounded_channel();
        let clock = Clock::new(tx);
        assert!(!clock.every(SECOND, Signal::Tick(0)).is_scheduled());
        assert!(!clock.after(SECOND, Signal::Rollback(0)).is_scheduled());
    }
}

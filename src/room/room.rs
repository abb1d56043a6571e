use super::*;
use crate::Position;
use crate::clock::*;
use crate::config::Config;
use crate::game::*;
use rand::rngs::SmallRng;
use tokio::sync::mpsc::*;

/// Central coordinator for a live memory game.
/// Owns the single Session, turns commands into engine calls, and
/// broadcasts an Event after every mutation.
///
/// Key responsibilities:
/// - Deal a fresh session on Start and Reset, and on Dismiss after a win
/// - Keep exactly one session timer running, cancelled on every deal
/// - Schedule the rollback of a mismatched pair after the configured delay
/// - Drop timer signals stamped with an outdated epoch
///
/// Room runs a loop over two inboxes, commands from players and signals from
/// its clock, until it receives Quit.
#[derive(Debug)]
pub struct Room {
    config: Config,
    rng: SmallRng,
    epoch: Epoch,
    session: Session,
    clock: Clock,
    ticker: Timer,
    rollback: Timer,
    commands: Channel<Command>,
    signals: Channel<Signal>,
    observers: Vec<UnboundedSender<Event>>,
}

enum Inbox {
    Command(Command),
    Signal(Signal),
}

impl From<Config> for Room {
    fn from(config: Config) -> Self {
        let signals = Channel::default();
        Self {
            rng: config.rng(),
            clock: Clock::new(signals.tx().clone()),
            config,
            epoch: 0,
            session: Session::default(),
            ticker: Timer::default(),
            rollback: Timer::default(),
            commands: Channel::default(),
            signals,
            observers: Vec::new(),
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::from(Config::default())
    }
}

impl Room {
    /// Run until Quit. Returns the board as it was left.
    pub async fn run(mut self) -> Snapshot {
        log::info!("[room] open with {} pairs", self.config.symbols().len());
        loop {
            let inbox = tokio::select! {
                Some(command) = self.commands.rx().recv() => Inbox::Command(command),
                Some(signal) = self.signals.rx().recv() => Inbox::Signal(signal),
                else => break,
            };
            match inbox {
                Inbox::Command(Command::Quit) => break,
                Inbox::Command(command) => self.command(command),
                Inbox::Signal(signal) => self.signal(signal),
            }
        }
        self.ticker.cancel();
        self.rollback.cancel();
        log::info!("[room] closed");
        self.session.snapshot()
    }

    pub fn sit<O>(&mut self, observer: O)
    where
        O: Observer + 'static,
    {
        self.observers
            .push(Actor::spawn(self.observers.len(), Box::new(observer)));
    }

    pub fn handle(&self) -> Handle {
        Handle::from(self.commands.tx().clone())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Room {
    fn command(&mut self, command: Command) {
        log::debug!("[room] {:?}", command);
        match command {
            Command::Start | Command::Reset => self.deal(),
            Command::Dismiss if self.session.phase() == Phase::Won => self.deal(),
            Command::Dismiss => log::debug!("[room] no summary to dismiss"),
            Command::Activate(position) => self.activate(position),
            Command::Quit => {}
        }
    }

    fn signal(&mut self, signal: Signal) {
        if signal.epoch() != self.epoch {
            log::trace!("[room] dropping stale {:?}", signal);
            return;
        }
        match signal {
            Signal::Tick(_) => self.tick(),
            Signal::Rollback(_) => self.resolve(),
        }
    }
}

impl Room {
    fn deal(&mut self) {
        self.ticker.cancel();
        self.rollback.cancel();
        self.epoch += 1;
        self.session.start(self.config.symbols(), &mut self.rng);
        self.ticker = self
            .clock
            .every(self.config.period, Signal::Tick(self.epoch));
        self.update();
    }

    fn activate(&mut self, position: Position) {
        let flip = self.session.flip(position);
        log::debug!("[room] #{} {}", position, flip);
        match flip {
            Flip::Ignored => {}
            Flip::Revealed(_) | Flip::Matched(..) => self.update(),
            Flip::Mismatched(..) => {
                self.update();
                self.defer();
            }
            Flip::Won(summary) => {
                self.ticker.cancel();
                self.update();
                log::info!("[room] won in {}s, {} moves", summary.elapsed, summary.moves);
                self.broadcast(Event::Won(summary));
            }
        }
    }

    fn defer(&mut self) {
        self.rollback = self
            .clock
            .after(self.config.delay, Signal::Rollback(self.epoch));
        if !self.rollback.is_scheduled() {
            self.resolve();
        }
    }

    fn resolve(&mut self) {
        if self.session.rollback() {
            self.update();
        }
    }

    fn tick(&mut self) {
        if self.session.tick() {
            self.broadcast(Event::Tick(self.session.elapsed()));
        }
    }

    fn update(&self) {
        self.broadcast(Event::Update(self.session.snapshot()));
    }

    fn broadcast(&self, event: Event) {
        self.observers
            .iter()
            .map(|inbox| inbox.send(event.clone()))
            .collect::<Vec<Result<_, _>>>()
            .into_iter()
            .enumerate()
            .filter_map(|(i, res)| res.err().map(|e| (i, e)))
            .for_each(|(i, e)| log::warn!("failed broadcast to O{}: {:?}", i, e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;
    use std::time::Duration;
    use tokio::time::Instant;

    /// forwards every event into a channel the test can read
    struct Probe(UnboundedSender<Event>);

    #[async_trait::async_trait]
    impl Observer for Probe {
        async fn notify(&mut self, event: &Event) {
            let _ = self.0.send(event.clone());
        }
    }

    fn config() -> Config {
        Config::default().with_pairs(4).with_seed(17)
    }

    /// the board a room built from this config deals first
    fn deck(config: &Config) -> Deck {
        Deck::deal(config.symbols(), &mut config.rng())
    }

    fn room(config: Config) -> (Handle, UnboundedReceiver<Event>) {
        let (tx, rx) = unbounded_channel();
        let mut room = Room::from(config);
        room.sit(Probe(tx));
        let handle = room.handle();
        tokio::spawn(room.run());
        (handle, rx)
    }

    async fn update(rx: &mut UnboundedReceiver<Event>) -> Snapshot {
        loop {
            match rx.recv().await {
                Some(Event::Update(snapshot)) => return snapshot,
                Some(_) => continue,
                None => panic!("room closed"),
            }
        }
    }

    fn pair(deck: &Deck, token: &str) -> (Position, Position) {
        let mut cards = deck.iter().filter(|c| c.token() == token);
        let a = cards.next().map(Card::position).expect("first of pair");
        let b = cards.next().map(Card::position).expect("second of pair");
        (a, b)
    }

    #[tokio::test(start_paused = true)]
    async fn start_deals_hidden_board() {
        let (handle, mut rx) = room(config());
        handle.start().unwrap();
        let snapshot = update(&mut rx).await;
        assert_eq!(snapshot.cards.len(), 8);
        assert_eq!(snapshot.moves, 0);
        assert_eq!(snapshot.elapsed, 0);
        assert_eq!(snapshot.phase, Phase::Running);
        assert!(snapshot.cards.iter().all(|c| c.state == State::Hidden));
    }

    #[tokio::test(start_paused = true)]
    async fn mismatch_rolls_back_after_delay() {
        let config = config();
        let deck = deck(&config);
        let (a, _) = pair(&deck, SYMBOLS[0].token());
        let (b, _) = pair(&deck, SYMBOLS[1].token());
        let (c, _) = pair(&deck, SYMBOLS[2].token());
        let (handle, mut rx) = room(config);
        handle.start().unwrap();
        update(&mut rx).await;
        handle.activate(a).unwrap();
        update(&mut rx).await;
        handle.activate(b).unwrap();
        let pending = update(&mut rx).await;
        let start = Instant::now();
        assert!(pending.locked);
        assert_eq!(pending.moves, 1);
        assert_eq!(pending.cards[b].state, State::Revealed);
        handle.activate(c).unwrap();
        let resolved = update(&mut rx).await;
        assert!(start.elapsed() >= Duration::from_millis(600));
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(!resolved.locked);
        assert_eq!(resolved.moves, 1);
        assert!(resolved.cards.iter().all(|c| c.state == State::Hidden));
        handle.activate(c).unwrap();
        let next = update(&mut rx).await;
        assert_eq!(next.cards[c].state, State::Revealed);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_second() {
        let (handle, mut rx) = room(config());
        handle.start().unwrap();
        let start = Instant::now();
        let mut ticks = Vec::new();
        while ticks.len() < 3 {
            if let Some(Event::Tick(seconds)) = rx.recv().await {
                ticks.push(seconds);
            }
        }
        assert_eq!(ticks, vec![1, 2, 3]);
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_leaves_one_ticker() {
        let (handle, mut rx) = room(config());
        handle.start().unwrap();
        while !matches!(rx.recv().await, Some(Event::Tick(2))) {}
        handle.reset().unwrap();
        let deadline = Instant::now() + Duration::from_millis(5500);
        let mut ticks = Vec::new();
        while let Ok(Some(event)) = tokio::time::timeout_at(deadline, rx.recv()).await {
            if let Event::Tick(seconds) = event {
                ticks.push(seconds);
            }
        }
        assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn win_stops_the_clock() {
        let config = Config::default().with_pairs(2).with_seed(3);
        let deck = deck(&config);
        let (a, b) = pair(&deck, SYMBOLS[0].token());
        let (c, d) = pair(&deck, SYMBOLS[1].token());
        let (handle, mut rx) = room(config);
        handle.start().unwrap();
        for position in [a, b, c, d] {
            handle.activate(position).unwrap();
        }
        let summary = loop {
            match rx.recv().await {
                Some(Event::Won(summary)) => break summary,
                Some(_) => continue,
                None => panic!("room closed"),
            }
        };
        assert_eq!(summary.moves, 2);
        assert_eq!(summary.elapsed, 0);
        let silence = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(silence.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_deals_again() {
        let config = Config::default().with_pairs(1).with_seed(1);
        let (handle, mut rx) = room(config);
        handle.start().unwrap();
        handle.activate(0).unwrap();
        handle.activate(1).unwrap();
        while !matches!(rx.recv().await, Some(Event::Won(_))) {}
        handle.dismiss().unwrap();
        let snapshot = update(&mut rx).await;
        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.moves, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_mid_game_keeps_board() {
        let mut room = Room::from(config());
        let handle = room.handle();
        handle.start().unwrap();
        handle.activate(0).unwrap();
        handle.dismiss().unwrap();
        handle.quit().unwrap();
        let snapshot = room.run().await;
        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.cards[0].state, State::Revealed);
        assert_eq!(snapshot.moves, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_returns_final_board() {
        let mut room = Room::from(config());
        let handle = room.handle();
        handle.start().unwrap();
        handle.activate(0).unwrap();
        handle.quit().unwrap();
        let snapshot = room.run().await;
        assert_eq!(snapshot.cards[0].state, State::Revealed);
        assert!(room_is_closed(&handle));
    }

    fn room_is_closed(handle: &Handle) -> bool {
        handle.start().is_err()
    }
}

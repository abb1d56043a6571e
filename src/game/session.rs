use super::*;
use crate::Moves;
use crate::Position;
use crate::Seconds;
use crate::cards::*;
use rand::Rng;

/// One play-through of the memory game.
///
/// Owns the deck, the pending selection, and the move and time counters.
/// Pure and synchronous: time only advances through [`Session::tick`] and a
/// mismatched pair only flips back through [`Session::rollback`], so whoever
/// drives the session decides when those happen.
///
/// Invalid input is never an error. Flips that the rules forbid come back as
/// [`Flip::Ignored`] and leave the session untouched.
#[derive(Debug, Default, Clone)]
pub struct Session {
    deck: Deck,
    moves: Moves,
    elapsed: Seconds,
    selection: Selection,
    phase: Phase,
}

impl Session {
    /// A running session over a freshly shuffled deck.
    pub fn deal<R>(symbols: &[Symbol], rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut session = Self::default();
        session.start(symbols, rng);
        session
    }

    /// Discard everything and start over with a new deck.
    pub fn start<R>(&mut self, symbols: &[Symbol], rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        *self = Self {
            deck: Deck::deal(symbols, rng),
            phase: Phase::Running,
            ..Self::default()
        };
        log::debug!("[session] dealt {} cards", self.deck.len());
    }

    /// Restarting is starting again.
    pub fn reset<R>(&mut self, symbols: &[Symbol], rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.start(symbols, rng);
    }

    pub fn flip(&mut self, position: Position) -> Flip {
        if !self.phase.is_running() {
            return Flip::Ignored;
        }
        let selection = self.selection;
        match selection {
            Selection::Two(..) => Flip::Ignored,
            Selection::Empty if self.reveal(position) => {
                self.selection = Selection::One(position);
                Flip::Revealed(position)
            }
            Selection::One(first) if self.reveal(position) => {
                self.moves += 1;
                self.compare(first, position)
            }
            _ => Flip::Ignored,
        }
    }

    /// Turn a mismatched pair back face down and release the lock.
    /// Returns false when no verdict was pending.
    pub fn rollback(&mut self) -> bool {
        match self.selection {
            Selection::Two(a, b) => {
                self.conceal(a);
                self.conceal(b);
                self.selection = Selection::Empty;
                true
            }
            _ => false,
        }
    }

    /// One second passes. Only counts while running.
    pub fn tick(&mut self) -> bool {
        match self.phase.is_running() {
            true => {
                self.elapsed += 1;
                true
            }
            false => false,
        }
    }
}

impl Session {
    fn compare(&mut self, first: Position, second: Position) -> Flip {
        let pairs = self
            .deck
            .get(first)
            .zip(self.deck.get(second))
            .is_some_and(|(a, b)| a.pairs(b));
        match pairs {
            false => {
                self.selection = Selection::Two(first, second);
                Flip::Mismatched(first, second)
            }
            true => {
                self.settle(first);
                self.settle(second);
                self.selection = Selection::Empty;
                match self.deck.is_cleared() {
                    true => {
                        self.phase = Phase::Won;
                        log::debug!("[session] won {:?}", self.tally());
                        Flip::Won(self.tally())
                    }
                    false => Flip::Matched(first, second),
                }
            }
        }
    }
    fn reveal(&mut self, position: Position) -> bool {
        self.deck.get_mut(position).is_some_and(Card::reveal)
    }
    fn conceal(&mut self, position: Position) {
        if let Some(card) = self.deck.get_mut(position) {
            card.conceal();
        }
    }
    fn settle(&mut self, position: Position) {
        if let Some(card) = self.deck.get_mut(position) {
            card.settle();
        }
    }
    fn tally(&self) -> Summary {
        Summary {
            elapsed: self.elapsed,
            moves: self.moves,
        }
    }
}

impl Session {
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn moves(&self) -> Moves {
        self.moves
    }
    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn selection(&self) -> Selection {
        self.selection
    }
    pub fn is_locked(&self) -> bool {
        self.selection.is_locked()
    }
    /// cards currently face up but not matched
    pub fn revealed(&self) -> usize {
        self.deck
            .iter()
            .filter(|c| c.state() == State::Revealed)
            .count()
    }
    /// final tally, once the session is won
    pub fn summary(&self) -> Option<Summary> {
        (self.phase == Phase::Won).then(|| self.tally())
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cards: self.deck.iter().map(CardView::from).collect(),
            moves: self.moves,
            elapsed: self.elapsed,
            phase: self.phase,
            locked: self.is_locked(),
        }
    }
}

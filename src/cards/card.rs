use super::state::State;
use super::symbol::Symbol;
use crate::Position;

/// A single card dealt onto the board.
/// Two cards in a deck share each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    symbol: Symbol,
    position: Position,
    state: State,
}

impl Card {
    pub fn token(&self) -> &'static str {
        self.symbol.token()
    }
    pub fn glyph(&self) -> &'static str {
        self.symbol.glyph()
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn is_matched(&self) -> bool {
        self.state == State::Matched
    }
    pub fn pairs(&self, other: &Self) -> bool {
        self.token() == other.token()
    }
}

/// state transitions. each returns false and leaves the card
/// untouched when the transition is not allowed from the current state.
impl Card {
    /// Hidden -> Revealed
    pub fn reveal(&mut self) -> bool {
        self.shift(State::Hidden, State::Revealed)
    }
    /// Revealed -> Hidden
    pub fn conceal(&mut self) -> bool {
        self.shift(State::Revealed, State::Hidden)
    }
    /// Revealed -> Matched
    pub fn settle(&mut self) -> bool {
        self.shift(State::Revealed, State::Matched)
    }
    fn shift(&mut self, from: State, into: State) -> bool {
        match self.state == from {
            true => {
                self.state = into;
                true
            }
            false => false,
        }
    }
}

/// (symbol, position) isomorphism
/// every card is dealt face down
impl From<(Symbol, Position)> for Card {
    fn from((symbol, position): (Symbol, Position)) -> Self {
        Self {
            symbol,
            position,
            state: State::Hidden,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.state.is_face_up() {
            true => write!(f, "{}", self.symbol),
            false => write!(f, "??"),
        }
    }
}

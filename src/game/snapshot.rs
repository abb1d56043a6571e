use super::phase::Phase;
use crate::Moves;
use crate::Position;
use crate::Seconds;
use crate::cards::Card;
use crate::cards::State;

/// What the presentation layer may see of one card.
/// The glyph is withheld while the card is face down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CardView {
    pub position: Position,
    pub glyph: Option<&'static str>,
    pub state: State,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            position: card.position(),
            glyph: card.state().is_face_up().then(|| card.glyph()),
            state: card.state(),
        }
    }
}

/// Render state of a whole session, published after every mutation.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    pub cards: Vec<CardView>,
    pub moves: Moves,
    pub elapsed: Seconds,
    pub phase: Phase,
    pub locked: bool,
}

impl Snapshot {
    /// hidden cards a player could activate right now
    pub fn playable(&self) -> Vec<Position> {
        match self.phase.is_running() && !self.locked {
            false => Vec::new(),
            true => self
                .cards
                .iter()
                .filter(|c| c.state == State::Hidden)
                .map(|c| c.position)
                .collect(),
        }
    }
}

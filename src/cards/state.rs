/// Face of a single card on the board.
///
/// Moves forward only, except Revealed -> Hidden when a mismatched pair
/// is rolled back. Matched is terminal.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl State {
    /// Whether the glyph is visible to the player.
    pub fn is_face_up(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Revealed => write!(f, "revealed"),
            Self::Matched => write!(f, "matched"),
        }
    }
}

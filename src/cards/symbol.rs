/// A matchable face: the token identifies the pair, the glyph is what gets drawn.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub struct Symbol {
    token: &'static str,
    glyph: &'static str,
}

impl Symbol {
    pub const fn new(token: &'static str, glyph: &'static str) -> Self {
        Self { token, glyph }
    }
    pub fn token(&self) -> &'static str {
        self.token
    }
    pub fn glyph(&self) -> &'static str {
        self.glyph
    }
    /// The first `n` symbols of the catalog, clamped to 1..=catalog size.
    pub fn take(n: usize) -> &'static [Symbol] {
        &SYMBOLS[..n.clamp(1, SYMBOLS.len())]
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.glyph)
    }
}

/// Every symbol a board can be dealt from.
pub const SYMBOLS: [Symbol; 8] = [
    Symbol::new("straw", "🍓"),
    Symbol::new("berry", "🌺"),
    Symbol::new("rasp", "🍒"),
    Symbol::new("orange", "🍊"),
    Symbol::new("lemon", "🍋"),
    Symbol::new("grape", "🍇"),
    Symbol::new("honey", "🍯"),
    Symbol::new("melon", "🍈"),
];

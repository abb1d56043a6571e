/// A character shown on the roster and gallery pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub name: &'static str,
    pub emoji: &'static str,
    pub desc: &'static str,
}

pub const CHARACTERS: [Character; 7] = [
    Character {
        name: "Moranguinho",
        emoji: "🍓",
        desc: "Doce e criativa.",
    },
    Character {
        name: "Amora",
        emoji: "🌺",
        desc: "Cheia de ideias.",
    },
    Character {
        name: "Framboesa",
        emoji: "🍒",
        desc: "Energética e divertida.",
    },
    Character {
        name: "Laranja Doce",
        emoji: "🍊",
        desc: "Ilumina tudo.",
    },
    Character {
        name: "Limãozinha",
        emoji: "🍋",
        desc: "Esperta e direta.",
    },
    Character {
        name: "Mirtilo",
        emoji: "🍇",
        desc: "Organizada e gentil.",
    },
    Character {
        name: "Pão de Mel",
        emoji: "🍯",
        desc: "Carinhoso e calmo.",
    },
];

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:<14} {}", self.emoji, self.name, self.desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let names = CHARACTERS
            .iter()
            .map(|c| c.name)
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(names.len(), CHARACTERS.len());
    }

    #[test]
    fn every_character_has_a_card() {
        let glyphs = crate::cards::SYMBOLS
            .iter()
            .map(|s| s.glyph())
            .collect::<Vec<_>>();
        assert!(CHARACTERS.iter().all(|c| glyphs.contains(&c.emoji)));
    }
}

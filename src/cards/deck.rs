use super::card::Card;
use super::symbol::Symbol;
use crate::Arbitrary;
use crate::Position;
use rand::Rng;
use rand::seq::SliceRandom;

/// Ordered board of cards for one session.
/// Holds exactly two cards per distinct token, in a uniformly shuffled order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// pair every symbol twice and shuffle the whole multiset.
    /// Fisher-Yates gives a uniform permutation, positions follow shuffled order.
    pub fn deal<R>(symbols: &[Symbol], rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut faces = symbols
            .iter()
            .flat_map(|symbol| [*symbol, *symbol])
            .collect::<Vec<Symbol>>();
        faces.shuffle(rng);
        Self(
            faces
                .into_iter()
                .enumerate()
                .map(|(i, symbol)| Card::from((symbol, i)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, position: Position) -> Option<&Card> {
        self.0.get(position)
    }
    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Card> {
        self.0.get_mut(position)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    /// cards not yet matched
    pub fn remaining(&self) -> usize {
        self.0.iter().filter(|c| !c.is_matched()).count()
    }
    /// every card has been matched
    pub fn is_cleared(&self) -> bool {
        !self.is_empty() && self.remaining() == 0
    }
    /// every token present appears exactly twice
    pub fn is_paired(&self) -> bool {
        let mut counts = std::collections::HashMap::<&'static str, usize>::new();
        self.0
            .iter()
            .for_each(|c| *counts.entry(c.token()).or_default() += 1);
        counts.values().all(|n| *n == 2)
    }
}

impl<'d> IntoIterator for &'d Deck {
    type Item = &'d Card;
    type IntoIter = std::slice::Iter<'d, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        Self::deal(Symbol::take(crate::PAIRS), &mut rand::rng())
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SYMBOLS;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn every_token_twice() {
        for _ in 0..256 {
            let deck = Deck::random();
            assert!(deck.is_paired());
            assert_eq!(deck.len(), 2 * crate::PAIRS);
            assert_eq!(deck.len() % 2, 0);
        }
    }

    #[test]
    fn length_follows_symbols() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for n in 1..=SYMBOLS.len() {
            let deck = Deck::deal(Symbol::take(n), rng);
            assert_eq!(deck.len(), 2 * n);
            assert!(deck.is_paired());
        }
    }

    #[test]
    fn positions_are_sequential() {
        let deck = Deck::random();
        assert!(deck.iter().enumerate().all(|(i, c)| c.position() == i));
    }

    #[test]
    fn dealt_face_down() {
        let deck = Deck::random();
        assert_eq!(deck.remaining(), deck.len());
        assert!(!deck.is_cleared());
    }

    #[test]
    fn empty_deck_is_not_cleared() {
        assert!(!Deck::default().is_cleared());
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        // two pairs admit 4! / (2! 2!) = 6 distinct token arrangements
        let ref mut rng = SmallRng::seed_from_u64(0xBEEF);
        let mut counts = std::collections::HashMap::<Vec<&'static str>, usize>::new();
        let trials = 6000;
        for _ in 0..trials {
            let deck = Deck::deal(Symbol::take(2), rng);
            let order = deck.iter().map(Card::token).collect::<Vec<_>>();
            *counts.entry(order).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|n| (800..1200).contains(n)));
    }
}

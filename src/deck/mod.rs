//! Card & Deck Provider.
//!
//! The engine consumes decks, it never builds randomness into the rules.
//! A provider hands out an ordered 52-card deck and a shuffle; games call
//! [`fresh_deck`] to get the deal order and validate it.
//!
//! ```
//! use solitaire_match::deck::{fresh_deck, SeededDeck};
//!
//! let deck = fresh_deck(&mut SeededDeck::new(42)).unwrap();
//! assert_eq!(deck.len(), 52);
//! ```

use rustc_hash::FxHashSet;

use crate::core::{Card, EngineError, EngineResult, GameRng, Rank, Role, Suit};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Supplies decks to game builders.
pub trait DeckProvider {
    /// An ordered sequence of 52 unique cards.
    fn deal_deck(&mut self) -> Vec<Card> {
        standard_deck()
    }

    /// Permute a sequence of cards in place.
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// The 52 cards in suit-major order (♠A..♠K, ♥A..♥K, ♦A..♦K, ♣A..♣K).
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Check a deck holds exactly 52 unique faces.
pub fn validate_deck(cards: &[Card]) -> EngineResult<()> {
    if cards.len() != DECK_SIZE {
        return Err(EngineError::DeckSize {
            expected: DECK_SIZE,
            actual: cards.len(),
        });
    }
    let mut seen: FxHashSet<(Suit, Rank)> = FxHashSet::default();
    for card in cards {
        if !seen.insert((card.suit, card.rank)) {
            return Err(EngineError::DuplicateCard(card.to_string()));
        }
    }
    Ok(())
}

/// Deal, shuffle and validate a deck from `provider`.
///
/// Roles are stripped from every card: anchors are assigned by the game
/// builders, never by the provider.
pub fn fresh_deck<P: DeckProvider + ?Sized>(provider: &mut P) -> EngineResult<Vec<Card>> {
    let mut cards = provider.deal_deck();
    provider.shuffle(&mut cards);
    validate_deck(&cards)?;
    Ok(cards.into_iter().map(|c| c.with_role(Role::None)).collect())
}

/// Shuffles with a seeded ChaCha stream. A seed fully determines the deal.
#[derive(Clone, Debug)]
pub struct SeededDeck {
    rng: GameRng,
}

impl SeededDeck {
    /// Create a provider for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("deal"),
        }
    }
}

impl DeckProvider for SeededDeck {
    fn shuffle(&mut self, cards: &mut [Card]) {
        self.rng.shuffle(cards);
    }
}

/// Deals a fixed card order and never shuffles.
///
/// Used to replay a known deal or to stack a deck in tests.
#[derive(Clone, Debug)]
pub struct FixedDeck {
    cards: Vec<Card>,
}

impl FixedDeck {
    /// Wrap an explicit deal order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The unshuffled standard deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_deck())
    }
}

impl DeckProvider for FixedDeck {
    fn deal_deck(&mut self) -> Vec<Card> {
        self.cards.clone()
    }

    fn shuffle(&mut self, _cards: &mut [Card]) {}
}

/// Move the first card matching `suit`/`rank` out of `deck`.
pub(crate) fn take_card(deck: &mut Vec<Card>, suit: Suit, rank: Rank) -> EngineResult<Card> {
    let idx = deck
        .iter()
        .position(|c| c.suit == suit && c.rank == rank)
        .ok_or_else(|| EngineError::MissingCard(Card::new(suit, rank).to_string()))?;
    Ok(deck.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck[0], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(deck[51], Card::new(Suit::Clubs, Rank::King));
        assert!(validate_deck(&deck).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut deck = standard_deck();
        deck[1] = deck[0];
        assert_eq!(
            validate_deck(&deck),
            Err(EngineError::DuplicateCard(deck[0].to_string()))
        );
    }

    #[test]
    fn test_validate_reports_oversized_length() {
        let mut deck = standard_deck();
        deck.push(deck[0]);
        assert_eq!(
            validate_deck(&deck),
            Err(EngineError::DeckSize { expected: 52, actual: 53 })
        );
    }

    #[test]
    fn test_validate_rejects_short_deck() {
        let mut deck = standard_deck();
        deck.pop();
        assert_eq!(
            validate_deck(&deck),
            Err(EngineError::DeckSize { expected: 52, actual: 51 })
        );
    }

    #[test]
    fn test_provider_roles_are_stripped() {
        let mut cards = standard_deck();
        cards[4] = cards[4].with_role(Role::QueenProtagonist);
        let deck = fresh_deck(&mut FixedDeck::new(cards)).unwrap();

        assert!(deck.iter().all(|c| !c.is_anchor()));
        assert_eq!(deck, standard_deck());
    }

    #[test]
    fn test_seeded_deck_deterministic() {
        let a = fresh_deck(&mut SeededDeck::new(7)).unwrap();
        let b = fresh_deck(&mut SeededDeck::new(7)).unwrap();
        let c = fresh_deck(&mut SeededDeck::new(8)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, standard_deck());
    }

    #[test]
    fn test_fixed_deck_keeps_order() {
        let deck = fresh_deck(&mut FixedDeck::standard()).unwrap();
        assert_eq!(deck, standard_deck());
    }

    #[test]
    fn test_take_card() {
        let mut deck = standard_deck();
        let king = take_card(&mut deck, Suit::Hearts, Rank::King).unwrap();
        assert_eq!(king, Card::new(Suit::Hearts, Rank::King));
        assert_eq!(deck.len(), 51);
        assert!(take_card(&mut deck, Suit::Hearts, Rank::King).is_err());
    }
}

//! Playing cards as dealt onto a board.
//!
//! A `Card` is a small value type: suit, rank and an optional role tag.
//! Boards, stocks and waste piles own copies of cards rather than shared
//! references, so moving a card between zones can never alias.

use serde::{Deserialize, Serialize};

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deal order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Unicode symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Card rank. Discriminants are the pip values with Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Pip value with Ace low (A=1 ... K=13).
    #[must_use]
    pub const fn pips(self) -> u8 {
        self as u8
    }

    /// Look up a rank by its Ace-low pip value.
    #[must_use]
    pub fn from_pips(pips: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(pips).checked_sub(1)?).copied()
    }

    /// Short label used in card faces ("A", "10", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Role a card plays in the goal of a game.
///
/// Protagonists are the King/Queen anchors of Royal Marriage and
/// Meeting in the Garden. They are never selectable or removable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    None,
    KingProtagonist,
    QueenProtagonist,
}

/// A dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default)]
    pub role: Role,
}

impl Card {
    /// Create an untagged card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            role: Role::None,
        }
    }

    /// Tag this card with a role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Numeric rank value. With `ace_high` an Ace counts 14.
    #[must_use]
    pub const fn value(&self, ace_high: bool) -> u8 {
        match self.rank {
            Rank::Ace if ace_high => 14,
            rank => rank.pips(),
        }
    }

    /// Is this card one of the protagonist anchors?
    #[must_use]
    pub const fn is_anchor(&self) -> bool {
        !matches!(self.role, Role::None)
    }

    /// Does this card share a suit or a rank with `other`?
    #[must_use]
    pub fn shares_suit_or_rank(&self, other: &Card) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }

    /// Same suit and rank, ignoring the role tag.
    #[must_use]
    pub fn same_face(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_pips() {
        assert_eq!(Rank::Ace.pips(), 1);
        assert_eq!(Rank::Ten.pips(), 10);
        assert_eq!(Rank::King.pips(), 13);
        assert_eq!(Rank::from_pips(12), Some(Rank::Queen));
        assert_eq!(Rank::from_pips(0), None);
        assert_eq!(Rank::from_pips(14), None);
    }

    #[test]
    fn test_card_value_ace_high() {
        let ace = Card::new(Suit::Spades, Rank::Ace);
        assert_eq!(ace.value(false), 1);
        assert_eq!(ace.value(true), 14);

        let king = Card::new(Suit::Spades, Rank::King);
        assert_eq!(king.value(true), 13);
    }

    #[test]
    fn test_shares_suit_or_rank() {
        let five_clubs = Card::new(Suit::Clubs, Rank::Five);
        let five_hearts = Card::new(Suit::Hearts, Rank::Five);
        let nine_clubs = Card::new(Suit::Clubs, Rank::Nine);
        let nine_hearts = Card::new(Suit::Hearts, Rank::Nine);

        assert!(five_clubs.shares_suit_or_rank(&five_hearts));
        assert!(five_clubs.shares_suit_or_rank(&nine_clubs));
        assert!(!five_clubs.shares_suit_or_rank(&nine_hearts));
    }

    #[test]
    fn test_role_tag() {
        let king = Card::new(Suit::Hearts, Rank::King).with_role(Role::KingProtagonist);
        assert!(king.is_anchor());
        assert!(!Card::new(Suit::Hearts, Rank::King).is_anchor());
        assert!(king.same_face(&Card::new(Suit::Hearts, Rank::King)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Card::new(Suit::Clubs, Rank::Five)), "5♣");
        assert_eq!(format!("{}", Card::new(Suit::Hearts, Rank::Ten)), "10♥");
    }
}

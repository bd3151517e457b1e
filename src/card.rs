//! Card types.

use core::cmp::Ordering;
use core::fmt;

/// Card suit.
///
/// Suits only matter when two cards share a rank. The order is given by
/// [`Suit::order`], not by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Suits in the order a fresh deck lays them out for each rank.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Hearts, Self::Clubs];

    /// Tie-break weight of the suit: clubs < diamonds < hearts < spades.
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Clubs => 1,
            Self::Diamonds => 2,
            Self::Hearts => 3,
            Self::Spades => 4,
        }
    }

    /// Upper-case name used when printing a card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "SPADES",
            Self::Diamonds => "DIAMONDS",
            Self::Hearts => "HEARTS",
            Self::Clubs => "CLUBS",
        }
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order().cmp(&other.order())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowest rank in a deck.
pub const MIN_RANK: u8 = 2;

/// Highest rank in a deck (ace high).
pub const MAX_RANK: u8 = 14;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The card a cheater claims to hold when the cheat fires.
pub const ACE_OF_SPADES: Card = Card::new(MAX_RANK, Suit::Spades);

/// A playing card.
///
/// Cards compare by rank first and by [`Suit::order`] when ranks are equal,
/// so any two cards are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Callers are expected
    /// to pass a value in `MIN_RANK..=MAX_RANK`.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank (2 through 14).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.suit)
    }
}

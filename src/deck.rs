//! The shared deck.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::DrawError;

/// Number of random swaps performed by [`Deck::shuffle`].
pub const SHUFFLE_SWAPS: usize = 200;

/// An ordered pile of cards. The top of the deck is the end of the pile.
///
/// The deck only ever shrinks: drawn cards are never put back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled 52-card deck.
    ///
    /// Cards are laid out rank by rank, each rank in the suit order of
    /// [`Suit::ALL`].
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in MIN_RANK..=MAX_RANK {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a full deck shuffled with a generator seeded from `seed`.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        deck
    }

    /// Creates a deck holding exactly `cards`, the last one on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place with [`SHUFFLE_SWAPS`] random swaps.
    ///
    /// Both positions of each swap are picked uniformly and independently,
    /// so a card can be swapped with itself or moved several times.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.cards.len();
        if len < 2 {
            return;
        }

        for _ in 0..SHUFFLE_SWAPS {
            let i = rng.random_range(0..len);
            let j = rng.random_range(0..len);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the top `n` cards.
    ///
    /// The first card returned is the one that was on top.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] if fewer than `n` cards remain.
    /// The deck is left untouched in that case.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DrawError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DrawError::NotEnoughCards {
                requested: n,
                remaining,
            });
        }

        let mut drawn = self.cards.split_off(remaining - n);
        drawn.reverse();
        Ok(drawn)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

//! Players and their hands.

use alloc::string::String;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{ACE_OF_SPADES, Card};
use crate::sync::Mutex;

/// Default cheat chance, out of ten.
pub const DEFAULT_CHEAT_CHANCE: u8 = 2;

/// How a player picks the card it reveals.
#[derive(Debug)]
pub enum Behavior {
    /// Reveals the highest card in hand.
    Honest,
    /// Sometimes claims to hold [`ACE_OF_SPADES`] instead.
    Cheater {
        /// Chance out of ten that the cheat fires on a given call.
        chance: u8,
        /// Generator for the cheat decision.
        rng: Mutex<ChaCha8Rng>,
    },
}

/// A player at the table.
///
/// Methods take `&self` so a player can be shared by reference between the
/// caller and a running [`Game`](crate::Game).
#[derive(Debug)]
pub struct Player {
    name: String,
    hand: Mutex<Vec<Card>>,
    behavior: Behavior,
}

impl Player {
    /// Creates an honest player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_behavior(name, Behavior::Honest)
    }

    /// Creates a cheater with the default 20% cheat chance.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::Player;
    ///
    /// let eve = Player::cheater("Eve", 7);
    /// assert!(eve.is_cheater());
    /// ```
    #[must_use]
    pub fn cheater(name: impl Into<String>, seed: u64) -> Self {
        Self::cheater_with_chance(name, seed, DEFAULT_CHEAT_CHANCE)
    }

    /// Creates a cheater whose cheat fires with probability `chance / 10`.
    #[must_use]
    pub fn cheater_with_chance(name: impl Into<String>, seed: u64, chance: u8) -> Self {
        Self::with_behavior(
            name,
            Behavior::Cheater {
                chance,
                rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            },
        )
    }

    /// Creates a player with the given behavior.
    #[must_use]
    pub fn with_behavior(name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            name: name.into(),
            hand: Mutex::new(Vec::new()),
            behavior,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's behavior.
    #[must_use]
    pub const fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Returns whether the player cheats.
    #[must_use]
    pub const fn is_cheater(&self) -> bool {
        matches!(self.behavior, Behavior::Cheater { .. })
    }

    /// Returns a copy of the current hand.
    #[must_use]
    pub fn hand(&self) -> Vec<Card> {
        self.hand.lock().clone()
    }

    /// Replaces the hand, discarding whatever was held before.
    pub fn set_hand(&self, cards: Vec<Card>) {
        *self.hand.lock() = cards;
    }

    /// Returns the card this player reveals for the current hand.
    ///
    /// An honest player reveals the highest card held, or `None` with an
    /// empty hand. A cheater rolls independently on every call and, when the
    /// cheat fires, reveals [`ACE_OF_SPADES`] whatever it actually holds.
    #[must_use]
    pub fn strongest_card(&self) -> Option<Card> {
        if let Behavior::Cheater { chance, rng } = &self.behavior {
            let roll: u8 = rng.lock().random_range(1..=10);
            if roll <= *chance {
                tracing::trace!(player = %self.name, "cheat substituted ace of spades");
                return Some(ACE_OF_SPADES);
            }
        }

        self.hand.lock().iter().max().copied()
    }
}

//! A high-card round simulator with optional `no_std` support.
//!
//! A shared [`Deck`] is dealt two cards per [`Player`] each round. Every
//! player reveals its strongest card, the highest card scores a point, and the
//! [`Game`] ends once the deck cannot deal a full round. A cheating player
//! sometimes claims to hold the ace of spades.
//!
//! # Example
//!
//! ```
//! use highcard::{Deck, Game, GameOptions, NoPause, Player};
//!
//! let players = [Player::new("Alice"), Player::new("Bob"), Player::cheater("Karim", 3)];
//! let mut game = Game::new(&players, Deck::shuffled(42), GameOptions::default()).unwrap();
//!
//! let mut out = String::new();
//! let result = game.play(&mut out, NoPause).unwrap();
//! assert_eq!(result.rounds, 8);
//! assert!(out.ends_with(&format!("Player {} won the game\n", result.winner)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod pacing;
pub mod player;
pub mod result;
pub mod score;
mod sync;

// Re-export main types
pub use card::{ACE_OF_SPADES, Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
pub use deck::{Deck, SHUFFLE_SWAPS};
pub use error::{DrawError, PlayError, RoundError, SetupError};
pub use game::{Game, GameState};
pub use options::{DEFAULT_ROUND_DELAY, GameOptions, HAND_SIZE};
#[cfg(feature = "std")]
pub use pacing::Sleep;
pub use pacing::{NoPause, Pacer};
pub use player::{Behavior, DEFAULT_CHEAT_CHANCE, Player};
pub use result::{Deal, GameResult, RoundResult};
pub use score::Scoreboard;

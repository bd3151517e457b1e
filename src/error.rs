//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Not enough cards left in the deck.
    #[error("cannot draw {requested} cards, only {remaining} left in the deck")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards that were left.
        remaining: usize,
    },
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The game has no players.
    #[error("a game needs at least one player")]
    NoPlayers,
    /// Two players share a name.
    #[error("player names must be unique")]
    DuplicateName,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck cannot deal a full round.
    #[error("not enough cards left for another round")]
    NoMoreRounds,
    /// A player revealed no card after being dealt.
    #[error("player revealed no card")]
    EmptyHand,
    /// A draw failed mid-round.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur while playing a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// A round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// Writing the game text failed.
    #[error("failed to write game output")]
    Output,
}

impl From<core::fmt::Error> for PlayError {
    fn from(_: core::fmt::Error) -> Self {
        Self::Output
    }
}

//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The deck can still deal every player a full hand.
    HasMoreRounds,
    /// Too few cards remain for another round.
    NoMoreRounds,
}

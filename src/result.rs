//! Round and game result types.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::score::Scoreboard;

/// The cards one player received in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// The player's name.
    pub player: String,
    /// The cards dealt, top card first.
    pub hand: Vec<Card>,
    /// The card the player revealed. For a cheater this may not be in `hand`.
    pub strongest: Card,
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} is dealt: [", self.player)?;
        for (i, card) in self.hand.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: usize,
    /// One deal per player, in seating order.
    pub deals: Vec<Deal>,
    /// Name of the round winner.
    pub winner: String,
    /// The card that won the round.
    pub winning_card: Card,
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for deal in &self.deals {
            writeln!(f, "{deal}")?;
        }
        writeln!(f, "PLAYER {} WINS THIS ROUND", self.winner)?;
        writeln!(f)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Number of rounds played.
    pub rounds: usize,
    /// Name of the overall winner.
    pub winner: String,
    /// Final scores.
    pub scores: Scoreboard,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Player {} won the game", self.winner)
    }
}

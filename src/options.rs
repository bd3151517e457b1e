//! Game configuration options.

use core::time::Duration;

/// Cards dealt to each player per round.
pub const HAND_SIZE: usize = 2;

/// Default pause between rounds.
pub const DEFAULT_ROUND_DELAY: Duration = Duration::from_secs(6);

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use highcard::GameOptions;
///
/// let options = GameOptions::default().with_round_delay(Duration::ZERO);
/// assert_eq!(options.round_delay, Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Pause handed to the [`Pacer`](crate::Pacer) after every round.
    /// Presentation only; it has no effect on the outcome.
    pub round_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            round_delay: DEFAULT_ROUND_DELAY,
        }
    }
}

impl GameOptions {
    /// Sets the pause between rounds.
    #[must_use]
    pub const fn with_round_delay(mut self, delay: Duration) -> Self {
        self.round_delay = delay;
        self
    }
}

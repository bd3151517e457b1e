//! Pacing between rounds.

use core::time::Duration;

/// Decides what happens during the pause after each round.
pub trait Pacer {
    /// Called once after every round with the configured delay.
    fn pause(&mut self, delay: Duration);
}

/// Skips every pause.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _delay: Duration) {}
}

/// Blocks the current thread for the full delay.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Sleep;

#[cfg(feature = "std")]
impl Pacer for Sleep {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, delay: Duration) {
        (**self).pause(delay);
    }
}

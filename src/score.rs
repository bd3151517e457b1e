//! Per-player score tracking.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Points per player, kept in the order players were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Player name -> index into `entries`.
    index: HashMap<String, usize>,
    /// (name, points) in insertion order.
    entries: Vec<(String, u32)>,
}

impl Scoreboard {
    /// Creates a scoreboard with every name at zero.
    ///
    /// A repeated name keeps its first position.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::Scoreboard;
    ///
    /// let mut scores = Scoreboard::new(["Alice", "Bob"]);
    /// scores.award("Bob");
    /// assert_eq!(scores.get("Bob"), Some(1));
    /// assert_eq!(scores.winner(), Some(("Bob", 1)));
    /// ```
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scores = Self::default();
        for name in names {
            scores.insert(name.into());
        }
        scores
    }

    /// Adds a player at zero points. Returns `false` if the name is taken.
    pub fn insert(&mut self, name: String) -> bool {
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, 0));
        true
    }

    /// Gives one point to `name` and returns the new total.
    ///
    /// Returns `None` if the name is unknown.
    pub fn award(&mut self, name: &str) -> Option<u32> {
        let &idx = self.index.get(name)?;
        let points = &mut self.entries[idx].1;
        *points += 1;
        Some(*points)
    }

    /// Returns the points for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&idx| self.entries[idx].1)
    }

    /// Iterates over (name, points) in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, points)| (name.as_str(), *points))
    }

    /// Returns the leader.
    ///
    /// On a tie the player added first wins. Returns `None` when empty.
    #[must_use]
    pub fn winner(&self) -> Option<(&str, u32)> {
        let mut best: Option<(&str, u32)> = None;
        for (name, points) in self.iter() {
            if best.is_none_or(|(_, top)| points > top) {
                best = Some((name, points));
            }
        }
        best
    }

    /// Returns the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score:")?;
        writeln!(f, "-----")?;
        for (name, points) in self.iter() {
            writeln!(f, "{name}: {points}")?;
        }
        writeln!(f)?;
        writeln!(f)
    }
}

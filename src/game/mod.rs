//! Game engine and round loop.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{PlayError, RoundError, SetupError};
use crate::options::{GameOptions, HAND_SIZE};
use crate::pacing::Pacer;
use crate::player::Player;
use crate::result::{Deal, GameResult, RoundResult};
use crate::score::Scoreboard;

pub mod state;

pub use state::GameState;

/// A high-card game over a single deck.
///
/// Each round every player gets [`HAND_SIZE`] cards and reveals its strongest
/// card; the highest revealed card scores a point. The game ends once the deck
/// cannot deal a full round.
///
/// The game owns the deck and the scores. Players are borrowed, so the caller
/// can still inspect them while the game runs.
#[derive(Debug)]
pub struct Game<'a> {
    players: &'a [Player],
    deck: Deck,
    scores: Scoreboard,
    options: GameOptions,
    rounds_played: usize,
}

impl<'a> Game<'a> {
    /// Creates a game for `players`, seated in the given order.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Deck, Game, GameOptions, Player};
    ///
    /// let players = [Player::new("Alice"), Player::new("Bob")];
    /// let game = Game::new(&players, Deck::shuffled(42), GameOptions::default()).unwrap();
    /// assert!(game.has_more_rounds());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players or two players share a name.
    pub fn new(players: &'a [Player], deck: Deck, options: GameOptions) -> Result<Self, SetupError> {
        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        let mut scores = Scoreboard::default();
        for player in players {
            if !scores.insert(String::from(player.name())) {
                return Err(SetupError::DuplicateName);
            }
        }

        Ok(Self {
            players,
            deck,
            scores,
            options,
            rounds_played: 0,
        })
    }

    /// Returns the players in seating order.
    #[must_use]
    pub const fn players(&self) -> &'a [Player] {
        self.players
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current scores.
    #[must_use]
    pub const fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of rounds played so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns whether every player can be dealt a full hand.
    #[must_use]
    pub fn has_more_rounds(&self) -> bool {
        self.deck.len() >= HAND_SIZE * self.players.len()
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.has_more_rounds() {
            GameState::HasMoreRounds
        } else {
            GameState::NoMoreRounds
        }
    }

    /// Returns the current leader. Ties go to the earliest seated player.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.scores.winner().map(|(name, _)| name)
    }

    /// Plays one round: deals, compares revealed cards and scores the winner.
    ///
    /// Players are dealt and compared in seating order. A later player only
    /// takes the lead with a strictly higher card, so the first player to
    /// reveal the top card wins ties.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoMoreRounds`] if the deck cannot deal a full
    /// round. Nothing is drawn in that case.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        if !self.has_more_rounds() {
            return Err(RoundError::NoMoreRounds);
        }

        let mut deals = Vec::with_capacity(self.players.len());
        let mut leader: Option<(Card, usize)> = None;

        for (idx, player) in self.players.iter().enumerate() {
            let hand = self.deck.draw(HAND_SIZE)?;
            player.set_hand(hand.clone());

            let strongest = player.strongest_card().ok_or(RoundError::EmptyHand)?;
            tracing::debug!(player = player.name(), ?hand, %strongest, "dealt hand");

            if leader.is_none_or(|(best, _)| strongest > best) {
                leader = Some((strongest, idx));
            }

            deals.push(Deal {
                player: String::from(player.name()),
                hand,
                strongest,
            });
        }

        let (winning_card, winner_idx) = leader.ok_or(RoundError::EmptyHand)?;
        let winner = String::from(self.players[winner_idx].name());
        self.scores.award(&winner);
        self.rounds_played += 1;

        tracing::info!(
            round = self.rounds_played,
            winner = %winner,
            card = %winning_card,
            remaining = self.deck.len(),
            "round won"
        );

        Ok(RoundResult {
            round: self.rounds_played,
            deals,
            winner,
            winning_card,
        })
    }

    /// Plays rounds until the deck runs out and returns the final result.
    ///
    /// Each round's deals, winner and score table are written to `out`,
    /// followed by a pause of [`GameOptions::round_delay`] through `pacer`.
    /// The overall winner is written last.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails or writing to `out` fails.
    pub fn play<W, P>(&mut self, out: &mut W, mut pacer: P) -> Result<GameResult, PlayError>
    where
        W: Write + ?Sized,
        P: Pacer,
    {
        while self.has_more_rounds() {
            let round = self.play_round()?;
            write!(out, "{round}")?;
            write!(out, "{}", self.scores)?;
            pacer.pause(self.options.round_delay);
        }

        let result = GameResult {
            rounds: self.rounds_played,
            winner: self.winner().map(String::from).unwrap_or_default(),
            scores: self.scores.clone(),
        };
        tracing::info!(winner = %result.winner, rounds = result.rounds, "game over");
        write!(out, "{result}")?;

        Ok(result)
    }
}

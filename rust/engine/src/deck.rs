use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::{EngineError, Result};

/// A standard 52-card deck.
///
/// The top of the deck is the end of the internal sequence; every draw,
/// burn and peek works from that end. The deck owns its own ChaCha20 stream
/// so a seeded deck produces the same shuffles on every platform.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Canonical deck whose shuffles draw from the thread RNG.
    pub fn new() -> Self {
        Self::with_rng(ChaCha20Rng::from_rng(&mut rand::rng()))
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha20Rng) -> Self {
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Restore all 52 cards in canonical order.
    pub fn build(&mut self) {
        self.cards = full_deck();
    }

    pub fn reset(&mut self) {
        self.build();
    }

    /// Shuffle the remaining cards in place.
    ///
    /// With `Some(seed)` the deck's generator is reseeded first, so the same
    /// seed applied to a freshly built deck always yields the same order.
    pub fn shuffle(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng = ChaCha20Rng::seed_from_u64(seed);
        }
        self.cards.shuffle(&mut self.rng);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Remove and return the top card.
    pub fn deal_card(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(EngineError::InsufficientCards {
            requested: 1,
            available: 0,
        })
    }

    /// Remove and return the top `count` cards, first drawn first.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>> {
        if count == 0 || count > self.cards.len() {
            return Err(EngineError::InsufficientCards {
                requested: count,
                available: self.cards.len(),
            });
        }
        let split = self.cards.len() - count;
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        Ok(dealt)
    }

    /// Discard the top `n` cards. Burning zero cards is a no-op.
    pub fn burn(&mut self, n: usize) -> Result<()> {
        if n > self.cards.len() {
            return Err(EngineError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        self.cards.truncate(self.cards.len() - n);
        Ok(())
    }

    /// The top `n` cards, top first, without removing them.
    /// Asking for more than remain returns the whole deck.
    pub fn peek(&self, n: usize) -> Vec<Card> {
        self.cards.iter().rev().take(n).copied().collect()
    }

    /// Move the cards before `position` to the end of the deck.
    /// `None` picks a random position in `0..=remaining`.
    pub fn cut(&mut self, position: Option<usize>) -> Result<()> {
        let len = self.cards.len();
        let position = match position {
            Some(p) => p,
            None => self.rng.random_range(0..=len),
        };
        if position > len {
            return Err(EngineError::InvalidArgument(format!(
                "cut position {} out of range 0..={}",
                position, len
            )));
        }
        self.cards.rotate_left(position);
        Ok(())
    }
}

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{EngineError, Result};
use crate::player::Seat;

/// Owns one deck and the community pool, and moves cards out of the deck.
///
/// The dealer never inspects participant state; it only hands cards over
/// through [`Participant::receive`](crate::player::Participant::receive).
#[derive(Debug, Default)]
pub struct Dealer {
    deck: Deck,
    community: Vec<Card>,
}

impl Dealer {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            community: Vec::with_capacity(5),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn clear_community(&mut self) {
        self.community.clear();
    }

    /// Deal `cards_each` rounds, one card per participant per round, in
    /// seat order. Nothing is dealt if the deck cannot cover every round.
    pub fn deal_to_players(&mut self, players: &mut [Seat], cards_each: usize) -> Result<()> {
        let needed = players.len() * cards_each;
        if needed > self.deck.remaining() {
            return Err(EngineError::InsufficientCards {
                requested: needed,
                available: self.deck.remaining(),
            });
        }
        for _ in 0..cards_each {
            for p in players.iter_mut() {
                let c = self.deck.deal_card()?;
                p.receive(c);
            }
        }
        Ok(())
    }

    /// Deal `n` cards onto the community pool and return them in draw order.
    pub fn deal_community(&mut self, n: usize) -> Result<Vec<Card>> {
        let cards = self.deck.deal(n)?;
        self.community.extend_from_slice(&cards);
        Ok(cards)
    }

    pub fn burn(&mut self, n: usize) -> Result<()> {
        self.deck.burn(n)
    }
}

use std::collections::BTreeMap;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::errors::{EngineError, Result};
use crate::evaluator::best_high_card;
use crate::player::Seat;

/// Hole cards dealt to every participant each hand.
pub const HOLE_CARDS: usize = 2;
/// Community cards dealt each hand.
pub const COMMUNITY_CARDS: usize = 5;
/// Smallest group a table can be built for.
pub const MIN_PLAYERS: usize = 2;

/// Participant id → number of hands won.
pub type Scores = BTreeMap<String, u32>;

/// Scores are `u32`, so no run may play more hands than one can count.
pub(crate) fn check_hand_count(hands: usize) -> Result<()> {
    if u32::try_from(hands).is_err() {
        return Err(EngineError::InvalidConfiguration(format!(
            "at most {} hands per table, got {}",
            u32::MAX,
            hands
        )));
    }
    Ok(())
}

/// Result of a single hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// Index of the table within its tournament (0 for a standalone table)
    pub table: usize,
    /// Hand number at that table, starting at 0
    pub hand: usize,
    /// Id of the participant awarded the point
    pub winner_id: String,
    /// Best rank value reached by the winner
    pub winning_value: u8,
    /// How many participants shared the winning value
    pub tied: usize,
}

/// Everything a table produced over one run.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableReport {
    /// Wins per seated participant; every seat has an entry
    pub scores: Scores,
    /// Per-hand outcomes in play order
    pub hands: Vec<HandOutcome>,
}

/// Plays repeated independent hands among a fixed group of participants.
///
/// Each hand rebuilds and reshuffles the deck, clears the community pool
/// and every hand, deals [`HOLE_CARDS`] to each seat round-robin and then
/// [`COMMUNITY_CARDS`] to the board, and awards one point to the seat with
/// the best single card. Ties are settled by the caller-supplied generator.
///
/// # Examples
///
/// ```
/// use cardfloor_engine::player::{Player, Seat};
/// use cardfloor_engine::table::Table;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut seats: Vec<Seat> = (0..3)
///     .map(|i| Box::new(Player::new(Some(&format!("B{i}")))) as Seat)
///     .collect();
/// let mut table = Table::new(&mut seats, 100).expect("three seats");
/// let report = table.run(&mut ChaCha20Rng::seed_from_u64(7)).expect("52 cards suffice");
/// assert_eq!(report.scores.values().sum::<u32>(), 100);
/// ```
pub struct Table<'a> {
    seats: &'a mut [Seat],
    dealer: Dealer,
    games_to_play: usize,
    index: usize,
}

impl<'a> Table<'a> {
    pub fn new(seats: &'a mut [Seat], games_to_play: usize) -> Result<Self> {
        if seats.len() < MIN_PLAYERS {
            return Err(EngineError::InvalidConfiguration(format!(
                "a table needs at least {} participants, got {}",
                MIN_PLAYERS,
                seats.len()
            )));
        }
        Ok(Self {
            seats,
            dealer: Dealer::new(Deck::new()),
            games_to_play,
            index: 0,
        })
    }

    /// Replace the dealer, e.g. with one holding a seeded deck.
    pub fn with_dealer(mut self, dealer: Dealer) -> Self {
        self.dealer = dealer;
        self
    }

    /// Tag outcomes with this table's position in a tournament.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }
    pub fn seats(&self) -> &[Seat] {
        self.seats
    }
    pub fn games_to_play(&self) -> usize {
        self.games_to_play
    }

    /// Play the configured number of hands.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TableReport> {
        self.run_games(self.games_to_play, rng)
    }

    /// Play `games` hands, overriding the configured count for this run.
    pub fn run_games<R: Rng + ?Sized>(&mut self, games: usize, rng: &mut R) -> Result<TableReport> {
        check_hand_count(games)?;
        let mut scores: Scores = self.seats.iter().map(|p| (p.id().to_string(), 0)).collect();
        let mut hands = Vec::with_capacity(games);

        for hand in 0..games {
            let outcome = self.play_hand(hand, rng)?;
            *scores.entry(outcome.winner_id.clone()).or_insert(0) += 1;
            hands.push(outcome);
        }

        info!(
            table = self.index,
            seats = self.seats.len(),
            hands = games,
            "table finished"
        );
        Ok(TableReport { scores, hands })
    }

    /// Reset, deal and score one hand.
    pub fn play_hand<R: Rng + ?Sized>(&mut self, hand: usize, rng: &mut R) -> Result<HandOutcome> {
        let deck = self.dealer.deck_mut();
        deck.build();
        deck.shuffle(None);
        self.dealer.clear_community();
        for p in self.seats.iter_mut() {
            p.reset_hand();
        }

        self.dealer.deal_to_players(self.seats, HOLE_CARDS)?;
        self.dealer.deal_community(COMMUNITY_CARDS)?;

        let community = self.dealer.community();
        for p in self.seats.iter_mut() {
            p.observe(community);
        }

        let mut best_value = 0u8;
        let mut best_seats: Vec<usize> = Vec::new();
        for (i, p) in self.seats.iter().enumerate() {
            let value = best_high_card(p.hand().iter().chain(community));
            if best_seats.is_empty() || value > best_value {
                best_value = value;
                best_seats.clear();
                best_seats.push(i);
            } else if value == best_value {
                best_seats.push(i);
            }
        }

        let winner = *best_seats
            .choose(rng)
            .ok_or_else(|| EngineError::InvalidConfiguration("table has no seats".into()))?;
        let winner_id = self.seats[winner].id().to_string();
        debug!(
            table = self.index,
            hand,
            winner = %winner_id,
            value = best_value,
            tied = best_seats.len(),
            "hand scored"
        );

        Ok(HandOutcome {
            table: self.index,
            hand,
            winner_id,
            winning_value: best_value,
            tied: best_seats.len(),
        })
    }
}

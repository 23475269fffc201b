//! # cardfloor-engine: Card Tournament Simulation Core
//!
//! Simulates many simplified card hands among automated participants and
//! aggregates the outcomes into tournament standings. Every hand is played
//! sequentially; seeded runs are fully reproducible.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and canonical deck order
//! - [`deck`] - 52-card deck with seeded ChaCha20 shuffling, dealing, burning, peeking and cutting
//! - [`dealer`] - Round-robin hole-card distribution and the community pool
//! - [`player`] - The [`Participant`](player::Participant) capability and the default [`Player`](player::Player)
//! - [`evaluator`] - High-card scoring
//! - [`table`] - Repeated hands among one group, with random tie-breaks
//! - [`roster`] - Registry of available participants
//! - [`floor`] - Tournament orchestration across groups
//! - [`history`] - Tournament records and the append-only history log
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardfloor_engine::floor::{FloorManager, TournamentSettings};
//! use cardfloor_engine::player::{Player, Seat};
//! use cardfloor_engine::roster::Roster;
//!
//! let roster: Roster = (1..=12)
//!     .map(|i| Box::new(Player::new(Some(&format!("Bot-{:02}", i)))) as Seat)
//!     .collect();
//! let mut floor = FloorManager::new(roster);
//!
//! let settings = TournamentSettings { group_size: 6, hands_per_group: 100, seed: Some(42) };
//! let outcome = floor.run_tournament(&settings).expect("valid settings");
//! assert_eq!(outcome.scores.len(), 12);
//! assert_eq!(outcome.scores.values().sum::<u32>(), 200);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use cardfloor_engine::deck::Deck;
//!
//! let mut d1 = Deck::new();
//! let mut d2 = Deck::new();
//! d1.shuffle(Some(42));
//! d2.shuffle(Some(42));
//! assert_eq!(d1.peek(5), d2.peek(5));
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod evaluator;
pub mod floor;
pub mod history;
pub mod player;
pub mod roster;
pub mod table;

pub use errors::{EngineError, Result};

//! # cardfloor-ai: Participant Strategies
//!
//! Decision logic for tournament participants lives behind the [`Strategy`]
//! trait. The engine never sees a strategy directly: a [`Bot`] carries one
//! and presents itself to tables through the engine's `Participant` seam,
//! so new strategies never require changes to tables or dealers.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardfloor_ai::{create_bot, Bot};
//! use cardfloor_engine::player::Participant;
//!
//! let bot: Bot = create_bot("random", Some("Bot-01")).expect("known strategy");
//! assert_eq!(bot.name(), "Bot-01");
//! assert_eq!(bot.strategy_name(), "RandomStrategy");
//! ```
//!
//! ## Strategy Types
//!
//! - `"random"` (alias `"none"`) - no decision logic at all

use cardfloor_engine::cards::Card;
use cardfloor_engine::player::{Participant, Player};
use thiserror::Error;

pub mod random;

/// Interface every participant strategy implements.
///
/// Tables show every strategy its bot's hole cards and the board once per
/// hand; in the current game there are no decisions to make, since every
/// hand is dealt out and scored.
pub trait Strategy {
    /// Identifier of this strategy implementation.
    fn name(&self) -> &str;

    /// Observe the bot's hole cards and the board after a deal.
    fn observe(&mut self, _hole: &[Card], _community: &[Card]) {}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// Factory for strategies by name.
///
/// # Example
///
/// ```rust
/// use cardfloor_ai::create_strategy;
///
/// let s = create_strategy("random").unwrap();
/// assert_eq!(s.name(), "RandomStrategy");
/// assert!(create_strategy("oracle").is_err());
/// ```
pub fn create_strategy(kind: &str) -> Result<Box<dyn Strategy>, AiError> {
    match kind.to_ascii_lowercase().as_str() {
        "random" | "none" => Ok(Box::new(random::RandomStrategy::new())),
        _ => Err(AiError::UnknownStrategy(kind.to_string())),
    }
}

/// A tournament participant driven by a [`Strategy`].
pub struct Bot {
    player: Player,
    strategy: Box<dyn Strategy>,
}

impl Bot {
    pub fn new(name: Option<&str>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            player: Player::new(name),
            strategy,
        }
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("player", &self.player)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Participant for Bot {
    fn id(&self) -> &str {
        self.player.id()
    }
    fn name(&self) -> &str {
        self.player.name()
    }
    fn hand(&self) -> &[Card] {
        self.player.hand()
    }
    fn receive(&mut self, card: Card) {
        self.player.receive(card);
    }
    fn reset_hand(&mut self) {
        self.player.reset_hand();
    }
    fn observe(&mut self, community: &[Card]) {
        self.strategy.observe(self.player.hand(), community);
    }
}

/// Build a bot running the named strategy.
pub fn create_bot(kind: &str, name: Option<&str>) -> Result<Bot, AiError> {
    Ok(Bot::new(name, create_strategy(kind)?))
}

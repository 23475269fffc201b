//! Strategy with no decision logic.
//!
//! Outcomes at the table depend only on the deal, so a bot running this
//! strategy is a pure random participant. It is the baseline every other
//! strategy gets compared against.

use crate::Strategy;
use cardfloor_engine::cards::Card;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "RandomStrategy"
    }

    fn observe(&mut self, hole: &[Card], community: &[Card]) {
        trace!(hole = hole.len(), community = community.len(), "observed deal");
    }
}

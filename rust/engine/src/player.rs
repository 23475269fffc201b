use crate::cards::Card;
use uuid::Uuid;

/// Capability every tournament participant provides to the dealer and table.
///
/// The dealer only ever calls [`receive`](Participant::receive); the table
/// calls [`reset_hand`](Participant::reset_hand) and
/// [`observe`](Participant::observe). Decision logic lives behind this seam
/// and never touches the deck directly.
pub trait Participant {
    /// Stable unique identifier, used as the key of every score mapping.
    fn id(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;
    /// Cards currently held, in the order received.
    fn hand(&self) -> &[Card];
    /// Accept one card from the dealer.
    fn receive(&mut self, card: Card);
    /// Drop every held card before a new hand.
    fn reset_hand(&mut self);
    /// Called once per hand after the board is dealt, before scoring.
    fn observe(&mut self, _community: &[Card]) {}
}

/// Owned participant as stored in a roster and seated at a table.
pub type Seat = Box<dyn Participant>;

/// Default participant: an identity and a transient hand, nothing more.
#[derive(Debug, Clone)]
pub struct Player {
    id: String,
    name: String,
    hand: Vec<Card>,
}

impl Player {
    /// New player with a random v4 id. Without a name the player is called
    /// `Bot-` followed by the first eight characters of its id.
    pub fn new(name: Option<&str>) -> Self {
        let id = Uuid::new_v4().to_string();
        let name = match name {
            Some(n) => n.to_string(),
            None => format!("Bot-{}", &id[..8]),
        };
        Self::with_id(id, name)
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hand: Vec::with_capacity(2),
        }
    }
}

impl Participant for Player {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn hand(&self) -> &[Card] {
        &self.hand
    }
    fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }
    fn reset_hand(&mut self) {
        self.hand.clear();
    }
}

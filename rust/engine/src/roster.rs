use std::collections::BTreeMap;

use crate::player::Seat;

/// Ordered registry of the participants available to a tournament.
///
/// No deduplication is done; callers add each participant once.
#[derive(Default)]
pub struct Roster {
    participants: Vec<Seat>,
}

impl Roster {
    pub fn new(participants: Vec<Seat>) -> Self {
        Self { participants }
    }

    pub fn add(&mut self, participant: Seat) {
        self.participants.push(participant);
    }

    pub fn all(&self) -> &[Seat] {
        &self.participants
    }

    /// The first `n` participants (fewer if the roster is shorter).
    pub fn get(&self, n: usize) -> &[Seat] {
        &self.participants[..n.min(self.participants.len())]
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Seat> {
        self.participants.iter()
    }

    /// Id → display name for every registered participant.
    pub fn names(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|p| (p.id().to_string(), p.name().to_string()))
            .collect()
    }

    /// Consecutive groups of `size`; the last may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn chunks_mut(&mut self, size: usize) -> std::slice::ChunksMut<'_, Seat> {
        self.participants.chunks_mut(size)
    }
}

impl FromIterator<Seat> for Roster {
    fn from_iter<T: IntoIterator<Item = Seat>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

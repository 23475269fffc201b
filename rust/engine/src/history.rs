use std::collections::VecDeque;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::roster::Roster;
use crate::table::{HandOutcome, Scores};

/// One participant's line in the final standings.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub id: String,
    pub name: String,
    pub points: u32,
}

/// Immutable snapshot of a finished tournament.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    /// When the tournament finished (RFC3339, UTC)
    pub timestamp: String,
    /// Points per participant, best first
    pub standings: Vec<Standing>,
    /// Every hand played, table by table
    pub hands: Vec<HandOutcome>,
}

impl TournamentRecord {
    /// Build a record stamped with the current time. Participants missing
    /// from the roster are listed under their id.
    pub fn new(scores: &Scores, hands: Vec<HandOutcome>, roster: &Roster) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            standings: standings(scores, roster),
            hands,
        }
    }

    pub fn total_points(&self) -> u64 {
        self.standings.iter().map(|s| u64::from(s.points)).sum()
    }
}

/// Scores sorted by points descending, then by name.
pub fn standings(scores: &Scores, roster: &Roster) -> Vec<Standing> {
    let names = roster.names();
    let mut v: Vec<Standing> = scores
        .iter()
        .map(|(id, &points)| Standing {
            id: id.clone(),
            name: names.get(id).cloned().unwrap_or_else(|| id.clone()),
            points,
        })
        .collect();
    v.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
    v
}

/// Append-only log of tournament records.
///
/// With a capacity limit the oldest record is dropped once the log is full;
/// records themselves are never modified after they are pushed.
#[derive(Debug, Clone, Default)]
pub struct TournamentHistory {
    records: VecDeque<TournamentRecord>,
    limit: Option<usize>,
}

impl TournamentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` records (at least one).
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.max(1)),
            limit: Some(limit.max(1)),
        }
    }

    pub fn push(&mut self, record: TournamentRecord) {
        if let Some(limit) = self.limit {
            while self.records.len() >= limit {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    pub fn latest(&self) -> Option<&TournamentRecord> {
        self.records.back()
    }

    /// Records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TournamentRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

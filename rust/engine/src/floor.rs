use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::errors::{EngineError, Result};
use crate::history::{TournamentHistory, TournamentRecord};
use crate::roster::Roster;
use crate::table::{check_hand_count, HandOutcome, Scores, Table, MIN_PLAYERS};

/// Parameters of one tournament run.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    /// Participants per table; the last table may be smaller
    pub group_size: usize,
    /// Hands played at every table
    pub hands_per_group: usize,
    /// Seed for deck order and tie-breaks; `None` draws from the thread RNG
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            group_size: 6,
            hands_per_group: 1000,
            seed: None,
        }
    }
}

impl TournamentSettings {
    pub fn validate(&self) -> Result<()> {
        if self.group_size == 0 {
            return Err(EngineError::InvalidConfiguration(
                "group_size must be >= 1".into(),
            ));
        }
        check_hand_count(self.hands_per_group)
    }
}

/// Aggregated result of a tournament.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentOutcome {
    /// Points for every registered participant, zero included
    pub scores: Scores,
    /// Per-hand outcomes, table by table
    pub hands: Vec<HandOutcome>,
    /// Number of tables that actually played
    pub tables_played: usize,
}

/// Splits the roster into tables, runs them one after another and merges
/// their local scores into tournament-wide standings.
pub struct FloorManager {
    roster: Roster,
}

impl FloorManager {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Run a tournament using the settings' seed (or fresh entropy).
    ///
    /// A seeded run is reproducible end to end: one ChaCha20 stream derives
    /// every table's deck seed and settles every tie.
    pub fn run_tournament(&mut self, settings: &TournamentSettings) -> Result<TournamentOutcome> {
        let mut rng = match settings.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_rng(&mut rand::rng()),
        };
        self.run_tournament_with_rng(settings, &mut rng)
    }

    /// Run a tournament drawing deck seeds and tie-breaks from `rng`.
    ///
    /// Groups of fewer than two participants are skipped; their members
    /// still appear in the result with zero points. On error nothing is
    /// returned and the partial tallies are discarded.
    pub fn run_tournament_with_rng<R: Rng + ?Sized>(
        &mut self,
        settings: &TournamentSettings,
        rng: &mut R,
    ) -> Result<TournamentOutcome> {
        settings.validate()?;

        let mut outcome = TournamentOutcome {
            scores: self
                .roster
                .iter()
                .map(|p| (p.id().to_string(), 0))
                .collect(),
            ..Default::default()
        };

        for (index, group) in self.roster.chunks_mut(settings.group_size).enumerate() {
            if group.len() < MIN_PLAYERS {
                warn!(
                    group = index,
                    size = group.len(),
                    "group too small for a table, skipped"
                );
                continue;
            }
            let dealer = Dealer::new(Deck::new_with_seed(rng.random()));
            let mut table = Table::new(group, settings.hands_per_group)?
                .with_dealer(dealer)
                .with_index(index);
            let report = table.run(rng)?;

            for (id, points) in report.scores {
                *outcome.scores.entry(id).or_insert(0) += points;
            }
            outcome.hands.extend(report.hands);
            outcome.tables_played += 1;
        }

        info!(
            participants = self.roster.len(),
            tables = outcome.tables_played,
            hands_per_group = settings.hands_per_group,
            "tournament finished"
        );
        Ok(outcome)
    }

    /// Run a tournament, append its record to `history` and return a copy.
    pub fn run_and_record(
        &mut self,
        settings: &TournamentSettings,
        history: &mut TournamentHistory,
    ) -> Result<TournamentRecord> {
        let outcome = self.run_tournament(settings)?;
        let record = TournamentRecord::new(&outcome.scores, outcome.hands, &self.roster);
        history.push(record.clone());
        Ok(record)
    }
}

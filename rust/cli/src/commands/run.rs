//! Tournament command handler.
//!
//! Builds a roster of bots, runs one tournament through the floor manager
//! and prints the standings, or the whole tournament record as JSON.
//!
//! # Environment Variables
//!
//! Settings not given on the command line come from `CARDFLOOR_*`
//! variables or the file named by `CARDFLOOR_CONFIG`; see [`crate::config`].

use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::formatters::format_standings;
use crate::ui;
use cardfloor_ai::create_bot;
use cardfloor_engine::floor::FloorManager;
use cardfloor_engine::history::TournamentHistory;
use cardfloor_engine::player::Seat;
use cardfloor_engine::roster::Roster;
use cardfloor_engine::table::MIN_PLAYERS;
use std::io::Write;
use tracing::info;

/// Handle the run command.
///
/// # Arguments
///
/// * `overrides` - Values given on the command line
/// * `json` - Print the full tournament record as JSON instead of a table
/// * `out` - Output stream for results
/// * `err` - Output stream for warnings and errors
pub fn handle_run_command(
    overrides: &Overrides,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_overrides(overrides)?.config;

    let roster = (1..=cfg.participants)
        .map(|i| -> Result<Seat, CliError> {
            let bot = create_bot(&cfg.strategy, Some(&format!("Bot-{:02}", i)))?;
            Ok(Box::new(bot) as Seat)
        })
        .collect::<Result<Roster, CliError>>()?;

    let straggler = cfg.participants % cfg.group_size;
    if straggler > 0 && straggler < MIN_PLAYERS {
        ui::display_warning(
            err,
            &format!(
                "{} participant(s) left over after grouping by {} will not play",
                straggler, cfg.group_size
            ),
        )?;
    }

    let groups = cfg.participants.div_ceil(cfg.group_size);
    info!(
        participants = cfg.participants,
        groups,
        hands_per_group = cfg.hands_per_group,
        "starting tournament"
    );

    let mut floor = FloorManager::new(roster);
    let mut history = TournamentHistory::new();
    let record = floor.run_and_record(&cfg.tournament_settings(), &mut history)?;

    if json {
        let s = serde_json::to_string_pretty(&record).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(
        out,
        "Tournament with {} bots, groups of {}, {} hands per table",
        cfg.participants, cfg.group_size, cfg.hands_per_group
    )?;
    writeln!(out)?;
    writeln!(out, "Tournament Results:")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for line in format_standings(&record.standings) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(out, "Total points: {}", record.total_points())?;
    Ok(())
}

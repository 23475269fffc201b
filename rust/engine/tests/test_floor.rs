use cardfloor_engine::floor::{FloorManager, TournamentSettings};
use cardfloor_engine::history::TournamentHistory;
use cardfloor_engine::player::{Player, Seat};
use cardfloor_engine::roster::Roster;
use cardfloor_engine::EngineError;

fn roster(n: usize) -> Roster {
    (1..=n)
        .map(|i| Box::new(Player::new(Some(&format!("Bot-{:02}", i)))) as Seat)
        .collect()
}

fn settings(group_size: usize, hands_per_group: usize) -> TournamentSettings {
    TournamentSettings {
        group_size,
        hands_per_group,
        seed: None,
    }
}

#[test]
fn twelve_players_in_two_tables() {
    let mut floor = FloorManager::new(roster(12));
    let outcome = floor.run_tournament(&settings(6, 1000)).unwrap();

    assert_eq!(outcome.tables_played, 2);
    assert_eq!(outcome.scores.values().sum::<u32>(), 2000);
    assert_eq!(outcome.hands.len(), 2000);
    for p in floor.roster().iter() {
        assert!(outcome.scores.contains_key(p.id()));
    }
}

#[test]
fn undersized_last_group_is_skipped_but_listed() {
    let mut floor = FloorManager::new(roster(7));
    let outcome = floor.run_tournament(&settings(3, 50)).unwrap();

    // groups of 3, 3 and 1: the single straggler never plays
    assert_eq!(outcome.tables_played, 2);
    assert_eq!(outcome.scores.len(), 7);
    assert_eq!(outcome.scores.values().sum::<u32>(), 100);
    let last = floor.roster().all()[6].id().to_string();
    assert_eq!(outcome.scores[&last], 0);
}

#[test]
fn smaller_final_group_still_plays() {
    let mut floor = FloorManager::new(roster(8));
    let outcome = floor.run_tournament(&settings(6, 10)).unwrap();
    assert_eq!(outcome.tables_played, 2);
    assert_eq!(outcome.scores.values().sum::<u32>(), 20);
    assert!(outcome.hands.iter().any(|h| h.table == 1));
}

#[test]
fn tables_only_score_their_own_members() {
    let mut floor = FloorManager::new(roster(4));
    let outcome = floor.run_tournament(&settings(2, 30)).unwrap();
    let ids: Vec<String> = floor.roster().iter().map(|p| p.id().to_string()).collect();
    let first_table: u32 = outcome.scores[&ids[0]] + outcome.scores[&ids[1]];
    let second_table: u32 = outcome.scores[&ids[2]] + outcome.scores[&ids[3]];
    assert_eq!(first_table, 30);
    assert_eq!(second_table, 30);
}

#[test]
fn seeded_tournaments_are_reproducible() {
    let mut floor = FloorManager::new(roster(9));
    let s = TournamentSettings {
        group_size: 3,
        hands_per_group: 200,
        seed: Some(42),
    };
    let a = floor.run_tournament(&s).unwrap();
    let b = floor.run_tournament(&s).unwrap();
    assert_eq!(a, b);
}

#[test]
fn group_size_one_plays_nothing() {
    let mut floor = FloorManager::new(roster(5));
    let outcome = floor.run_tournament(&settings(1, 100)).unwrap();
    assert_eq!(outcome.tables_played, 0);
    assert_eq!(outcome.scores.len(), 5);
    assert!(outcome.scores.values().all(|&v| v == 0));
}

#[test]
fn zero_group_size_is_rejected() {
    let mut floor = FloorManager::new(roster(4));
    assert!(matches!(
        floor.run_tournament(&settings(0, 10)),
        Err(EngineError::InvalidConfiguration(_))
    ));
}

#[test]
fn oversized_group_fails_without_recording() {
    let mut floor = FloorManager::new(roster(30));
    let mut history = TournamentHistory::new();
    let err = floor
        .run_and_record(&settings(30, 5), &mut history)
        .unwrap_err();
    assert!(matches!(err, EngineError::InsufficientCards { .. }));
    assert!(history.is_empty());
}

#[test]
fn empty_roster_yields_empty_scores() {
    let mut floor = FloorManager::new(Roster::default());
    let outcome = floor.run_tournament(&settings(6, 10)).unwrap();
    assert!(outcome.scores.is_empty());
    assert_eq!(outcome.tables_played, 0);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn hands_per_group_must_fit_a_score() {
    let too_many = u32::MAX as usize + 1;
    assert!(settings(6, u32::MAX as usize).validate().is_ok());
    assert!(matches!(
        settings(6, too_many).validate(),
        Err(EngineError::InvalidConfiguration(_))
    ));
    let mut floor = FloorManager::new(roster(4));
    assert!(floor.run_tournament(&settings(2, too_many)).is_err());
}

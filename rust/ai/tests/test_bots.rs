use std::cell::Cell;
use std::rc::Rc;

use cardfloor_ai::{create_bot, create_strategy, AiError, Bot, Strategy};
use cardfloor_engine::cards::{Card, Rank, Suit};
use cardfloor_engine::floor::{FloorManager, TournamentSettings};
use cardfloor_engine::player::{Participant, Seat};
use cardfloor_engine::roster::Roster;

struct Recording {
    seen: Rc<Cell<usize>>,
    calls: Rc<Cell<usize>>,
}

impl Recording {
    fn new(seen: &Rc<Cell<usize>>, calls: &Rc<Cell<usize>>) -> Box<Self> {
        Box::new(Self {
            seen: Rc::clone(seen),
            calls: Rc::clone(calls),
        })
    }
}

impl Strategy for Recording {
    fn name(&self) -> &str {
        "Recording"
    }
    fn observe(&mut self, hole: &[Card], community: &[Card]) {
        self.seen.set(self.seen.get() + hole.len() + community.len());
        self.calls.set(self.calls.get() + 1);
    }
}

#[test]
fn factory_knows_random_and_none() {
    assert_eq!(create_strategy("random").unwrap().name(), "RandomStrategy");
    assert_eq!(create_strategy("NONE").unwrap().name(), "RandomStrategy");
    assert_eq!(
        create_strategy("gto").err(),
        Some(AiError::UnknownStrategy("gto".to_string()))
    );
}

#[test]
fn bot_defaults_name_from_id() {
    let bot = create_bot("random", None).unwrap();
    assert!(bot.name().starts_with("Bot-"));
    assert_eq!(bot.name().len(), "Bot-".len() + 8);
    assert!(bot.id().starts_with(&bot.name()["Bot-".len()..]));
}

#[test]
fn bot_receives_and_resets_cards() {
    let mut bot = create_bot("random", Some("B")).unwrap();
    let a = Card::new(Suit::Spades, Rank::Ace);
    let k = Card::new(Suit::Spades, Rank::King);
    bot.receive(a);
    bot.receive(k);
    assert_eq!(bot.hand(), &[a, k]);
    bot.observe(&[]);
    bot.reset_hand();
    assert!(bot.hand().is_empty());
}

#[test]
fn custom_strategy_plugs_into_bot() {
    let seen = Rc::new(Cell::new(0));
    let calls = Rc::new(Cell::new(0));
    let mut bot = Bot::new(Some("R"), Recording::new(&seen, &calls));
    assert_eq!(bot.strategy_name(), "Recording");
    bot.receive(Card::new(Suit::Clubs, Rank::Two));
    bot.observe(&[Card::new(Suit::Hearts, Rank::Three)]);
    assert_eq!(seen.get(), 2);
    assert_eq!(calls.get(), 1);
    assert!(format!("{:?}", bot).contains("Recording"));
}

#[test]
fn bots_play_a_tournament() {
    let roster: Roster = (1..=12)
        .map(|i| Box::new(create_bot("random", Some(&format!("Bot-{:02}", i))).unwrap()) as Seat)
        .collect();
    let mut floor = FloorManager::new(roster);
    let outcome = floor
        .run_tournament(&TournamentSettings {
            group_size: 6,
            hands_per_group: 100,
            seed: Some(5),
        })
        .unwrap();
    assert_eq!(outcome.scores.len(), 12);
    assert_eq!(outcome.scores.values().sum::<u32>(), 200);
}

#[test]
fn strategies_see_every_hand_of_a_tournament() {
    let seen = Rc::new(Cell::new(0));
    let calls = Rc::new(Cell::new(0));
    let roster: Roster = (1..=4)
        .map(|i| Box::new(Bot::new(Some(&format!("R{i}")), Recording::new(&seen, &calls))) as Seat)
        .collect();
    let mut floor = FloorManager::new(roster);
    floor
        .run_tournament(&TournamentSettings {
            group_size: 4,
            hands_per_group: 10,
            seed: Some(1),
        })
        .unwrap();
    // four bots, ten hands, two hole cards plus a five-card board each time
    assert_eq!(calls.get(), 4 * 10);
    assert_eq!(seen.get(), 4 * 10 * (2 + 5));
}

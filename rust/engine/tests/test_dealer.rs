use std::collections::HashSet;

use cardfloor_engine::cards::Card;
use cardfloor_engine::dealer::Dealer;
use cardfloor_engine::deck::Deck;
use cardfloor_engine::player::{Player, Seat};
use cardfloor_engine::EngineError;

fn seats(n: usize) -> Vec<Seat> {
    (0..n)
        .map(|i| Box::new(Player::with_id(format!("p{i}"), format!("P{i}"))) as Seat)
        .collect()
}

#[test]
fn hole_cards_are_dealt_round_robin() {
    let mut deck = Deck::new();
    deck.shuffle(Some(99));
    let top = deck.peek(6);
    let mut dealer = Dealer::new(deck);
    let mut players = seats(3);

    dealer.deal_to_players(&mut players, 2).unwrap();

    assert_eq!(players[0].hand(), &[top[0], top[3]]);
    assert_eq!(players[1].hand(), &[top[1], top[4]]);
    assert_eq!(players[2].hand(), &[top[2], top[5]]);
    assert_eq!(dealer.deck().remaining(), 46);
}

#[test]
fn community_cards_append_in_draw_order() {
    let deck = Deck::new_with_seed(1);
    let top = deck.peek(5);
    let mut dealer = Dealer::new(deck);

    let flop = dealer.deal_community(3).unwrap();
    assert_eq!(flop, top[..3].to_vec());
    dealer.burn(0).unwrap();
    let rest = dealer.deal_community(2).unwrap();
    assert_eq!(rest, top[3..].to_vec());
    assert_eq!(dealer.community(), top.as_slice());

    dealer.clear_community();
    assert!(dealer.community().is_empty());
}

#[test]
fn cards_are_conserved_across_deck_hands_and_board() {
    let mut deck = Deck::new();
    deck.shuffle(Some(2024));
    let mut dealer = Dealer::new(deck);
    let mut players = seats(6);

    dealer.deal_to_players(&mut players, 2).unwrap();
    dealer.burn(1).unwrap();
    dealer.deal_community(5).unwrap();

    let mut seen: HashSet<Card> = HashSet::new();
    for p in &players {
        for c in p.hand() {
            assert!(seen.insert(*c));
        }
    }
    for c in dealer.community() {
        assert!(seen.insert(*c));
    }
    for c in dealer.deck().peek(52) {
        assert!(seen.insert(c));
    }
    // one burned card is gone from every location
    assert_eq!(seen.len(), 51);
}

#[test]
fn oversized_deal_leaves_table_untouched() {
    let mut dealer = Dealer::new(Deck::new());
    let mut players = seats(27);
    let err = dealer.deal_to_players(&mut players, 2).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            requested: 54,
            available: 52
        }
    );
    assert_eq!(dealer.deck().remaining(), 52);
    assert!(players.iter().all(|p| p.hand().is_empty()));
}

#[test]
fn community_deal_beyond_deck_fails() {
    let mut dealer = Dealer::new(Deck::new());
    dealer.burn(50).unwrap();
    assert!(matches!(
        dealer.deal_community(5),
        Err(EngineError::InsufficientCards { .. })
    ));
    assert!(dealer.community().is_empty());
}

use crate::cards::Card;

/// Highest rank value (2..=14) among `cards`, or 0 for an empty pool.
///
/// This is the whole scoring rule: hands are compared on their single
/// best card, not on poker categories.
pub fn best_high_card<'a, I>(cards: I) -> u8
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .map(|c| c.rank.value())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn empty_pool_scores_zero() {
        assert_eq!(best_high_card(&[]), 0);
    }

    #[test]
    fn picks_max_across_hand_and_board() {
        let hand = [
            Card::new(Suit::Clubs, Rank::Four),
            Card::new(Suit::Hearts, Rank::Nine),
        ];
        let board = [
            Card::new(Suit::Spades, Rank::Queen),
            Card::new(Suit::Diamonds, Rank::Two),
        ];
        assert_eq!(best_high_card(hand.iter().chain(board.iter())), 12);
        assert_eq!(best_high_card(&hand), 9);
    }
}

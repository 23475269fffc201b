//! Card, board and standings formatters for terminal display.
//!
//! Pure functions: nothing here writes to a stream. Cards use Unicode suit
//! symbols with an ASCII fallback for terminals that cannot render them.
//!
//! ## Example
//!
//! ```rust
//! use cardfloor_engine::cards::{Card, Rank, Suit};
//! use cardfloor_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use cardfloor_engine::cards::{Card, Rank, Suit};
use cardfloor_engine::history::Standing;

/// Unicode is assumed everywhere except Windows consoles that do not
/// advertise a modern terminal.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Single-character rank (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ten => "T".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        r => r.value().to_string(),
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards in bracket notation, e.g. `[A♠ K♥ Q♦]`, or `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted_cards.join(" "))
}

/// One line per participant: rank, name padded to 20 columns, points.
pub fn format_standings(standings: &[Standing]) -> Vec<String> {
    standings
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{:>3}. {:<20} {:>6} points", i + 1, s.name, s.points))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_single_characters() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Nine), "9");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn empty_board_is_brackets() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn standings_lines_are_numbered() {
        let lines = format_standings(&[
            Standing {
                id: "a".into(),
                name: "Bot-01".into(),
                points: 180,
            },
            Standing {
                id: "b".into(),
                name: "Bot-02".into(),
                points: 7,
            },
        ]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. Bot-01"));
        assert!(lines[0].ends_with("180 points"));
        assert!(lines[1].contains("Bot-02"));
    }
}

use std::fmt::{Display, self};

use crate::deck::{BadCardSnafu, DeckError, WireCard};

/// A single playing card as reported by the deck service.
///
/// The `code` is the service's own identifier for the card (e.g. `AS`,
/// `0H`); it is carried for display only and has no effect on scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    code: String,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        let mut code = String::with_capacity(2);
        code.push(rank.code_char());
        code.push(suit.code_char());
        Card { rank, suit, code }
    }
    /// Converts a card off the wire, rejecting anything that is not a
    /// standard rank and suit. A malformed card is a data-integrity
    /// failure of the service, never a zero-value card.
    pub(crate) fn from_wire(wire: WireCard) -> Result<Self, DeckError> {
        match (Rank::from_wire(&wire.value), Suit::from_wire(&wire.suit)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit, code: wire.code }),
            _ => BadCardSnafu { value: wire.value, suit: wire.suit }.fail(),
        }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Suit::Clubs => write!(f, "♣")?,
            Suit::Hearts => write!(f, "♥")?,
            Suit::Spades => write!(f, "♠")?,
            Suit::Diamonds => write!(f, "♦")?,
        }
        match self.rank {
            Rank::King => write!(f, "K"),
            Rank::Queen => write!(f, "Q"),
            Rank::Jack => write!(f, "J"),
            Rank::Ten => write!(f, "10"),
            Rank::Nine => write!(f, "9"),
            Rank::Eight => write!(f, "8"),
            Rank::Seven => write!(f, "7"),
            Rank::Six => write!(f, "6"),
            Rank::Five => write!(f, "5"),
            Rank::Four => write!(f, "4"),
            Rank::Three => write!(f, "3"),
            Rank::Two => write!(f, "2"),
            Rank::Ace => write!(f, "A"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Hearts = 1,
    Spades = 2,
    Diamonds = 3,
}

impl Suit {
    fn from_wire(suit: &str) -> Option<Self> {
        Some(match suit {
            "CLUBS" => Suit::Clubs,
            "HEARTS" => Suit::Hearts,
            "SPADES" => Suit::Spades,
            "DIAMONDS" => Suit::Diamonds,
            _ => return None,
        })
    }
    fn code_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Rank {
    King = 12,
    Queen = 11,
    Jack = 10,
    Ten = 9,
    Nine = 8,
    Eight = 7,
    Seven = 6,
    Six = 5,
    Five = 4,
    Four = 3,
    Three = 2,
    Two = 1,
    Ace = 0,
}

impl Rank {
    /// Parses the service's `value` string: `ACE`, `KING`, `QUEEN`,
    /// `JACK`, or a base-10 integer in `2..=10`.
    fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "ACE" => Rank::Ace,
            "KING" => Rank::King,
            "QUEEN" => Rank::Queen,
            "JACK" => Rank::Jack,
            _ => match value.parse::<u8>().ok()? {
                10 => Rank::Ten,
                9 => Rank::Nine,
                8 => Rank::Eight,
                7 => Rank::Seven,
                6 => Rank::Six,
                5 => Rank::Five,
                4 => Rank::Four,
                3 => Rank::Three,
                2 => Rank::Two,
                _ => return None,
            },
        })
    }
    /// Hard blackjack value: face cards count 10, the Ace counts 1 here.
    /// Soft-Ace adjustment is the hand's business, not the card's.
    pub fn base_value(self) -> u8 {
        (self as u8 + 1).min(10)
    }
    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }
    fn code_char(self) -> char {
        match self {
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Ten => '0',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
            Rank::Six => '6',
            Rank::Five => '5',
            Rank::Four => '4',
            Rank::Three => '3',
            Rank::Two => '2',
            Rank::Ace => 'A',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(code: &str, value: &str, suit: &str) -> WireCard {
        WireCard {
            code: code.to_owned(),
            value: value.to_owned(),
            suit: suit.to_owned(),
        }
    }

    #[test]
    fn parses_face_ranks() {
        assert_eq!(Rank::from_wire("ACE"), Some(Rank::Ace));
        assert_eq!(Rank::from_wire("KING"), Some(Rank::King));
        assert_eq!(Rank::from_wire("QUEEN"), Some(Rank::Queen));
        assert_eq!(Rank::from_wire("JACK"), Some(Rank::Jack));
    }

    #[test]
    fn parses_numeric_ranks() {
        assert_eq!(Rank::from_wire("2"), Some(Rank::Two));
        assert_eq!(Rank::from_wire("7"), Some(Rank::Seven));
        assert_eq!(Rank::from_wire("10"), Some(Rank::Ten));
    }

    #[test]
    fn rejects_malformed_ranks() {
        assert_eq!(Rank::from_wire("1"), None);
        assert_eq!(Rank::from_wire("11"), None);
        assert_eq!(Rank::from_wire("JOKER"), None);
        assert_eq!(Rank::from_wire(""), None);
    }

    #[test]
    fn wire_card_round_trip() {
        let card = Card::from_wire(wire("0H", "10", "HEARTS")).unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Hearts);
        assert_eq!(card.code(), "0H");
        assert_eq!(card.to_string(), "♥10");
    }

    #[test]
    fn bad_card_is_an_error_not_zero() {
        let err = Card::from_wire(wire("??", "ELEVEN", "SPADES")).unwrap_err();
        assert!(matches!(err, DeckError::BadCard { .. }));
        let err = Card::from_wire(wire("AX", "ACE", "STARS")).unwrap_err();
        assert!(matches!(err, DeckError::BadCard { .. }));
    }

    #[test]
    fn base_values() {
        assert_eq!(Rank::Ace.base_value(), 1);
        assert_eq!(Rank::Two.base_value(), 2);
        assert_eq!(Rank::Nine.base_value(), 9);
        assert_eq!(Rank::Ten.base_value(), 10);
        assert_eq!(Rank::Jack.base_value(), 10);
        assert_eq!(Rank::King.base_value(), 10);
    }

    #[test]
    fn synthesised_codes_match_the_service_scheme() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).code(), "AS");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).code(), "0H");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Queen).code(), "QD");
    }
}

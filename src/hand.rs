use crate::card::Card;

/// An ordered, append-only sequence of cards held by one side of the
/// table. The blackjack value is cached and kept current on every append.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
    soft: bool,
    value: u8,
}

impl Hand {
    pub fn new<const N: usize>(cards: [Card; N]) -> Self {
        let mut h = Hand {
            cards: cards.to_vec(),
            .. Default::default()
        };
        h.update();
        h
    }
    fn update(&mut self) {
        let (v, s) = value_with_soft(&self.cards);
        self.soft = s;
        self.value = v;
    }
    /// Whether an Ace is currently counted as 11.
    pub fn is_soft(&self) -> bool {
        self.soft
    }
    pub fn value(&self) -> u8 {
        self.value
    }
    #[inline]
    pub fn is_bust(&self) -> bool {
        self.value > 21
    }
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.update();
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Ace-aware total. Every card contributes its hard value; if the hand
/// holds an Ace and promoting one to 11 stays within 21, it is promoted.
/// At most one Ace can ever count 11 (two would already be 22), so this
/// is the same as counting every Ace 11 and downgrading one at a time
/// while the total exceeds 21.
fn value_with_soft(hand: &[Card]) -> (u8, bool) {
    let mut ace = false;
    let mut hand_value = 0;
    for card in hand {
        ace |= card.rank().is_ace();
        hand_value += card.rank().base_value();
    }

    if ace && hand_value <= 11 {
        (hand_value + 10, true)
    } else {
        (hand_value, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut h = Hand::default();
        for &rank in ranks {
            h.add_card(Card::new(Suit::Spades, rank));
        }
        h
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(Hand::default().value(), 0);
    }

    #[test]
    fn ace_free_hands_sum_plainly() {
        assert_eq!(hand(&[Rank::Two, Rank::Nine]).value(), 11);
        assert_eq!(hand(&[Rank::Ten, Rank::Seven]).value(), 17);
        assert_eq!(hand(&[Rank::King, Rank::Queen, Rank::Jack]).value(), 30);
    }

    #[test]
    fn blackjack_is_twentyone() {
        let h = Hand::new([
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::King),
        ]);
        assert_eq!(h.value(), 21);
        assert!(h.is_soft());
    }

    #[test]
    fn two_aces_make_twelve() {
        let h = hand(&[Rank::Ace, Rank::Ace]);
        assert_eq!(h.value(), 12);
        assert!(h.is_soft());
    }

    #[test]
    fn aces_downgrade_one_at_a_time() {
        // A + A + 9: 11 + 1 + 9 = 21, one Ace still soft.
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(h.value(), 21);
        assert!(h.is_soft());
        // A + A + K: both Aces forced hard, 1 + 1 + 10.
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::King]);
        assert_eq!(h.value(), 12);
        assert!(!h.is_soft());
    }

    #[test]
    fn hard_ace_when_even_one_promotion_busts() {
        let h = hand(&[Rank::Ace, Rank::King, Rank::Five]);
        assert_eq!(h.value(), 16);
        assert!(!h.is_soft());
    }

    #[test]
    fn bust_is_reported_not_clamped() {
        let h = hand(&[Rank::King, Rank::Seven, Rank::Eight]);
        assert_eq!(h.value(), 25);
        assert!(h.is_bust());
    }

    #[test]
    fn value_is_idempotent() {
        let h = hand(&[Rank::Ace, Rank::Six, Rank::Ten]);
        assert_eq!(h.value(), h.value());
        assert_eq!(h.clone(), h);
    }

    #[test]
    fn appending_recomputes() {
        let mut h = hand(&[Rank::Ace, Rank::Six]);
        assert_eq!(h.value(), 17);
        assert!(h.is_soft());
        h.add_card(Card::new(Suit::Hearts, Rank::Ten));
        assert_eq!(h.value(), 17);
        assert!(!h.is_soft());
        assert_eq!(h.cards().len(), 3);
    }
}

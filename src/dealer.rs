use crate::hand::Hand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dealer {
    /// If false, stands on soft 17, if true, hits on soft 17
    hit_soft_17: bool,
}

impl Dealer {
    /// Dealer that stands on soft 17
    pub fn s17() -> Self {
        Dealer { hit_soft_17: false }
    }
    /// Dealer that hits on soft 17
    pub fn h17() -> Self {
        Dealer { hit_soft_17: true }
    }
    /// Whether the house policy makes the dealer draw another card.
    pub fn hits(&self, hand: &Hand) -> bool {
        hand.value() < 17 || (hand.value() == 17 && hand.is_soft() && self.hit_soft_17)
    }
}

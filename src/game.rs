use std::cmp::Ordering::{Equal, Greater, Less};
use std::str::FromStr;

use crate::dealer::Dealer;
use crate::deck::{CardSource, DeckHandle, Result};
use crate::hand::Hand;

/// A player intent during their turn. Exactly two spellings are
/// recognised for each, matched case-sensitively.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Move {
    Hit,
    Stand,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidMove;

impl FromStr for Move {
    type Err = InvalidMove;
    fn from_str(s: &str) -> Result<Self, InvalidMove> {
        match s {
            "hit" | "хит" => Ok(Move::Hit),
            "stand" | "стоп" => Ok(Move::Stand),
            _ => Err(InvalidMove),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Turn {
    Player,
    Dealer,
    Settled(Outcome),
}

/// One round of blackjack. The dealer phase is reachable only through a
/// Stand; a player bust settles the round directly and the dealer never
/// draws.
#[derive(Debug)]
pub struct Round {
    deck: DeckHandle,
    player: Hand,
    dealer_hand: Hand,
    dealer: Dealer,
    turn: Turn,
}

impl Round {
    /// Requests a fresh deck and deals two cards to the player, then two
    /// to the dealer.
    pub fn deal(source: &mut impl CardSource, dealer: Dealer) -> Result<Self> {
        let deck = source.new_deck()?;
        let mut player = Hand::default();
        let mut dealer_hand = Hand::default();
        player.add_card(source.draw(&deck)?);
        player.add_card(source.draw(&deck)?);
        dealer_hand.add_card(source.draw(&deck)?);
        dealer_hand.add_card(source.draw(&deck)?);
        Ok(Round {
            deck,
            player,
            dealer_hand,
            dealer,
            turn: Turn::Player,
        })
    }
    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn player_hand(&self) -> &Hand {
        &self.player
    }
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }
    /// The final outcome, once the round is settled.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.turn {
            Turn::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }
    /// Applies a player move. Ignored outside the player's turn.
    pub fn play(&mut self, mv: Move, source: &mut impl CardSource) -> Result<()> {
        if self.turn != Turn::Player {
            return Ok(());
        }
        match mv {
            Move::Hit => {
                self.player.add_card(source.draw(&self.deck)?);
                if self.player.is_bust() {
                    self.turn = Turn::Settled(Outcome::PlayerBust);
                }
            }
            Move::Stand => self.turn = Turn::Dealer,
        }
        Ok(())
    }
    /// One dealer decision: draws if the house policy says hit,
    /// otherwise settles the round. Returns whether a card was drawn.
    /// Ignored outside the dealer's turn.
    pub fn dealer_step(&mut self, source: &mut impl CardSource) -> Result<bool> {
        if self.turn != Turn::Dealer {
            return Ok(false);
        }
        if self.dealer.hits(&self.dealer_hand) {
            self.dealer_hand.add_card(source.draw(&self.deck)?);
            Ok(true)
        } else {
            self.turn = Turn::Settled(self.settle());
            Ok(false)
        }
    }
    /// Settlement order matters: a player bust loses before the dealer's
    /// total is even looked at.
    fn settle(&self) -> Outcome {
        let (p, d) = (self.player.value(), self.dealer_hand.value());
        if p > 21 {
            Outcome::PlayerBust
        } else if d > 21 {
            Outcome::DealerBust
        } else {
            match p.cmp(&d) {
                Greater => Outcome::PlayerWins,
                Less => Outcome::DealerWins,
                Equal => Outcome::Push,
            }
        }
    }
}

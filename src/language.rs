use serde_derive::Deserialize;

use crate::game::Outcome;

const RU: &str = include_str!("../languages/ru.json");
const EN: &str = include_str!("../languages/en.json");

/// Message catalog for the interactive transcript. The recognised move
/// spellings are not part of the catalog; both pairs are always
/// accepted regardless of the display language.
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub lang_code: Box<str>,
    pub welcome: Box<str>,
    pub your_cards: Box<str>,
    pub sum: Box<str>,
    pub your_move: Box<str>,
    pub invalid_move: Box<str>,
    pub dealer_turn: Box<str>,
    pub dealer_cards: Box<str>,
    pub dealer_sum: Box<str>,
    pub dealer_hits: Box<str>,
    pub result: Box<str>,

    pub outcomes: Outcomes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Outcomes {
    player_bust: Box<str>,
    dealer_bust: Box<str>,
    player_wins: Box<str>,
    dealer_wins: Box<str>,
    push: Box<str>,
}

impl Language {
    /// Loads an embedded catalog. Unknown codes fall back to Russian,
    /// the language of the original table.
    pub fn load(code: &str) -> serde_json::Result<Language> {
        match code {
            "en" => serde_json::from_str(EN),
            _ => serde_json::from_str(RU),
        }
    }
    pub fn outcome(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::PlayerBust => &self.outcomes.player_bust,
            Outcome::DealerBust => &self.outcomes.dealer_bust,
            Outcome::PlayerWins => &self.outcomes.player_wins,
            Outcome::DealerWins => &self.outcomes.dealer_wins,
            Outcome::Push => &self.outcomes.push,
        }
    }
}

pub mod card;
pub mod dealer;
pub mod deck;
pub mod game;
pub mod hand;
pub mod language;

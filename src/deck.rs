use std::fmt::Display;
use std::thread::sleep;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use snafu::{ensure, OptionExt, ResultExt, Snafu};

use crate::card::Card;

pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com";

const RETRY_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DeckError {
    /// Transport or decode failure talking to the service.
    #[snafu(display("deck service request failed: {source}"))]
    Http { source: reqwest::Error },
    #[snafu(display("deck service reported failure"))]
    ServiceFailure,
    #[snafu(display("deck service returned no cards"))]
    EmptyDraw,
    #[snafu(display("unrecognised card from deck service: {value:?} of {suit:?}"))]
    BadCard { value: String, suit: String },
}

pub type Result<T, E = DeckError> = std::result::Result<T, E>;

/// Opaque token for one server-side shuffled deck. The service owns the
/// deck's lifecycle; there is nothing to release on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckHandle(String);

impl DeckHandle {
    pub fn new(id: impl Into<String>) -> Self {
        DeckHandle(id.into())
    }
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// The external collaborator that supplies every card in the game.
pub trait CardSource {
    /// Requests one freshly shuffled 52-card deck.
    fn new_deck(&mut self) -> Result<DeckHandle>;
    /// Draws exactly one card from the named deck.
    fn draw(&mut self, deck: &DeckHandle) -> Result<Card>;
}

// A `success: false` body carries an error message instead of the
// payload fields, so those default rather than failing the decode.
#[derive(Debug, Deserialize)]
struct WireDeck {
    success: bool,
    #[serde(default)]
    deck_id: String,
}

#[derive(Debug, Deserialize)]
struct WireDraw {
    success: bool,
    #[serde(default)]
    cards: Vec<WireCard>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCard {
    pub code: String,
    pub value: String,
    pub suit: String,
}

/// Blocking client for the Deck of Cards HTTP API.
pub struct HttpDeckSource {
    client: Client,
    base_url: String,
}

impl HttpDeckSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context(HttpSnafu)?;
        Ok(HttpDeckSource {
            client,
            base_url: base_url.into(),
        })
    }
    fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        with_retry(RETRY_ATTEMPTS, RETRY_BASE_DELAY, || {
            self.client
                .get(url)
                .send()
                .and_then(|resp| resp.error_for_status())
                .and_then(|resp| resp.json())
        })
        .context(HttpSnafu)
    }
}

impl CardSource for HttpDeckSource {
    fn new_deck(&mut self) -> Result<DeckHandle> {
        let url = format!("{}/api/deck/new/shuffle/?deck_count=1", self.base_url);
        let deck: WireDeck = self.get(&url)?;
        ensure!(deck.success, ServiceFailureSnafu);
        debug!("created deck {}", deck.deck_id);
        Ok(DeckHandle(deck.deck_id))
    }
    fn draw(&mut self, deck: &DeckHandle) -> Result<Card> {
        let url = format!("{}/api/deck/{}/draw/?count=1", self.base_url, deck.id());
        let draw: WireDraw = self.get(&url)?;
        ensure!(draw.success, ServiceFailureSnafu);
        let wire = draw.cards.into_iter().next().context(EmptyDrawSnafu)?;
        let card = Card::from_wire(wire)?;
        debug!("drew {} from deck {}", card.code(), deck.id());
        Ok(card)
    }
}

/// Runs `op` until it succeeds, up to `attempts` tries, sleeping
/// `base * n` after the nth failure. The last error is returned as-is.
fn with_retry<T, E: Display>(
    attempts: u32,
    base: Duration,
    mut op: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
    let mut n = 0;
    loop {
        match op() {
            Ok(v) => return Ok(v),
            Err(e) => {
                n += 1;
                if n >= attempts {
                    return Err(e);
                }
                warn!("deck service request failed (attempt {n} of {attempts}): {e}");
                sleep(base * n);
            }
        }
    }
}

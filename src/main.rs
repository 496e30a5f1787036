use std::env;
use std::io::{stdin, stdout, Write};

use anyhow::Context;
use flexi_logger::Logger;

use enogtyve::dealer::Dealer;
use enogtyve::deck::{self, HttpDeckSource};
use enogtyve::game::{Move, Round, Turn};
use enogtyve::hand::Hand;
use enogtyve::language::Language;

fn main() -> anyhow::Result<()> {
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    let lang_code = env::var("BLACKJACK_LANG").unwrap_or_else(|_| "ru".into());
    let lang = Language::load(&lang_code).context("broken language catalog")?;
    let base_url =
        env::var("BLACKJACK_DECK_URL").unwrap_or_else(|_| deck::DEFAULT_BASE_URL.into());

    let mut source = HttpDeckSource::new(base_url)?;
    let mut round = Round::deal(&mut source, Dealer::s17())?;

    println!("{}", lang.welcome);
    loop {
        println!();
        println!("{}:", lang.your_cards);
        print_hand(round.player_hand());
        println!();
        println!("{}: {}", lang.sum, round.player_hand().value());

        if let Some(outcome) = round.outcome() {
            // busted on the last hit; the dealer never acts
            println!("{}", lang.outcome(outcome));
            return Ok(());
        }

        print!("{}", lang.your_move);
        stdout().flush()?;
        let Some(line) = read_line()? else {
            // stdin closed
            return Ok(());
        };
        match line.parse::<Move>() {
            Ok(mv) => round.play(mv, &mut source)?,
            Err(_) => println!("{}", lang.invalid_move),
        }
        if round.turn() == Turn::Dealer {
            break;
        }
    }

    println!();
    println!("{}", lang.dealer_turn);
    while round.turn() == Turn::Dealer {
        println!();
        println!("{}:", lang.dealer_cards);
        print_hand(round.dealer_hand());
        println!();
        println!("{}: {}", lang.dealer_sum, round.dealer_hand().value());
        if round.dealer_step(&mut source)? {
            println!("{}", lang.dealer_hits);
        }
    }

    println!();
    println!("{}", lang.result);
    println!("{} ({}):", lang.your_cards, round.player_hand().value());
    print_hand(round.player_hand());
    println!("{} ({}):", lang.dealer_cards, round.dealer_hand().value());
    print_hand(round.dealer_hand());

    if let Some(outcome) = round.outcome() {
        println!("{}", lang.outcome(outcome));
    }
    Ok(())
}

fn print_hand(hand: &Hand) {
    for card in hand.cards() {
        println!("  {card} ({})", card.code());
    }
}

fn read_line() -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

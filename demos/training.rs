//! Terminal training session: play rounds and compare each decision with the
//! policy table.
//!
//! Usage: `cargo run --example training -- [path/to/q_table.json]`
//! Set `RUST_LOG=debug` to see lookups and resets.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcoach::{
    Action, Advisor, Card, DEFAULT_POLICY_PATH, Feedback, Hand, Outcome, Round, RoundState, Suit,
};

#[derive(Default)]
struct Tally {
    correct: u32,
    wrong: u32,
}

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_POLICY_PATH.to_string());
    let advisor = Advisor::load(&path);
    if advisor.status().is_degraded() {
        println!("No usable policy table at {path}; advice will show as unknown.");
    } else {
        println!("Policy table: {} states.", advisor.table().len());
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(seed);
    let mut tally = Tally::default();

    println!("Blackjack training (type 'q' to quit)");

    loop {
        if round.player().is_natural() {
            print_table(&round, true);
            println!("Blackjack!");
        }

        while round.state() == RoundState::PlayerTurn
            && !round.player().is_busted()
            && !round.player().is_natural()
        {
            print_table(&round, false);

            let action = match prompt_line("[h]it or [s]tand: ").as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "q" | "quit" => {
                    print_tally(&tally);
                    return;
                }
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match advisor.review(round.player_state(), action) {
                Feedback::Correct(best) => {
                    tally.correct += 1;
                    println!("{}", colorize(&format!("Correct! Optimal is: {best}"), "32"));
                }
                Feedback::Wrong(best) => {
                    tally.wrong += 1;
                    println!("{}", colorize(&format!("Wrong! Optimal is: {best}"), "31"));
                }
                Feedback::NoEntry => println!("No table entry for this state."),
            }

            let result = match action {
                Action::Hit => round.player_hit().map(|card| {
                    println!("You draw {card}.");
                }),
                Action::Stand => round.stand(),
            };
            if let Err(err) = result {
                println!("Action error: {err}");
                break;
            }
        }

        if round.player().is_busted() {
            println!("You busted!");
        }

        if round.state() == RoundState::DealerTurn {
            match round.play_dealer() {
                Ok(drawn) if !drawn.is_empty() => {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
                Ok(_) => {}
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        match round.resolve() {
            Ok(result) => {
                print_table(&round, true);
                let message = match result.outcome {
                    Outcome::Blackjack => "Blackjack! You win.",
                    Outcome::Win if result.dealer_bust => "Dealer busted! You win.",
                    Outcome::Win => "You win!",
                    Outcome::Lose => "Dealer wins.",
                    Outcome::Push => "It's a tie!",
                };
                println!("{message}");
            }
            Err(err) => println!("Resolve error: {err}"),
        }

        print_tally(&tally);
        if matches!(prompt_line("Next round? (y/n): ").as_str(), "n" | "no" | "q") {
            return;
        }
        round.reset();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // End of input quits like an explicit 'q'.
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_tally(tally: &Tally) {
    let total = tally.correct + tally.wrong;
    if total > 0 {
        println!("Decisions matching the table: {}/{total}", tally.correct);
    }
}

fn print_table(round: &Round, reveal: bool) {
    let dealer = round.dealer();
    if reveal {
        println!(
            "\nDealer: {} (value {})",
            format_hand(dealer),
            dealer.value()
        );
    } else {
        let up = dealer.up_card().map_or_else(String::new, format_card);
        println!("\nDealer: {up} ?? (showing {})", dealer.up_card_value());
    }

    let player = round.player();
    let soft = if player.is_soft() { " soft" } else { "" };
    println!(
        "You:    {} (value {}{soft})\n",
        format_hand(player),
        player.value()
    );
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit() {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank() {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        rank => rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

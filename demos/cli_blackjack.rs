//! CLI blackjack example.
//!
//! Pass a seed as the first argument for a repeatable shoe. Set `RUST_LOG=debug`
//! to trace every transition.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::hand::HIDDEN;
use bjcore::{GameOptions, GameState, Hand, Phase};

/// Cards needed to deal a hand and leave room for a few hits.
const MIN_CARDS_FOR_HAND: usize = 10;

fn main() {
    env_logger::init();

    println!("Welcome To Black Jack (type 'q' to quit)");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let mut state = GameState::new(GameOptions::default(), seed).shuffle();

    loop {
        if state.needs_reshuffle() || state.cards_remaining() < MIN_CARDS_FOR_HAND {
            state = state.shuffle();
            println!("Shoe reshuffled.");
        }

        let dealt = state.deal().or_else(|err| {
            println!("Deal error: {err}, reshuffling.");
            state.shuffle().deal()
        });
        state = match dealt {
            Ok(next) => next,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        if state.has_natural() {
            println!();
            println!("Your Cards: {}", format_hand(state.player()));
            println!("Dealer's Cards: {}", format_hand(state.dealer()));
            println!("{}", colorize("***BLACKJACK***", "33"));
            state = state.end_hand().0;
            continue;
        }

        while state.phase() == Phase::PlayerTurn {
            print_table(&state);

            let action = prompt_line("What will you do? [h]it, [s]tand: ");
            let result = match action.as_str() {
                "h" | "hit" => state.hit(),
                "s" | "stand" => state.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Invalid Option: {action}");
                    continue;
                }
            };

            match result {
                Ok(next) => state = next,
                Err(err) => {
                    println!("Action error: {err}");
                    state = state.shuffle();
                }
            }
        }

        let played = state.dealer_play().or_else(|err| {
            println!("Dealer error: {err}, reshuffling.");
            state.shuffle().dealer_play()
        });
        state = match played {
            Ok(next) => next,
            Err(err) => {
                println!("Dealer error: {err}");
                return;
            }
        };

        let (next, report) = state.end_hand();
        state = next;
        println!();
        println!("{report}");
        println!();

        if prompt_line("Play another hand? (y/n): ") != "y" {
            println!("Goodbye.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!("\nShoe: {} cards remaining", state.cards_remaining());
    println!(
        "Your Cards: {} (score {})",
        format_hand(state.player()),
        state.player().score()
    );
    println!("Dealer's Cards: {}", format_dealer(state.dealer()));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &Hand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }
    dealer
        .render_hidden()
        .replace(HIDDEN, &colorize(HIDDEN, "90"))
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    colorize(&hand.render(), "34")
}

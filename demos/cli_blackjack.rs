//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{BetLedger, Card, Hand, HandOutcome, HandStatus, Rank, Suit, Table};

const PLAYER: &str = "player";

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut money: i64 = 500;
    let mut ledger = BetLedger::new();

    loop {
        if money <= 0 {
            println!("You are out of money. Game over.");
            break;
        }

        println!("\nBankroll: {money}");
        let Some(bet) = prompt_usize(&format!("Bet amount (1-{money}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if bet as i64 > money {
            println!("You cannot bet more than your bankroll.");
            continue;
        }

        if let Err(err) = ledger.place(PLAYER, bet) {
            println!("Bet error: {err}");
            continue;
        }

        // One table per round; a fresh deck is dealt each time.
        seed = seed.wrapping_add(1);
        let mut table = Table::new(seed);
        if let Err(err) = table.create_new_hand(Some(bet), Some(PLAYER.to_string())) {
            println!("Deal error: {err}");
            continue;
        }

        play_hands(&mut table);

        let settlement = match table.finalize() {
            Ok(settlement) => settlement,
            Err(err) => {
                println!("Settlement error: {err}");
                continue;
            }
        };

        println!(
            "Dealer: {} ({}{})",
            format_hand(table.dealer_hand()),
            settlement.dealer_value,
            if settlement.dealer_bust { ", bust" } else { "" }
        );

        let mut net: i64 = 0;
        for (i, hand) in table.player_hands().iter().enumerate() {
            let stake = hand.bet().unwrap_or(0) as i64;
            let outcome = settlement.outcome_of(i);
            let text = match outcome {
                Some(HandOutcome::Win) => {
                    net += stake;
                    "wins"
                }
                Some(HandOutcome::Lose) => {
                    net -= stake;
                    "loses"
                }
                Some(HandOutcome::Tie) => "pushes",
                None => "was not settled",
            };
            println!(
                "Hand {}: {} ({}) {text}",
                i + 1,
                format_hand(hand),
                hand.value()
            );
        }

        money += net;
        ledger.remove(PLAYER);
    }
}

fn play_hands(table: &mut Table) {
    loop {
        let Some(index) = table
            .player_hands()
            .iter()
            .position(|hand| hand.status() == HandStatus::Active)
        else {
            return;
        };

        let hand = &table.player_hands()[index];
        println!(
            "\nDealer shows: {}",
            table
                .dealer_hand()
                .cards()
                .first()
                .map_or_else(|| "(no cards)".to_string(), format_card)
        );
        println!(
            "Hand {}: {} ({})",
            index + 1,
            format_hand(hand),
            hand.value()
        );

        let mut choices = vec!["(h)it", "(s)tand"];
        if hand.can_double_down() && hand.bet().is_some() {
            choices.push("(d)ouble");
        }
        if hand.can_split() && hand.bet().is_some() {
            choices.push("s(p)lit");
        }

        let action = prompt_line(&format!("Action [{}]: ", choices.join(" ")));
        let result = match action.as_str() {
            "h" | "hit" => table.hit(index),
            "s" | "stand" => table.stand(index, false),
            "d" | "double" => table.double_down(index),
            "p" | "split" => table.split(index),
            "q" | "quit" => {
                table.stand_all();
                return;
            }
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(()) => {
                let hand = &table.player_hands()[index];
                match hand.status() {
                    HandStatus::Bust => println!("Bust at {}.", hand.value()),
                    HandStatus::Blackjack => println!("Twenty-one!"),
                    _ => {}
                }
            }
            Err(err) => println!("Action error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".to_string();
    }
    line.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        Rank::Ace => ("A".to_string(), true),
        Rank::Jack => ("J".to_string(), true),
        Rank::Queen => ("Q".to_string(), true),
        Rank::King => ("K".to_string(), true),
        other => (other.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, color_code: &str) -> String {
    format!("\x1b[{color_code}m{text}\x1b[0m")
}

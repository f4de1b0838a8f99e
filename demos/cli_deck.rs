//! CLI deck example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Deck, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("Deck CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::new();

    let times = prompt_count("Shuffle how many times? (0 or invalid input to skip): ");
    if times > 0 {
        deck.shuffle(times, &mut rng);
        println!("Deck shuffled {times} time(s).");
    } else {
        println!("Leaving the deck in canonical order.");
    }

    let count = prompt_count("How many cards to draw? (0 or invalid input to skip): ");
    if count > 0 {
        let drawn = deck.draw(count);
        println!("Drew {} card(s):", drawn.len());
        print_cards(&drawn);
    }

    println!("{} cards remaining. Dealing them all:", deck.len());
    print_cards(&deck.take_all());

    deck.reset();
    println!("Deck reset to {} cards.", deck.len());

    if prompt_yes_no("Sort the deck before dealing again? (y/n): ") {
        deck.sort();
        println!("Deck sorted by rank, then suit.");
    }

    print_cards(&deck.take_all());
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

/// Malformed or non-positive input means "do nothing", not an error.
fn prompt_count(prompt: &str) -> usize {
    match prompt_line(prompt).parse::<i64>() {
        Ok(value) if value > 0 => value as usize,
        _ => 0,
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    matches!(prompt_line(prompt).as_str(), "y" | "yes")
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        println!("{} - {}", format_card(card), card.name());
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

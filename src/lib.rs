//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type built in canonical order that supports
//! shuffling, drawing, sorting, and resetting, plus the [`Card`] value type
//! with short-form (`"AS"`) and long-form (`"Ace of Spades"`) renderings.
//!
//! # Example
//!
//! ```
//! use deckrs::Deck;
//!
//! let mut deck = Deck::shuffled_with_seed(42);
//! let hand = deck.draw(5);
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.len(), 47);
//!
//! deck.reset();
//! assert_eq!(deck.len(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::ParseCardError;

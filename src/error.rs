//! Error types for card parsing.
//!
//! Deck operations themselves never fail: out-of-range counts are clamped
//! and drawing from an empty deck yields `None`. Parsing a card's short form
//! is the only fallible surface.

use thiserror::Error;

/// Errors that can occur when parsing a card's two-character short form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is not exactly two characters.
    #[error("card short form must be exactly two characters")]
    InvalidLength,
    /// First character is not a rank.
    #[error("invalid rank character: {0:?}")]
    InvalidRank(char),
    /// Second character is not a suit.
    #[error("invalid suit character: {0:?}")]
    InvalidSuit(char),
}

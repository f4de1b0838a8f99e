//! The deck container and its operations.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A standard 52-card deck.
///
/// The deck is a stack: the top card is the next one drawn. A fresh or
/// [reset](Deck::reset) deck holds all 52 rank/suit combinations in canonical
/// order (suits ascending, ranks ascending within each suit, bottom to top),
/// so the first card drawn from a fresh deck is the Ace of Spades.
///
/// No operation fails: out-of-range counts are clamped and drawing from an
/// empty deck yields `None`.
///
/// ```
/// use deckrs::Deck;
///
/// let mut deck = Deck::new();
/// let hand = deck.draw(5);
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.len(), 47);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, bottom to top.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Self::canonical(),
        }
    }

    /// Creates a full deck shuffled once with a ChaCha8 generator seeded from
    /// `seed`. The same seed always produces the same order.
    #[must_use]
    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut deck = Self::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.shuffle(1, &mut rng);
        deck
    }

    /// The canonical order shared by construction and [`Deck::reset`].
    fn canonical() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom to top.
    ///
    /// The last element is the next card drawn.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn next_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes up to `count` cards from the top, in removal order.
    ///
    /// Drawing more cards than remain returns all remaining cards and leaves
    /// the deck empty; `draw(0)` returns an empty vector and changes nothing.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        let mut drawn = Vec::with_capacity(take);
        for _ in 0..take {
            if let Some(card) = self.cards.pop() {
                drawn.push(card);
            }
        }
        drawn
    }

    /// Removes every remaining card, in removal order.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.draw(self.cards.len())
    }

    /// Discards the current contents and refills the deck with the 52
    /// canonical cards in canonical order, regardless of prior state.
    pub fn reset(&mut self) {
        self.cards = Self::canonical();
    }

    /// Sorts the remaining cards ascending by rank, ties broken by suit.
    ///
    /// The ascending order runs bottom to top, so the highest card ends up on
    /// top: drawing after a sort yields descending order, and the reversed
    /// [`Deck::take_all`] result is the ascending order.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Sorts the remaining cards in place with the given comparator.
    ///
    /// Card count and identity are preserved; only the order changes. The
    /// stack convention is the same as [`Deck::sort`]: the comparator's
    /// greatest card ends up on top.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        self.cards.sort_by(compare);
    }

    /// Shuffles the remaining cards `times` independent times.
    ///
    /// Each pass is a full Fisher–Yates shuffle of the already-shuffled
    /// order. `shuffle(0, ..)` leaves the deck untouched. No pass adds,
    /// removes, or duplicates a card.
    pub fn shuffle<R>(&mut self, times: usize, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for _ in 0..times {
            self.cards.shuffle(rng);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

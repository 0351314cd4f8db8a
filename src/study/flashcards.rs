use super::fixtures::{Flashcard, FLASHCARDS};
use crate::util::random_index;

/// Position, flip state and known set over the sample cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Deck {
    len: usize,
    current: usize,
    flipped: bool,
    known: Vec<usize>,
}

impl Deck {
    pub fn new() -> Self {
        Self::with_len(FLASHCARDS.len())
    }

    fn with_len(len: usize) -> Self {
        Self {
            len,
            current: 0,
            flipped: false,
            known: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn card(&self) -> Option<&'static Flashcard> {
        FLASHCARDS.get(self.current)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_known(&self, index: usize) -> bool {
        self.known.contains(&index)
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.flipped = false;
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.flipped = false;
        self.current = (self.current + self.len - 1) % self.len;
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn mark_known(&mut self) {
        if self.len == 0 {
            return;
        }
        if !self.is_known(self.current) {
            self.known.push(self.current);
        }
        self.next();
    }

    pub fn restart(&mut self) {
        *self = Self::with_len(self.len);
    }

    pub fn shuffle(&mut self) {
        self.current = random_index(self.len);
        self.flipped = false;
    }

    pub fn progress_percent(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        self.known.len() as f64 / self.len as f64 * 100.0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_nexts_wrap_to_start() {
        let mut deck = Deck::new();
        assert_eq!(deck.len(), 5);
        for _ in 0..5 {
            deck.next();
        }
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut deck = Deck::new();
        deck.previous();
        assert_eq!(deck.current(), 4);
        assert_eq!(deck.card().map(|c| c.front), Some("What is overfitting?"));
    }

    #[test]
    fn test_shuffle_stays_in_range() {
        let mut deck = Deck::new();
        for _ in 0..100 {
            deck.flip();
            deck.shuffle();
            assert!(deck.current() < 5);
            assert!(!deck.is_flipped());
        }
    }

    #[test]
    fn test_mark_known_dedupes_and_advances() {
        let mut deck = Deck::new();
        deck.mark_known();
        assert_eq!(deck.current(), 1);
        deck.previous();
        deck.mark_known();
        assert_eq!(deck.known_count(), 1);
        assert!(deck.is_known(0));
        assert_eq!(deck.progress_percent(), 20.0);
    }

    #[test]
    fn test_navigation_unflips_and_restart_clears() {
        let mut deck = Deck::new();
        deck.flip();
        assert!(deck.is_flipped());
        deck.next();
        assert!(!deck.is_flipped());

        deck.mark_known();
        deck.flip();
        deck.restart();
        assert_eq!(deck, Deck::new());
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let mut deck = Deck::with_len(0);
        deck.next();
        deck.previous();
        deck.mark_known();
        deck.shuffle();
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.progress_percent(), 0.0);
    }
}

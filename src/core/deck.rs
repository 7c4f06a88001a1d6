use rand::{
    rngs::StdRng,
    seq::SliceRandom,
    Rng,
};

use super::VocabularyEntry;

/// The shuffled working deck and the pointer to the card being studied.
pub struct DeckSession<R: Rng = StdRng> {
    deck: Vec<VocabularyEntry>,
    position: usize,
    rng: R,
}

impl<R: Rng> DeckSession<R> {
    pub fn new(rng: R) -> Self {
        Self { deck: Vec::new(), position: 0, rng }
    }

    /// Replaces the deck with a fresh uniform permutation of `entries`.
    pub fn replace_deck(&mut self, entries: Vec<VocabularyEntry>) {
        self.deck = entries;
        self.shuffle();
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn next(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.deck.len();
    }

    pub fn previous(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.position = if self.position == 0 { self.deck.len() - 1 } else { self.position - 1 };
    }

    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.deck.get(self.position)
    }

    /// Index of the current card, `None` when the deck is empty.
    pub fn position(&self) -> Option<usize> {
        if self.deck.is_empty() {
            None
        } else {
            Some(self.position)
        }
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.deck
    }

    pub fn counter(&self) -> String {
        match self.position() {
            Some(position) => format!("{} / {}", position + 1, self.deck.len()),
            None => "0 / 0".to_string(),
        }
    }
}

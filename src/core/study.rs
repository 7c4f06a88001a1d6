use rand::{
    rngs::StdRng,
    Rng,
    SeedableRng,
};
use tracing::{
    debug,
    info,
};

use super::{
    CardSide,
    DeckSession,
    DisplayConfig,
    Face,
    GrammaticalType,
    TypeFilter,
    VocabularyEntry,
    VocabularyStore,
};

/// Identity of the card on screen; changes whenever the current card may have.
pub type CardRevision = u64;

/// Everything one study sitting owns: the word list, filter, deck and display setup.
pub struct StudySession<R: Rng = StdRng> {
    store: VocabularyStore,
    filter: TypeFilter,
    display: DisplayConfig,
    deck: DeckSession<R>,
    revision: CardRevision,
}

impl StudySession<StdRng> {
    /// Seeded sessions shuffle reproducibly; unseeded ones use OS entropy.
    pub fn with_seed(
        store: VocabularyStore,
        filter: TypeFilter,
        display: DisplayConfig,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(store, filter, display, rng)
    }
}

impl<R: Rng> StudySession<R> {
    pub fn new(store: VocabularyStore, filter: TypeFilter, display: DisplayConfig, rng: R) -> Self {
        let mut session = Self { store, filter, display, deck: DeckSession::new(rng), revision: 0 };
        session.rebuild_deck();
        session
    }

    fn rebuild_deck(&mut self) {
        let entries = self.filter.apply(&self.store);
        info!(
            cards = entries.len(),
            types = ?self.filter.selected(),
            "Deck rebuilt from {}",
            self.store.name()
        );
        self.deck.replace_deck(entries);
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn revision(&self) -> CardRevision {
        self.revision
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    pub fn filter(&self) -> &TypeFilter {
        &self.filter
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn deck(&self) -> &DeckSession<R> {
        &self.deck
    }

    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.deck.current()
    }

    /// Swaps in a new word list, keeping the filter and display setup.
    pub fn replace_store(&mut self, store: VocabularyStore) {
        self.store = store;
        self.rebuild_deck();
    }

    pub fn toggle_type(&mut self, grammatical_type: GrammaticalType, included: bool) {
        if self.filter.toggle(grammatical_type, included) {
            self.rebuild_deck();
        }
    }

    pub fn set_all_types(&mut self, included: bool) {
        if self.filter.set_all(included) {
            self.rebuild_deck();
        }
    }

    /// Returns `false` when refused (it would leave the face empty) or unchanged.
    pub fn set_face_field(&mut self, face: Face, side: CardSide, included: bool) -> bool {
        let changed = self.display.set_field(face, side, included);
        if !changed && !included {
            debug!(?face, ?side, "Refused to leave card face empty");
        }
        changed
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle();
        debug!(cards = self.deck.len(), "Deck shuffled");
        self.bump();
    }

    pub fn next(&mut self) {
        if !self.deck.is_empty() {
            self.deck.next();
            self.bump();
        }
    }

    pub fn previous(&mut self) {
        if !self.deck.is_empty() {
            self.deck.previous();
            self.bump();
        }
    }
}

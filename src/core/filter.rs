use std::collections::BTreeSet;

use super::{
    GrammaticalType,
    VocabularyEntry,
    VocabularyStore,
};

/// Which grammatical types make it into the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFilter {
    selected: BTreeSet<GrammaticalType>,
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeFilter {
    pub fn new() -> Self {
        Self { selected: GrammaticalType::ALL.into_iter().collect() }
    }

    pub fn from_selection(selected: impl IntoIterator<Item = GrammaticalType>) -> Self {
        Self { selected: selected.into_iter().collect() }
    }

    /// Returns `true` when the selection changed.
    pub fn toggle(&mut self, grammatical_type: GrammaticalType, included: bool) -> bool {
        if included {
            self.selected.insert(grammatical_type)
        } else {
            self.selected.remove(&grammatical_type)
        }
    }

    /// Returns `true` when the selection changed.
    pub fn set_all(&mut self, included: bool) -> bool {
        let target: BTreeSet<GrammaticalType> =
            if included { GrammaticalType::ALL.into_iter().collect() } else { BTreeSet::new() };

        if self.selected == target {
            return false;
        }
        self.selected = target;
        true
    }

    pub fn is_enabled(&self, grammatical_type: GrammaticalType) -> bool {
        self.selected.contains(&grammatical_type)
    }

    pub fn all_selected(&self) -> bool {
        GrammaticalType::ALL.iter().all(|t| self.selected.contains(t))
    }

    pub fn selected(&self) -> &BTreeSet<GrammaticalType> {
        &self.selected
    }

    pub fn apply(&self, store: &VocabularyStore) -> Vec<VocabularyEntry> {
        store
            .entries()
            .iter()
            .filter(|entry| self.is_enabled(entry.grammatical_type()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nouns_and_verbs() -> VocabularyStore {
        let mut entries = Vec::new();
        for (kanji, reading) in [("猫", "ねこ"), ("犬", "いぬ"), ("水", "みず")] {
            entries.push(VocabularyEntry::new(Some(kanji), reading, "noun", None, GrammaticalType::Noun));
        }
        for (kanji, reading) in
            [("食べる", "たべる"), ("飲む", "のむ"), ("見る", "みる"), ("行く", "いく"), ("来る", "くる")]
        {
            entries.push(VocabularyEntry::new(Some(kanji), reading, "verb", None, GrammaticalType::Verb));
        }
        VocabularyStore::new("test", entries)
    }

    #[test]
    fn test_default_selects_everything() {
        let filter = TypeFilter::new();
        assert!(filter.all_selected());
        assert_eq!(filter.apply(&nouns_and_verbs()).len(), 8);
    }

    #[test]
    fn test_noun_only_selection() {
        let mut filter = TypeFilter::new();
        filter.set_all(false);
        filter.toggle(GrammaticalType::Noun, true);

        let subset = filter.apply(&nouns_and_verbs());
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|e| e.grammatical_type() == GrammaticalType::Noun));
        assert!(!filter.all_selected());
    }

    #[test]
    fn test_empty_selection_is_allowed() {
        let mut filter = TypeFilter::new();
        assert!(filter.set_all(false));
        assert!(filter.apply(&nouns_and_verbs()).is_empty());
    }

    #[test]
    fn test_reapplying_same_value_reports_no_change() {
        let mut filter = TypeFilter::new();
        assert!(!filter.toggle(GrammaticalType::Verb, true));
        assert!(!filter.set_all(true));
        assert!(filter.toggle(GrammaticalType::Verb, false));
        assert!(!filter.toggle(GrammaticalType::Verb, false));
    }
}

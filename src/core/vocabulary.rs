use std::{
    fs,
    path::Path,
};

use tracing::{
    info,
    warn,
};
use wana_kana::IsJapaneseStr;

use super::{
    GrammaticalType,
    TangoError,
    VocabularyEntry,
};

const BUNDLED_VOCABULARY: &str = include_str!("../../assets/vocabulary.json");

/// The read-only word list every deck is drawn from.
#[derive(Debug, Clone)]
pub struct VocabularyStore {
    name: String,
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    pub fn new(name: impl Into<String>, entries: Vec<VocabularyEntry>) -> Self {
        Self { name: name.into(), entries }
    }

    pub fn bundled() -> Result<Self, TangoError> {
        Self::from_json("bundled vocabulary", BUNDLED_VOCABULARY)
    }

    pub fn load(path: &Path) -> Result<Self, TangoError> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("Unknown File")
            .to_string();

        let json = fs::read_to_string(path).map_err(|e| {
            TangoError::FailedToLoadFile(format!("{}: {}", path.display(), e))
        })?;

        Self::from_json(name, &json)
    }

    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, TangoError> {
        let name = name.into();
        let entries: Vec<VocabularyEntry> = serde_json::from_str(json)?;

        if entries.is_empty() {
            return Err(TangoError::EmptyVocabulary(name));
        }

        for entry in entries.iter().filter(|entry| !entry.reading().is_kana()) {
            warn!(reading = entry.reading(), "Vocabulary reading is not kana");
        }

        info!(source = %name, count = entries.len(), "Vocabulary loaded");
        Ok(Self { name, entries })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, grammatical_type: GrammaticalType) -> usize {
        self.entries.iter().filter(|e| e.grammatical_type() == grammatical_type).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_vocabulary_covers_every_type() {
        let store = VocabularyStore::bundled().unwrap();

        assert!(!store.is_empty());
        for grammatical_type in GrammaticalType::ALL {
            assert!(store.count_of(grammatical_type) > 0, "no {} entries", grammatical_type);
        }
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let result = VocabularyStore::from_json("empty.json", "[]");
        assert!(matches!(result, Err(TangoError::EmptyVocabulary(name)) if name == "empty.json"));
    }

    #[test]
    fn test_malformed_vocabulary_is_a_json_error() {
        let result = VocabularyStore::from_json("broken.json", r#"[{ "reading": "ねこ" }]"#);
        assert!(matches!(result, Err(TangoError::Json(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = VocabularyStore::load(Path::new("does/not/exist.json"));
        match result {
            Err(TangoError::FailedToLoadFile(message)) => assert!(message.contains("exist.json")),
            other => panic!("Expected FailedToLoadFile, got {:?}", other),
        }
    }
}

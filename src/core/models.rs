use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GrammaticalType {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl GrammaticalType {
    /// Order used by the control panel checkboxes.
    pub const ALL: [GrammaticalType; 4] = [
        GrammaticalType::Adjective,
        GrammaticalType::Adverb,
        GrammaticalType::Noun,
        GrammaticalType::Verb,
    ];
}

impl fmt::Display for GrammaticalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            GrammaticalType::Noun => "Noun",
            GrammaticalType::Verb => "Verb",
            GrammaticalType::Adjective => "Adjective",
            GrammaticalType::Adverb => "Adverb",
        };
        write!(f, "{}", readable)
    }
}

/// A field that can be shown on a card face.
///
/// The declaration order is the canonical display order, so sorted
/// collections of `CardSide` always come out as reading, kanji, translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardSide {
    Reading,
    KanjiForm,
    Translation,
}

impl CardSide {
    pub const ALL: [CardSide; 3] = [CardSide::KanjiForm, CardSide::Reading, CardSide::Translation];

    pub fn label(&self) -> &'static str {
        match self {
            CardSide::KanjiForm => "Kanji",
            CardSide::Reading => "Hiragana",
            CardSide::Translation => "English",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(rename = "kanji", default, skip_serializing_if = "Option::is_none")]
    kanji_form: Option<String>,
    reading: String,
    translation: String,
    #[serde(rename = "kanji_meanings", default, skip_serializing_if = "Option::is_none")]
    kanji_gloss: Option<String>,
    #[serde(rename = "type")]
    grammatical_type: GrammaticalType,
}

impl VocabularyEntry {
    pub fn new(
        kanji_form: Option<&str>,
        reading: &str,
        translation: &str,
        kanji_gloss: Option<&str>,
        grammatical_type: GrammaticalType,
    ) -> Self {
        Self {
            kanji_form: kanji_form.map(str::to_string),
            reading: reading.to_string(),
            translation: translation.to_string(),
            kanji_gloss: kanji_gloss.map(str::to_string),
            grammatical_type,
        }
    }

    /// Kanji spelling, `None` when missing or blank.
    pub fn kanji_form(&self) -> Option<&str> {
        self.kanji_form.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// What goes in the kanji slot: the kanji spelling, or the reading for kana-only words.
    pub fn display_kanji(&self) -> &str {
        self.kanji_form().unwrap_or(&self.reading)
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn kanji_gloss(&self) -> Option<&str> {
        self.kanji_gloss.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn grammatical_type(&self) -> GrammaticalType {
        self.grammatical_type
    }

    pub fn field(&self, side: CardSide) -> &str {
        match side {
            CardSide::KanjiForm => self.display_kanji(),
            CardSide::Reading => self.reading(),
            CardSide::Translation => self.translation(),
        }
    }
}

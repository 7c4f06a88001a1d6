use super::{
    CardSide,
    DisplayConfig,
    Face,
    VocabularyEntry,
};

pub const EMPTY_DECK_MESSAGE: &str = "No cards in the deck.";
pub const EMPTY_DECK_HINT: &str = "Please select at least one word type.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceLine<'a> {
    pub side: CardSide,
    pub text: &'a str,
}

/// Everything drawn on one face of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceContent<'a> {
    pub lines: Vec<FaceLine<'a>>,
    pub caption: Option<&'a str>,
}

pub fn face_content<'a>(
    entry: &'a VocabularyEntry,
    display: &DisplayConfig,
    face: Face,
) -> FaceContent<'a> {
    let mut lines: Vec<FaceLine<'a>> = Vec::new();

    for side in display.ordered(face) {
        let text = entry.field(side);
        // A kana-only word fills the kanji slot with its reading; show it once.
        if lines.last().is_some_and(|previous| previous.text == text) {
            continue;
        }
        lines.push(FaceLine { side, text });
    }

    let caption = match face {
        Face::Back => entry.kanji_gloss(),
        Face::Front => None,
    };

    FaceContent { lines, caption }
}

pub mod card;
pub mod deck;
pub mod display;
pub mod errors;
pub mod filter;
pub mod gesture;
pub mod models;
pub mod study;
pub mod vocabulary;


pub use deck::DeckSession;
pub use display::{
    DisplayConfig,
    Face,
};
pub use errors::TangoError;
pub use filter::TypeFilter;
pub use gesture::{
    CardGesture,
    Direction,
};
pub use models::{
    CardSide,
    GrammaticalType,
    VocabularyEntry,
};
pub use study::{
    CardRevision,
    StudySession,
};
pub use vocabulary::VocabularyStore;

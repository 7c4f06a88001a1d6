use std::{
    collections::BTreeSet,
    path::PathBuf,
};

use crate::core::{
    CardSide,
    DisplayConfig,
    Face,
    GrammaticalType,
    TypeFilter,
};

pub const SETTINGS_FILE: &str = "settings.json";

/// User preferences kept between launches. Study progress is never stored here.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub front: BTreeSet<CardSide>,
    pub back: BTreeSet<CardSide>,
    pub selected_types: BTreeSet<GrammaticalType>,
    pub dark_mode: bool,
    pub font_path: Option<PathBuf>,
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for Preferences {
    fn default() -> Self {
        let display = DisplayConfig::default();
        Self {
            front: display.face(Face::Front).clone(),
            back: display.face(Face::Back).clone(),
            selected_types: TypeFilter::new().selected().clone(),
            dark_mode: true,
            font_path: None,
            vocabulary_path: None,
        }
    }
}

impl Preferences {
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig::from_faces(self.front.iter().copied(), self.back.iter().copied())
    }

    pub fn type_filter(&self) -> TypeFilter {
        TypeFilter::from_selection(self.selected_types.iter().copied())
    }

    /// Copies the session's live filter and display setup back into the preferences.
    pub fn capture(&mut self, filter: &TypeFilter, display: &DisplayConfig) {
        self.selected_types = filter.selected().clone();
        self.front = display.face(Face::Front).clone();
        self.back = display.face(Face::Back).clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{ "dark_mode": false }"#).unwrap();

        assert!(!prefs.dark_mode);
        assert_eq!(prefs.display_config(), DisplayConfig::default());
        assert!(prefs.type_filter().all_selected());
    }

    #[test]
    fn test_empty_face_in_file_is_repaired() {
        let prefs: Preferences =
            serde_json::from_str(r#"{ "front": [], "back": ["Translation"] }"#).unwrap();
        let display = prefs.display_config();

        assert_eq!(display.ordered(Face::Front), vec![CardSide::KanjiForm]);
        assert_eq!(display.ordered(Face::Back), vec![CardSide::Translation]);
    }

    #[test]
    fn test_capture_round_trips_through_config() {
        let mut filter = TypeFilter::new();
        filter.toggle(GrammaticalType::Adverb, false);
        let mut display = DisplayConfig::default();
        display.set_field(Face::Back, CardSide::KanjiForm, true);

        let mut prefs = Preferences::default();
        prefs.capture(&filter, &display);

        assert_eq!(prefs.type_filter(), filter);
        assert_eq!(prefs.display_config(), display);
    }
}

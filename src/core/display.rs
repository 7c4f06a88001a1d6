use std::collections::BTreeSet;

use super::CardSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    pub fn label(&self) -> &'static str {
        match self {
            Face::Front => "Front Side",
            Face::Back => "Back Side",
        }
    }
}

/// Which fields appear on each face. Neither face is ever empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    front: BTreeSet<CardSide>,
    back: BTreeSet<CardSide>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            front: BTreeSet::from([CardSide::KanjiForm]),
            back: BTreeSet::from([CardSide::Reading, CardSide::Translation]),
        }
    }
}

impl DisplayConfig {
    /// Builds a config from saved selections, keeping defaults for any empty face.
    pub fn from_faces(
        front: impl IntoIterator<Item = CardSide>,
        back: impl IntoIterator<Item = CardSide>,
    ) -> Self {
        let mut config = Self::default();
        config.set_face(Face::Front, front.into_iter().collect());
        config.set_face(Face::Back, back.into_iter().collect());
        config
    }

    pub fn face(&self, face: Face) -> &BTreeSet<CardSide> {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }

    /// Replaces a face's fields. An empty selection is refused and `false` returned.
    pub fn set_face(&mut self, face: Face, selection: BTreeSet<CardSide>) -> bool {
        if selection.is_empty() {
            return false;
        }
        let target = match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
        };
        if *target == selection {
            return false;
        }
        *target = selection;
        true
    }

    pub fn set_field(&mut self, face: Face, side: CardSide, included: bool) -> bool {
        let mut selection = self.face(face).clone();
        if included {
            selection.insert(side);
        } else {
            selection.remove(&side);
        }
        self.set_face(face, selection)
    }

    pub fn shows(&self, face: Face, side: CardSide) -> bool {
        self.face(face).contains(&side)
    }

    /// True when `side` is the only field left on `face`.
    pub fn is_last_field(&self, face: Face, side: CardSide) -> bool {
        let fields = self.face(face);
        fields.len() == 1 && fields.contains(&side)
    }

    pub fn ordered(&self, face: Face) -> Vec<CardSide> {
        canonical_order(self.face(face))
    }
}

pub fn canonical_order<'a>(fields: impl IntoIterator<Item = &'a CardSide>) -> Vec<CardSide> {
    let mut ordered: Vec<CardSide> = fields.into_iter().copied().collect();
    ordered.sort();
    ordered.dedup();
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deselecting_last_field_is_refused() {
        let mut config = DisplayConfig::default();
        let before = config.clone();

        assert!(!config.set_field(Face::Front, CardSide::KanjiForm, false));
        assert_eq!(config, before);
        assert!(!config.set_face(Face::Back, BTreeSet::new()));
        assert_eq!(config, before);
    }

    #[test]
    fn test_fields_can_be_swapped_through_a_second_selection() {
        let mut config = DisplayConfig::default();
        assert!(config.set_field(Face::Front, CardSide::Translation, true));
        assert!(config.set_field(Face::Front, CardSide::KanjiForm, false));
        assert_eq!(config.ordered(Face::Front), vec![CardSide::Translation]);
        assert!(config.is_last_field(Face::Front, CardSide::Translation));
    }

    #[test]
    fn test_order_ignores_insertion_history() {
        let mut config = DisplayConfig::default();
        config.set_field(Face::Front, CardSide::Translation, true);
        config.set_field(Face::Front, CardSide::Reading, true);

        assert_eq!(
            config.ordered(Face::Front),
            vec![CardSide::Reading, CardSide::KanjiForm, CardSide::Translation]
        );
        assert_eq!(
            canonical_order(&[CardSide::Translation, CardSide::Reading, CardSide::Translation]),
            vec![CardSide::Reading, CardSide::Translation]
        );
    }

    #[test]
    fn test_from_faces_falls_back_for_empty_selection() {
        let config = DisplayConfig::from_faces([], [CardSide::Translation]);
        assert_eq!(config.ordered(Face::Front), vec![CardSide::KanjiForm]);
        assert_eq!(config.ordered(Face::Back), vec![CardSide::Translation]);
    }
}

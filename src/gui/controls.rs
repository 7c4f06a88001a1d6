use eframe::egui::{
    self,
    Id,
    Ui,
};
use rand::Rng;

use super::theme::Theme;
use crate::core::{
    CardSide,
    DisplayConfig,
    Face,
    GrammaticalType,
    StudySession,
    TypeFilter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    ToggleType(GrammaticalType, bool),
    SetAllTypes(bool),
    SetFaceField(Face, CardSide, bool),
}

impl ControlAction {
    /// Applies the action. Returns `true` when preferences changed and should be saved.
    pub fn apply<R: Rng>(self, session: &mut StudySession<R>) -> bool {
        match self {
            ControlAction::ToggleType(grammatical_type, included) => {
                let before = session.revision();
                session.toggle_type(grammatical_type, included);
                before != session.revision()
            }
            ControlAction::SetAllTypes(included) => {
                let before = session.revision();
                session.set_all_types(included);
                before != session.revision()
            }
            ControlAction::SetFaceField(face, side, included) => {
                session.set_face_field(face, side, included)
            }
        }
    }
}

#[derive(Default)]
pub struct ControlsOutput {
    pub actions: Vec<ControlAction>,
    /// Keyboard-focusable widgets in tab order.
    pub focusable: Vec<Id>,
}

pub struct ControlPanel;

impl ControlPanel {
    pub fn show(
        ui: &mut Ui,
        theme: &Theme,
        filter: &TypeFilter,
        display: &DisplayConfig,
        counts: impl Fn(GrammaticalType) -> usize,
    ) -> ControlsOutput {
        let mut output = ControlsOutput::default();

        egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(12)).show(ui, |ui| {
            ui.set_width(ui.available_width());

            Self::ui_word_types(ui, theme, filter, &counts, &mut output);
            ui.add_space(16.0);
            Self::ui_card_display(ui, theme, display, &mut output);
        });

        output
    }

    fn ui_word_types(
        ui: &mut Ui,
        theme: &Theme,
        filter: &TypeFilter,
        counts: &impl Fn(GrammaticalType) -> usize,
        output: &mut ControlsOutput,
    ) {
        ui.label(theme.heading(ui.ctx(), "Word Types").size(18.0));
        ui.separator();

        let mut all = filter.all_selected();
        let response = ui.checkbox(&mut all, egui::RichText::new("All Types").strong());
        if response.changed() {
            output.actions.push(ControlAction::SetAllTypes(all));
        }
        output.focusable.push(response.id);

        ui.indent("word_type_checkboxes", |ui| {
            for grammatical_type in GrammaticalType::ALL {
                let mut enabled = filter.is_enabled(grammatical_type);
                let label = format!("{} ({})", grammatical_type, counts(grammatical_type));
                let response = ui.checkbox(&mut enabled, label);
                if response.changed() {
                    output.actions.push(ControlAction::ToggleType(grammatical_type, enabled));
                }
                output.focusable.push(response.id);
            }
        });
    }

    fn ui_card_display(
        ui: &mut Ui,
        theme: &Theme,
        display: &DisplayConfig,
        output: &mut ControlsOutput,
    ) {
        ui.label(theme.heading(ui.ctx(), "Card Display").size(18.0));
        ui.separator();

        for face in [Face::Front, Face::Back] {
            ui.label(egui::RichText::new(face.label()).color(theme.muted(ui.ctx())));
            ui.horizontal_wrapped(|ui| {
                for side in CardSide::ALL {
                    let mut shown = display.shows(face, side);
                    let mut response = ui.checkbox(&mut shown, side.label());
                    if display.is_last_field(face, side) {
                        response = response.on_hover_text("A card face needs at least one field");
                    }
                    if response.changed() {
                        output.actions.push(ControlAction::SetFaceField(face, side, shown));
                    }
                    output.focusable.push(response.id);
                }
            });
            ui.add_space(8.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::{
        VocabularyEntry,
        VocabularyStore,
    };

    fn session() -> StudySession<StdRng> {
        let entries = vec![
            VocabularyEntry::new(Some("猫"), "ねこ", "cat", None, GrammaticalType::Noun),
            VocabularyEntry::new(Some("速い"), "はやい", "fast", None, GrammaticalType::Adjective),
        ];
        StudySession::with_seed(
            VocabularyStore::new("test", entries),
            TypeFilter::new(),
            DisplayConfig::default(),
            Some(1),
        )
    }

    #[test]
    fn test_type_actions_report_changes() {
        let mut session = session();

        assert!(ControlAction::ToggleType(GrammaticalType::Noun, false).apply(&mut session));
        assert_eq!(session.deck().len(), 1);
        assert!(!ControlAction::ToggleType(GrammaticalType::Noun, false).apply(&mut session));

        assert!(ControlAction::SetAllTypes(false).apply(&mut session));
        assert!(session.deck().is_empty());
        assert!(ControlAction::SetAllTypes(true).apply(&mut session));
        assert_eq!(session.deck().len(), 2);
    }

    #[test]
    fn test_last_face_field_cannot_be_cleared() {
        let mut session = session();

        let refused = ControlAction::SetFaceField(Face::Front, CardSide::KanjiForm, false);
        assert!(!refused.apply(&mut session));
        assert!(session.display().shows(Face::Front, CardSide::KanjiForm));

        assert!(ControlAction::SetFaceField(Face::Back, CardSide::Reading, false).apply(&mut session));
        assert_eq!(session.display().ordered(Face::Back), vec![CardSide::Translation]);
    }
}

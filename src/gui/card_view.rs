use std::{
    f32::consts::PI,
    time::Instant,
};

use eframe::egui::{
    self,
    Align2,
    Color32,
    CornerRadius,
    FontId,
    Key,
    Pos2,
    Rect,
    Sense,
    Stroke,
    StrokeKind,
    Ui,
    Vec2,
};
use rand::Rng;

use super::theme::Theme;
use crate::core::{
    card::{
        face_content,
        FaceContent,
        EMPTY_DECK_HINT,
        EMPTY_DECK_MESSAGE,
    },
    CardGesture,
    CardRevision,
    CardSide,
    Direction,
    Face,
    StudySession,
};

const CARD_MAX_WIDTH: f32 = 512.0;
const CARD_HEIGHT: f32 = 320.0;
const CARD_ROUNDING: u8 = 12;
const CARD_PADDING: f32 = 24.0;
const LINE_GAP: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCommand {
    Next,
    Previous,
    Shuffle,
}

impl CardCommand {
    pub fn apply<R: Rng>(self, session: &mut StudySession<R>) {
        match self {
            CardCommand::Next => session.next(),
            CardCommand::Previous => session.previous(),
            CardCommand::Shuffle => session.shuffle(),
        }
    }
}

impl From<Direction> for CardCommand {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Forward => CardCommand::Next,
            Direction::Backward => CardCommand::Previous,
        }
    }
}

/// The flashcard, its navigation bar and the gesture state behind them.
pub struct CardView {
    gesture: CardGesture,
}

impl CardView {
    pub fn new(revision: CardRevision) -> Self {
        Self { gesture: CardGesture::new(revision) }
    }

    pub fn suppresses_scroll(&self) -> bool {
        self.gesture.suppresses_scroll()
    }

    /// Draws the card and navigation row. Navigation is applied to `session`
    /// before the card is painted, so the frame shows the card it leads to.
    pub fn show<R: Rng>(&mut self, ui: &mut Ui, theme: &Theme, session: &mut StudySession<R>) {
        let now = Instant::now();
        let finished_exit = self.gesture.tick(now, session.revision());
        self.navigate(ui, session, finished_exit.map(CardCommand::from));

        if session.current().is_none() {
            Self::ui_empty_deck(ui, theme);
            return;
        }

        let width = ui.available_width().min(CARD_MAX_WIDTH);
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(width, CARD_HEIGHT), Sense::click_and_drag());

        let mut command = None;
        if response.drag_started() {
            if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
                self.gesture.press(origin);
            }
        }
        if response.dragged() {
            if let Some(position) = response.interact_pointer_pos() {
                self.gesture.drag_to(position);
            }
        }
        if response.drag_stopped() {
            command = self.gesture.release(now).map(CardCommand::from);
        }
        // Enter and Space on the focused card arrive as clicks too.
        if response.clicked() {
            command = command.or(self.gesture.tap(now).map(CardCommand::from));
        }

        let nothing_focused = ui.memory(|m| m.focused().is_none());
        if (nothing_focused || response.has_focus()) && self.gesture.is_resting() {
            if ui.input(|i| i.key_pressed(Key::ArrowRight)) {
                command = command.or(Some(CardCommand::Next));
            } else if ui.input(|i| i.key_pressed(Key::ArrowLeft)) {
                command = command.or(Some(CardCommand::Previous));
            }
        }
        self.navigate(ui, session, command);

        if let Some(entry) = session.current() {
            let flip = self.gesture.flip_progress(now);
            let face = if flip < 0.5 { Face::Front } else { Face::Back };
            let content = face_content(entry, session.display(), face);
            self.paint_card(ui, theme, rect, now, flip, &content);
        }

        if response.has_focus() {
            ui.painter().rect_stroke(
                rect.expand(3.0),
                CornerRadius::same(CARD_ROUNDING + 3),
                Stroke::new(2.0, theme.accent(ui.ctx())),
                StrokeKind::Outside,
            );
        }

        if self.gesture.next_deadline(now).is_some() {
            ui.ctx().request_repaint();
        }

        ui.add_space(16.0);
        let clicked = Self::ui_navigation(ui, theme, &session.deck().counter(), width);
        self.navigate(ui, session, clicked);
    }

    /// Applies a command and resets the gesture to the card it lands on.
    fn navigate<R: Rng>(&mut self, ui: &Ui, session: &mut StudySession<R>, command: Option<CardCommand>) {
        let Some(command) = command else {
            return;
        };
        command.apply(session);
        self.gesture.sync_card(session.revision());
        ui.ctx().request_repaint();
    }

    fn paint_card(
        &self,
        ui: &Ui,
        theme: &Theme,
        rect: Rect,
        now: Instant,
        flip: f32,
        content: &FaceContent<'_>,
    ) {
        let ctx = ui.ctx();
        let painter = ui.painter();

        // Squash horizontally to fake the 3-D turn.
        let squash = (flip * PI).cos().abs().max(0.02);
        let center = rect.center() + self.gesture.visual_offset(now);
        let card_rect = Rect::from_center_size(center, Vec2::new(rect.width() * squash, rect.height()));

        painter.rect(
            card_rect,
            CornerRadius::same(CARD_ROUNDING),
            theme.card_fill(ctx),
            Stroke::new(2.0, theme.card_border(ctx, face_is_front(flip))),
            StrokeKind::Inside,
        );

        if squash < 0.2 {
            return;
        }

        let wrap_width = (card_rect.width() - 2.0 * CARD_PADDING).max(1.0);
        let galleys: Vec<_> = content
            .lines
            .iter()
            .map(|line| {
                let (size, color) = line_style(theme, ctx, line.side);
                painter.layout(line.text.to_string(), FontId::proportional(size), color, wrap_width)
            })
            .collect();

        let total_height: f32 = galleys.iter().map(|g| g.size().y).sum::<f32>()
            + LINE_GAP * galleys.len().saturating_sub(1) as f32;
        let mut y = card_rect.center().y - total_height / 2.0;

        for galley in galleys {
            let size = galley.size();
            let position = Pos2::new(card_rect.center().x - size.x / 2.0, y);
            y += size.y + LINE_GAP;
            painter.galley(position, galley, Color32::PLACEHOLDER);
        }

        if let Some(caption) = content.caption {
            painter.text(
                Pos2::new(card_rect.center().x, card_rect.bottom() - CARD_PADDING / 2.0),
                Align2::CENTER_BOTTOM,
                caption,
                FontId::proportional(12.0),
                theme.muted(ctx),
            );
        }
    }

    fn ui_navigation(ui: &mut Ui, theme: &Theme, counter: &str, width: f32) -> Option<CardCommand> {
        ui.allocate_ui(Vec2::new(width, 48.0), |ui| {
            let (left, right) = egui::Sides::new().height(48.0).show(
                ui,
                |ui| {
                    let mut command = None;
                    let previous = ui.button(egui::RichText::new("◀").size(20.0));
                    if previous.on_hover_text("Previous card").clicked() {
                        command = Some(CardCommand::Previous);
                    }
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        if ui.small_button("Shuffle Deck").clicked() {
                            command = Some(CardCommand::Shuffle);
                        }
                        ui.label(
                            egui::RichText::new(counter)
                                .monospace()
                                .size(16.0)
                                .color(theme.muted(ui.ctx())),
                        );
                    });
                    command
                },
                |ui| {
                    let next = ui.button(egui::RichText::new("▶").size(20.0));
                    next.on_hover_text("Next card").clicked().then_some(CardCommand::Next)
                },
            );
            left.or(right)
        })
        .inner
    }

    fn ui_empty_deck(ui: &mut Ui, theme: &Theme) {
        let width = ui.available_width().min(CARD_MAX_WIDTH);
        egui::Frame::group(ui.style())
            .fill(theme.card_fill(ui.ctx()))
            .corner_radius(CornerRadius::same(CARD_ROUNDING))
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(width, CARD_HEIGHT));
                ui.vertical_centered(|ui| {
                    ui.add_space(CARD_HEIGHT / 2.0 - 30.0);
                    ui.label(egui::RichText::new(EMPTY_DECK_MESSAGE).size(20.0).color(theme.muted(ui.ctx())));
                    ui.label(EMPTY_DECK_HINT);
                });
            });
    }
}

fn face_is_front(flip: f32) -> bool {
    flip < 0.5
}

fn line_style(theme: &Theme, ctx: &egui::Context, side: CardSide) -> (f32, Color32) {
    match side {
        CardSide::KanjiForm => (56.0, theme.foreground(ctx)),
        CardSide::Reading => (36.0, theme.reading(ctx)),
        CardSide::Translation => (24.0, theme.foreground(ctx)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::StdRng;

    use super::*;
    use crate::core::{
        DisplayConfig,
        GrammaticalType,
        TypeFilter,
        VocabularyEntry,
        VocabularyStore,
    };

    fn session() -> StudySession<StdRng> {
        let entries = vec![
            VocabularyEntry::new(Some("猫"), "ねこ", "cat", None, GrammaticalType::Noun),
            VocabularyEntry::new(Some("犬"), "いぬ", "dog", None, GrammaticalType::Noun),
            VocabularyEntry::new(None, "とても", "very", None, GrammaticalType::Adverb),
        ];
        StudySession::with_seed(
            VocabularyStore::new("test", entries),
            TypeFilter::new(),
            DisplayConfig::default(),
            Some(3),
        )
    }

    fn run_frame(ctx: &egui::Context, view: &mut CardView, session: &mut StudySession<StdRng>) {
        let theme = Theme::dracula();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| view.show(ui, &theme, session));
        });
    }

    #[test]
    fn test_finished_swipe_advances_before_painting() {
        let ctx = egui::Context::default();
        let mut session = session();
        let mut view = CardView::new(session.revision());
        let before = session.revision();

        let long_ago = Instant::now().checked_sub(Duration::from_secs(2)).unwrap();
        view.gesture.press(Pos2::new(200.0, 100.0));
        view.gesture.drag_to(Pos2::new(100.0, 100.0));
        assert_eq!(view.gesture.release(long_ago), None);
        assert!(!view.gesture.is_resting());

        run_frame(&ctx, &mut view, &mut session);

        assert_eq!(session.deck().position(), Some(1));
        assert_ne!(session.revision(), before);
        // The gesture already follows the new card, so it was the one painted.
        assert_eq!(view.gesture.card(), session.revision());
        assert!(view.gesture.is_resting());
        assert!(view.gesture.is_face_up());
    }

    #[test]
    fn test_resting_card_stays_put_across_frames() {
        let ctx = egui::Context::default();
        let mut session = session();
        let mut view = CardView::new(session.revision());

        run_frame(&ctx, &mut view, &mut session);
        run_frame(&ctx, &mut view, &mut session);

        assert_eq!(session.deck().position(), Some(0));
        assert_eq!(view.gesture.card(), session.revision());
    }

    #[test]
    fn test_button_during_exit_drops_pending_swipe() {
        let ctx = egui::Context::default();
        let mut session = session();
        let mut view = CardView::new(session.revision());

        view.gesture.press(Pos2::new(200.0, 100.0));
        view.gesture.drag_to(Pos2::new(100.0, 100.0));
        view.gesture.release(Instant::now() + Duration::from_secs(60));
        assert!(!view.gesture.is_resting());

        CardCommand::Shuffle.apply(&mut session);
        run_frame(&ctx, &mut view, &mut session);

        assert_eq!(session.deck().position(), Some(0));
        assert!(view.gesture.is_resting());
        assert_eq!(view.gesture.card(), session.revision());
    }

    #[test]
    fn test_backward_command_wraps_to_last_card() {
        let mut session = session();

        CardCommand::from(Direction::Backward).apply(&mut session);

        assert_eq!(session.deck().position(), Some(2));
    }
}

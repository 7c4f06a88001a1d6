use std::path::PathBuf;

use eframe::egui::{
    self,
    Id,
};
use tracing::{
    error,
    info,
};

use super::{
    card_view::CardView,
    controls::{
        ControlAction,
        ControlPanel,
    },
    drawer::Drawer,
    error_modal::ErrorModal,
    fonts::setup_fonts,
    settings::{
        Preferences,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        StudySession,
        TangoError,
        VocabularyStore,
    },
    persistence::save_json,
};

/// Windows at least this wide keep the controls in a side panel.
pub const WIDE_LAYOUT_MIN_WIDTH: f32 = 1024.0;
const SIDE_PANEL_WIDTH: f32 = 300.0;

pub struct TangoApp {
    session: StudySession,
    card_view: CardView,
    drawer: Drawer,
    preferences: Preferences,
    theme: Theme,
    error_modal: ErrorModal,
}

impl TangoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: StudySession,
        preferences: Preferences,
        startup_error: Option<TangoError>,
    ) -> Self {
        let mut app = Self {
            card_view: CardView::new(session.revision()),
            session,
            drawer: Drawer::new(),
            preferences,
            theme: Theme::dracula(),
            error_modal: ErrorModal::new(),
        };

        setup_fonts(&cc.egui_ctx, app.preferences.font_path.as_deref());
        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if app.preferences.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        if let Some(e) = startup_error {
            app.error_modal.show_error(
                "Vocabulary Error",
                "The vocabulary file could not be loaded. Using the bundled vocabulary instead.",
                Some(e.to_string()),
            );
        }

        app
    }

    fn save_preferences(&self) {
        if let Err(e) = save_json(&self.preferences, SETTINGS_FILE) {
            error!("Failed to save preferences: {}", e);
        }
    }

    fn apply_controls(&mut self, actions: Vec<ControlAction>) {
        let mut changed = false;
        for action in actions {
            changed |= action.apply(&mut self.session);
        }

        if changed {
            self.preferences.capture(self.session.filter(), self.session.display());
            self.save_preferences();
        }
    }

    fn handle_top_bar_action(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::OpenVocabulary(path) => self.open_vocabulary(path),
            TopBarAction::UseBundledVocabulary => match VocabularyStore::bundled() {
                Ok(store) => {
                    self.session.replace_store(store);
                    self.preferences.vocabulary_path = None;
                    self.save_preferences();
                }
                Err(e) => self.error_modal.show_error(
                    "Vocabulary Error",
                    "The bundled vocabulary is damaged.",
                    Some(e.to_string()),
                ),
            },
            TopBarAction::DarkModeChanged(dark_mode) => {
                self.preferences.dark_mode = dark_mode;
                self.save_preferences();
            }
        }
    }

    fn open_vocabulary(&mut self, path: PathBuf) {
        match VocabularyStore::load(&path) {
            Ok(store) => {
                info!("Switched vocabulary to {}", path.display());
                self.session.replace_store(store);
                self.preferences.vocabulary_path = Some(path);
                self.save_preferences();
            }
            Err(e) => {
                error!("Failed to open vocabulary {}: {}", path.display(), e);
                self.error_modal.show_error(
                    "Vocabulary Error",
                    format!("Unable to load {}", path.display()),
                    Some(e.to_string()),
                );
            }
        }
    }

    fn show_controls(&self, ui: &mut egui::Ui) -> (Vec<ControlAction>, Vec<Id>) {
        let store = self.session.store();
        let output = ControlPanel::show(
            ui,
            &self.theme,
            self.session.filter(),
            self.session.display(),
            |grammatical_type| store.count_of(grammatical_type),
        );
        (output.actions, output.focusable)
    }

    fn ui_header(&mut self, ui: &mut egui::Ui, wide: bool) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(self.theme.heading(ui.ctx(), "Japanese Flashcards").size(28.0));
            ui.label(
                egui::RichText::new("Click the card to flip it. Swipe or use the arrows to move.")
                    .color(self.theme.muted(ui.ctx())),
            );
            ui.add_space(8.0);

            if !wide {
                let button = ui.button("☰ Customize Deck & Display");
                if button.clicked() {
                    self.drawer.open(button.id);
                }
            }
            ui.add_space(16.0);
        });
    }
}

impl eframe::App for TangoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopBar::show(ctx, &self.theme, self.session.store().name()) {
            self.handle_top_bar_action(action);
        }

        let wide = ctx.screen_rect().width() >= WIDE_LAYOUT_MIN_WIDTH;
        if wide && self.drawer.is_open() {
            self.drawer.close();
        }

        if wide {
            let actions = egui::SidePanel::left("controls_panel")
                .resizable(false)
                .exact_width(SIDE_PANEL_WIDTH)
                .show(ctx, |ui| {
                    ui.add_space(12.0);
                    ui.label(self.theme.heading(ui.ctx(), "Customize Deck").size(20.0));
                    ui.add_space(8.0);
                    egui::ScrollArea::vertical().show(ui, |ui| self.show_controls(ui).0).inner
                })
                .inner;
            self.apply_controls(actions);
        }

        let scroll_source = egui::scroll_area::ScrollSource {
            drag: !self.card_view.suppresses_scroll(),
            ..egui::scroll_area::ScrollSource::ALL
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .scroll_source(scroll_source)
                .show(ui, |ui| {
                    self.ui_header(ui, wide);
                    ui.vertical_centered(|ui| {
                        self.card_view.show(ui, &self.theme, &mut self.session);
                    });
                });
        });

        if !wide {
            let store = self.session.store();
            let (filter, display) = (self.session.filter(), self.session.display());
            let theme = &self.theme;
            let actions = self.drawer.show(ctx, theme, |ui| {
                let output = ControlPanel::show(ui, theme, filter, display, |grammatical_type| {
                    store.count_of(grammatical_type)
                });
                (output.actions, output.focusable)
            });
            if let Some(actions) = actions {
                self.apply_controls(actions);
            }
        }

        self.error_modal.show(ctx, &self.theme);
    }
}

use std::path::PathBuf;

use eframe::egui::{
    self,
    containers,
};

use super::theme::Theme;

pub enum TopBarAction {
    OpenVocabulary(PathBuf),
    UseBundledVocabulary,
    DarkModeChanged(bool),
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, theme: &Theme, vocabulary_name: &str) -> Option<TopBarAction> {
        let mut action = None;
        let was_dark = ctx.style().visuals.dark_mode;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Open Vocabulary…").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .set_title("Open vocabulary")
                            .add_filter("Vocabulary", &["json"])
                            .pick_file()
                        {
                            action = Some(TopBarAction::OpenVocabulary(path));
                        }
                    }
                    if ui.button("Use Bundled Vocabulary").clicked() {
                        action = Some(TopBarAction::UseBundledVocabulary);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(egui::RichText::new(vocabulary_name).color(theme.muted(ui.ctx())))
                        .on_hover_text("Current vocabulary");
                });
            });
        });

        let is_dark = ctx.style().visuals.dark_mode;
        if action.is_none() && is_dark != was_dark {
            action = Some(TopBarAction::DarkModeChanged(is_dark));
        }

        action
    }
}

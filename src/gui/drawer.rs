use eframe::egui::{
    self,
    Align2,
    Id,
    Key,
    Modal,
    Ui,
    Vec2,
};

use super::theme::Theme;

const DRAWER_WIDTH: f32 = 320.0;
const SLIDE_SECONDS: f32 = 0.25;

/// Keeps keyboard focus cycling inside a fixed set of widgets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    order: Vec<Id>,
}

impl FocusTrap {
    pub fn new(order: Vec<Id>) -> Self {
        Self { order }
    }

    pub fn first(&self) -> Option<Id> {
        self.order.first().copied()
    }

    /// Decides where focus must go after a frame.
    ///
    /// `previous` is the widget focused before Tab was handled, `current` the
    /// widget focused now, `tab` is `Some(backwards)` when Tab was pressed.
    pub fn redirect(&self, previous: Option<Id>, current: Option<Id>, tab: Option<bool>) -> Option<Id> {
        let (first, last) = (self.order.first().copied()?, self.order.last().copied()?);

        match tab {
            Some(false) if previous == Some(last) => return Some(first),
            Some(true) if previous == Some(first) => return Some(last),
            _ => {}
        }

        match current {
            Some(id) if self.order.contains(&id) => None,
            _ if tab == Some(true) => Some(last),
            _ => Some(first),
        }
    }
}

/// Slide-in panel that hosts the controls on narrow windows.
#[derive(Default)]
pub struct Drawer {
    open: bool,
    trigger: Option<Id>,
    needs_initial_focus: bool,
    last_focused: Option<Id>,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the drawer, remembering which control opened it.
    pub fn open(&mut self, trigger: Id) {
        self.open = true;
        self.trigger = Some(trigger);
        self.needs_initial_focus = true;
        self.last_focused = None;
    }

    /// Closes the drawer. Returns the control focus should go back to.
    pub fn close(&mut self) -> Option<Id> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.needs_initial_focus = false;
        self.trigger.take()
    }

    /// Draws the drawer while open or sliding out. `add_contents` returns its
    /// own result and its focusable widgets; the result is only handed back
    /// while the drawer is open.
    pub fn show<R>(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        add_contents: impl FnOnce(&mut Ui) -> (R, Vec<Id>),
    ) -> Option<R> {
        let drawer_id = Id::new("controls_drawer");
        let slide = ctx.animate_bool_with_time(drawer_id.with("slide"), self.open, SLIDE_SECONDS);

        if !self.open {
            if slide > 0.0 {
                Self::show_closing(ctx, theme, drawer_id, slide, add_contents);
            }
            return None;
        }

        let previous_focus = self.last_focused.or_else(|| ctx.memory(|m| m.focused()));
        let tab = ctx.input(|i| i.key_pressed(Key::Tab).then_some(i.modifiers.shift));

        let mut close_clicked = false;
        let modal = Modal::new(drawer_id)
            .area(Modal::default_area(drawer_id).anchor(Align2::LEFT_TOP, slide_offset(slide)))
            .frame(drawer_frame(ctx))
            .backdrop_color(theme.backdrop())
            .show(ctx, |ui| {
                let mut focusable = Vec::new();
                close_clicked = Self::ui_title(ui, theme, &mut focusable);
                let (result, mut inner_focusable) = Self::ui_body(ui, add_contents);
                focusable.append(&mut inner_focusable);
                (result, focusable)
            });

        let should_close = modal.should_close() || close_clicked;
        let (result, focusable) = modal.inner;

        if should_close {
            if let Some(trigger) = self.close() {
                ctx.memory_mut(|m| m.request_focus(trigger));
            }
            return Some(result);
        }

        let trap = FocusTrap::new(focusable);
        let current_focus = ctx.memory(|m| m.focused());
        let redirect = if self.needs_initial_focus {
            self.needs_initial_focus = false;
            trap.first()
        } else {
            trap.redirect(previous_focus, current_focus, tab)
        };

        if let Some(id) = redirect {
            ctx.memory_mut(|m| m.request_focus(id));
        }
        self.last_focused = redirect.or(current_focus);

        Some(result)
    }

    /// Paints the drawer sliding out. Nothing in it reacts to input.
    fn show_closing<R>(
        ctx: &egui::Context,
        theme: &Theme,
        drawer_id: Id,
        slide: f32,
        add_contents: impl FnOnce(&mut Ui) -> (R, Vec<Id>),
    ) {
        ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, drawer_id.with("fade")))
            .rect_filled(ctx.screen_rect(), 0.0, theme.backdrop().gamma_multiply(slide));

        egui::Area::new(drawer_id.with("closing"))
            .order(egui::Order::Foreground)
            .anchor(Align2::LEFT_TOP, slide_offset(slide))
            .interactable(false)
            .show(ctx, |ui| {
                drawer_frame(ctx).show(ui, |ui| {
                    ui.disable();
                    Self::ui_title(ui, theme, &mut Vec::new());
                    Self::ui_body(ui, add_contents);
                });
            });
    }

    /// Title row with the close button. Returns `true` when the button was clicked.
    fn ui_title(ui: &mut Ui, theme: &Theme, focusable: &mut Vec<Id>) -> bool {
        ui.set_width(DRAWER_WIDTH);
        ui.set_min_height(ui.ctx().screen_rect().height());

        let mut clicked = false;
        ui.horizontal(|ui| {
            ui.label(theme.heading(ui.ctx(), "Customize Deck").size(20.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close = ui.button("✕").on_hover_text("Close settings");
                clicked = close.clicked();
                focusable.push(close.id);
            });
        });
        ui.separator();
        clicked
    }

    fn ui_body<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> (R, Vec<Id>)) -> (R, Vec<Id>) {
        egui::ScrollArea::vertical()
            .id_salt("controls_drawer_body")
            .auto_shrink([false, true])
            .show(ui, add_contents)
            .inner
    }
}

fn drawer_frame(ctx: &egui::Context) -> egui::Frame {
    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(12))
}

fn slide_offset(slide: f32) -> Vec2 {
    Vec2::new(-(1.0 - slide) * DRAWER_WIDTH, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trap() -> (FocusTrap, Id, Id, Id) {
        let (a, b, c) = (Id::new("a"), Id::new("b"), Id::new("c"));
        (FocusTrap::new(vec![a, b, c]), a, b, c)
    }

    #[test]
    fn test_tab_from_last_wraps_to_first() {
        let (trap, a, _, c) = trap();
        assert_eq!(trap.redirect(Some(c), Some(Id::new("outside")), Some(false)), Some(a));
        assert_eq!(trap.redirect(Some(c), None, Some(false)), Some(a));
    }

    #[test]
    fn test_shift_tab_from_first_wraps_to_last() {
        let (trap, a, _, c) = trap();
        assert_eq!(trap.redirect(Some(a), None, Some(true)), Some(c));
    }

    #[test]
    fn test_focus_inside_is_left_alone() {
        let (trap, a, b, _) = trap();
        assert_eq!(trap.redirect(Some(a), Some(b), Some(false)), None);
        assert_eq!(trap.redirect(Some(b), Some(b), None), None);
    }

    #[test]
    fn test_escaped_focus_is_pulled_back() {
        let (trap, a, _, _) = trap();
        assert_eq!(trap.redirect(None, Some(Id::new("card")), None), Some(a));
        assert_eq!(FocusTrap::default().redirect(None, None, Some(false)), None);
    }

    #[test]
    fn test_close_returns_trigger_once() {
        let trigger = Id::new("open_drawer_button");
        let mut drawer = Drawer::new();

        assert_eq!(drawer.close(), None);
        drawer.open(trigger);
        assert!(drawer.is_open());
        assert_eq!(drawer.close(), Some(trigger));
        assert!(!drawer.is_open());
        assert_eq!(drawer.close(), None);
    }

    fn frame_at(ctx: &egui::Context, time: f64, drawer: &mut Drawer, drawn: &mut usize) -> Option<u32> {
        let theme = Theme::dracula();
        let input = egui::RawInput { time: Some(time), ..Default::default() };
        let mut result = None;
        let _ = ctx.run(input, |ctx| {
            result = drawer.show(ctx, &theme, |ui| {
                *drawn += 1;
                let check = ui.button("Noun");
                (7, vec![check.id])
            });
        });
        result
    }

    #[test]
    fn test_open_drawer_returns_contents_result() {
        let ctx = egui::Context::default();
        let mut drawer = Drawer::new();
        let mut drawn = 0;

        assert_eq!(frame_at(&ctx, 0.0, &mut drawer, &mut drawn), None);
        assert_eq!(drawn, 0);

        drawer.open(Id::new("open_drawer_button"));
        assert_eq!(frame_at(&ctx, 0.1, &mut drawer, &mut drawn), Some(7));
        assert!(drawn > 0);
        assert!(drawer.is_open());
    }

    #[test]
    fn test_closed_drawer_keeps_drawing_until_slid_out() {
        let ctx = egui::Context::default();
        let mut drawer = Drawer::new();
        let mut drawn = 0;

        drawer.open(Id::new("open_drawer_button"));
        frame_at(&ctx, 0.0, &mut drawer, &mut drawn);
        frame_at(&ctx, 1.0, &mut drawer, &mut drawn);
        drawer.close();

        let before = drawn;
        assert_eq!(frame_at(&ctx, 1.05, &mut drawer, &mut drawn), None);
        assert!(drawn > before, "contents should still be painted while sliding out");

        let slid_out = drawn;
        frame_at(&ctx, 3.0, &mut drawer, &mut drawn);
        frame_at(&ctx, 3.1, &mut drawer, &mut drawn);
        assert_eq!(drawn, slid_out, "nothing is painted once the drawer is gone");
    }
}

pub mod app;
pub mod card_view;
pub mod controls;
pub mod drawer;
pub mod error_modal;
pub mod fonts;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::TangoApp;

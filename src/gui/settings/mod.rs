pub mod data;

pub use data::{
    Preferences,
    SETTINGS_FILE,
};

use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    sync::Arc,
};

use eframe::egui;
use tracing::{
    info,
    warn,
};

use crate::core::TangoError;

const JAPANESE_FONT: &str = "japanese";

/// Common locations of a CJK-capable font on each desktop platform.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansJP-Regular.ttf",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// Reads the configured font, or the first system font that exists.
pub fn find_japanese_font(configured: Option<&Path>) -> Result<(PathBuf, Vec<u8>), TangoError> {
    if let Some(path) = configured {
        let bytes = fs::read(path).map_err(|e| {
            TangoError::FailedToLoadFile(format!("{}: {}", path.display(), e))
        })?;
        return Ok((path.to_path_buf(), bytes));
    }

    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find_map(|path| fs::read(&path).ok().map(|bytes| (path, bytes)))
        .ok_or_else(|| TangoError::Custom("no Japanese font found on this system".to_string()))
}

pub fn setup_fonts(ctx: &egui::Context, configured: Option<&Path>) {
    let (path, bytes) = match find_japanese_font(configured) {
        Ok(found) => found,
        Err(e) => {
            warn!("Japanese text may not render: {}", e);
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(JAPANESE_FONT.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

    // Default fonts stay first so Latin text and symbols keep their look.
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(JAPANESE_FONT.to_owned());
    }

    ctx.set_fonts(fonts);
    info!("Using Japanese font: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configured_font_is_an_error() {
        let result = find_japanese_font(Some(Path::new("no/such/font.ttf")));
        match result {
            Err(TangoError::FailedToLoadFile(message)) => assert!(message.contains("font.ttf")),
            other => panic!("Expected FailedToLoadFile, got {:?}", other.map(|(path, _)| path)),
        }
    }

    #[test]
    fn test_configured_font_is_read_verbatim() {
        let path = std::env::temp_dir().join(format!("tango-font-{}.ttf", std::process::id()));
        fs::write(&path, b"not really a font").unwrap();

        let (found, bytes) = find_japanese_font(Some(&path)).unwrap();

        assert_eq!(found, path);
        assert_eq!(bytes, b"not really a font");
    }
}

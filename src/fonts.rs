//! Installs an Arial-like system font, falling back to egui's built-in faces.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

use crate::error::ClockError;

const FONT_NAME: &str = "clock-face";

#[cfg(windows)]
const SYSTEM_FONT_PATHS: &[&str] = &[
    r"C:\Windows\Fonts\arial.ttf",
    r"C:\Windows\Fonts\segoeui.ttf",
];

#[cfg(target_os = "macos")]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
];

#[cfg(not(any(windows, target_os = "macos")))]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

fn read_font(path: &Path) -> Result<Vec<u8>, ClockError> {
    std::fs::read(path).map_err(|source| ClockError::FontRead {
        path: path.to_path_buf(),
        source,
    })
}

/// First readable font among `candidates`.
fn first_readable(candidates: &[&str]) -> Option<(PathBuf, Vec<u8>)> {
    for candidate in candidates {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        match read_font(path) {
            Ok(bytes) => return Some((path.to_path_buf(), bytes)),
            Err(err) => warn!("{err}"),
        }
    }
    None
}

/// Puts the first available system font in front of the proportional family.
pub fn setup_fonts(ctx: &egui::Context) {
    let Some((path, bytes)) = first_readable(SYSTEM_FONT_PATHS) else {
        warn!("no system font found, using egui defaults");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, FONT_NAME.to_owned());
    ctx.set_fonts(fonts);
    info!("using font {}", path.display());
}

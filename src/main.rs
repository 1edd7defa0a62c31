//! Analog Clock: desktop analog clock with date captions (Rust + egui)

mod app;
mod calendar;
mod clock;
mod config;
mod error;
mod fonts;
mod icon;
mod logging;
mod render;
mod surface;

use config::ClockConfig;
use error::ClockError;

const TITLE: &str = "Analog Clock";
const ICON_SIZE: u32 = 48;

fn main() -> Result<(), ClockError> {
    logging::init_logging(None);

    let config = ClockConfig::default();
    let icon = egui::IconData {
        rgba: icon::clock_icon_rgba(ICON_SIZE),
        width: ICON_SIZE,
        height: ICON_SIZE,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.canvas_size)
            .with_resizable(false)
            .with_title(TITLE)
            .with_icon(icon),
        ..Default::default()
    };

    log::info!("starting {TITLE}");
    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::ClockApp::new(cc, config)))),
    )?;
    Ok(())
}

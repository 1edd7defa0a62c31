//! egui window: clock canvas with year and date captions

use std::time::Duration;

use chrono::{Local, Timelike};
use eframe::egui;
use log::{debug, info};

use crate::calendar::{self, DateLocale};
use crate::clock::TimeSample;
use crate::config::ClockConfig;
use crate::fonts;
use crate::render::{ClockGeometry, ClockRenderer};
use crate::surface::EguiSurface;

mod palette {
    use eframe::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::WHITE;
    pub const CAPTION: Color32 = Color32::BLACK;
}

/// Time left until the next whole wall-clock second.
///
/// `subsec_nanos` may exceed one second during a leap second.
fn until_next_second(subsec_nanos: u32) -> Duration {
    let nanos = subsec_nanos.min(999_999_999);
    Duration::from_nanos(u64::from(1_000_000_000 - nanos))
}

pub struct ClockApp {
    config: ClockConfig,
    date_locale: DateLocale,
    /// Most recent sample drawn; used to log once per new second.
    last_sample: Option<TimeSample>,
}

impl ClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClockConfig) -> Self {
        fonts::setup_fonts(&cc.egui_ctx);
        let date_locale = DateLocale::detect();
        info!(
            "clock window {}x{}, face radius {}, dates in {:?}",
            config.canvas_size.x, config.canvas_size.y, config.face_radius, date_locale
        );
        Self::with_config(config, date_locale)
    }

    fn with_config(config: ClockConfig, date_locale: DateLocale) -> Self {
        Self {
            config,
            date_locale,
            last_sample: None,
        }
    }

    /// Remembers `sample`; true when it differs from the previous frame's.
    fn record_tick(&mut self, sample: TimeSample) -> bool {
        if self.last_sample == Some(sample) {
            return false;
        }
        self.last_sample = Some(sample);
        true
    }

    fn caption(&self, text: String) -> egui::RichText {
        egui::RichText::new(text)
            .size(self.config.label_font_size)
            .color(palette::CAPTION)
    }
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Local::now();
        let sample = TimeSample::from_datetime(&now);
        if self.record_tick(sample) {
            debug!("tick {:02}:{:02}:{:02}", sample.hour, sample.minute, sample.second);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette::BACKGROUND))
            .show(ctx, |ui| {
                let canvas = ui.max_rect();
                {
                    let renderer = ClockRenderer::new(ClockGeometry::new(canvas, &self.config));
                    let mut surface = EguiSurface::new(ui.painter(), palette::BACKGROUND);
                    renderer.draw(&mut surface, &sample);
                }

                ui.vertical_centered(|ui| {
                    ui.label(self.caption(calendar::year_label(&sample)));
                });
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(self.config.date_label_margin);
                    ui.label(self.caption(calendar::date_label(&sample, self.date_locale)));
                });
            });

        ctx.request_repaint_after(until_next_second(now.nanosecond()));
    }
}

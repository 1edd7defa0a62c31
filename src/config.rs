//! Clock layout constants, fixed at startup.

use egui::Vec2;

/// Clock layout configuration (logical pixels).
#[derive(Clone, Debug, PartialEq)]
pub struct ClockConfig {
    /// Window and canvas size.
    pub canvas_size: Vec2,
    /// Radius of the round face.
    pub face_radius: f32,
    /// Radii of the decorative ellipse around the face.
    pub ellipse_radii: Vec2,
    /// How far the face center sits below the canvas center.
    pub center_drop: f32,
    /// Distance from the canvas bottom to the side circles' centers.
    pub side_circle_inset: f32,
    pub numeral_font_size: f32,
    pub label_font_size: f32,
    /// Space kept under the date label.
    pub date_label_margin: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::new(700.0, 500.0),
            face_radius: 150.0,
            ellipse_radii: Vec2::new(300.0, 200.0),
            center_drop: 25.0,
            side_circle_inset: 70.0,
            numeral_font_size: 16.0,
            label_font_size: 16.0,
            date_label_margin: 30.0,
        }
    }
}

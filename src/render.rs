//! Clock face rendering onto an immediate-mode 2D surface

use egui::{Color32, Pos2, Rect, Vec2};

use crate::clock::{self, HandSpec, HandTip, TimeSample};
use crate::config::ClockConfig;

/// Yellow-green of the decorative side circles.
const SIDE_CIRCLE_COLOR: Color32 = Color32::from_rgb(154, 205, 50);
const SIDE_CIRCLE_RADIUS: f32 = 15.0;
/// Horizontal offset of the side circles as a share of the ellipse's x radius.
const SIDE_CIRCLE_SPREAD: f32 = 0.7;
const CENTER_CAP_RADIUS: f32 = 5.0;
const ELLIPSE_LINE_WIDTH: f32 = 3.0;
const FACE_LINE_WIDTH: f32 = 2.0;

/// Stateful 2D drawing target: style setters followed by stroke/fill calls,
/// in the manner of an HTML canvas.
///
/// Ovals are given by center and radii. Coordinates are surface pixels with
/// y growing downwards.
pub trait Surface {
    /// Wipes the whole drawing region.
    fn clear(&mut self);
    fn set_stroke(&mut self, color: Color32);
    fn set_fill(&mut self, color: Color32);
    fn set_line_width(&mut self, width: f32);
    fn set_font_size(&mut self, size: f32);

    fn stroke_oval(&mut self, center: Pos2, radii: Vec2);
    fn fill_oval(&mut self, center: Pos2, radii: Vec2);
    fn stroke_line(&mut self, from: Pos2, to: Pos2);
    fn fill_polygon(&mut self, points: &[Pos2]);
    fn stroke_polygon(&mut self, points: &[Pos2]);

    /// Width and line height of `text` in the current font.
    fn measure_text(&self, text: &str) -> Vec2;
    /// Draws `text` in the fill color with its baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Pos2);
}

/// Where the clock sits on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockGeometry {
    pub center: Pos2,
    pub face_radius: f32,
    pub ellipse_radii: Vec2,
    /// Vertical position of the side circles' centers.
    pub side_circle_y: f32,
    pub numeral_font_size: f32,
}

impl ClockGeometry {
    pub fn new(canvas: Rect, config: &ClockConfig) -> Self {
        Self {
            center: canvas.center() + Vec2::new(0.0, config.center_drop),
            face_radius: config.face_radius,
            ellipse_radii: config.ellipse_radii,
            side_circle_y: canvas.max.y - config.side_circle_inset,
            numeral_font_size: config.numeral_font_size,
        }
    }

    /// Centers of the left and right side circles.
    pub fn side_circle_centers(&self) -> [Pos2; 2] {
        let dx = self.ellipse_radii.x * SIDE_CIRCLE_SPREAD;
        [
            Pos2::new(self.center.x - dx, self.side_circle_y),
            Pos2::new(self.center.x + dx, self.side_circle_y),
        ]
    }
}

/// Draws one complete frame of the clock.
#[derive(Clone, Debug)]
pub struct ClockRenderer {
    geometry: ClockGeometry,
}

impl ClockRenderer {
    pub fn new(geometry: ClockGeometry) -> Self {
        Self { geometry }
    }

    /// Clears the surface and paints face, numerals, hands, center cap and
    /// side circles, in that order.
    pub fn draw<S: Surface>(&self, surface: &mut S, time: &TimeSample) {
        surface.clear();
        self.draw_face(surface);
        self.draw_numerals(surface);

        let r = self.geometry.face_radius;
        for hand in [
            HandSpec::hour(time, r),
            HandSpec::minute(time, r),
            HandSpec::second(time, r),
        ] {
            self.draw_hand(surface, &hand);
        }

        circle_with_outline(surface, self.geometry.center, CENTER_CAP_RADIUS, Color32::WHITE);
        self.draw_side_circles(surface);
    }

    fn draw_face<S: Surface>(&self, surface: &mut S) {
        let g = &self.geometry;
        surface.set_stroke(Color32::BLACK);
        surface.set_line_width(ELLIPSE_LINE_WIDTH);
        surface.stroke_oval(g.center, g.ellipse_radii);

        surface.set_line_width(FACE_LINE_WIDTH);
        surface.stroke_oval(g.center, Vec2::splat(g.face_radius));
    }

    fn draw_numerals<S: Surface>(&self, surface: &mut S) {
        let g = &self.geometry;
        surface.set_font_size(g.numeral_font_size);
        surface.set_fill(Color32::BLACK);
        for i in 1..=12 {
            let numeral = clock::to_roman(i);
            let size = surface.measure_text(numeral);
            let origin = clock::numeral_origin(g.center, g.face_radius, i, size.x, size.y);
            surface.fill_text(numeral, origin);
        }
    }

    fn draw_hand<S: Surface>(&self, surface: &mut S, hand: &HandSpec) {
        let center = self.geometry.center;
        let tip = hand.tip_point(center);

        surface.set_stroke(hand.color);
        surface.set_line_width(hand.line_width);
        surface.stroke_line(center, tip);

        match hand.tip {
            HandTip::Circle { radius, back_offset } => {
                let a = hand.direction();
                let at = tip - Vec2::new(a.cos(), a.sin()) * back_offset;
                circle_with_outline(surface, at, radius, Color32::WHITE);
            }
            HandTip::Arrow { size, fill } => {
                let points = clock::arrowhead(tip, hand.direction(), size);
                surface.set_fill(fill);
                surface.fill_polygon(&points);
                surface.set_stroke(Color32::BLACK);
                surface.stroke_polygon(&points);
            }
        }
    }

    fn draw_side_circles<S: Surface>(&self, surface: &mut S) {
        surface.set_stroke(Color32::BLACK);
        for center in self.geometry.side_circle_centers() {
            circle_with_outline(surface, center, SIDE_CIRCLE_RADIUS, SIDE_CIRCLE_COLOR);
        }
    }
}

/// Filled circle with a black outline.
fn circle_with_outline<S: Surface>(surface: &mut S, center: Pos2, radius: f32, fill: Color32) {
    let radii = Vec2::splat(radius);
    surface.set_fill(fill);
    surface.fill_oval(center, radii);
    surface.set_stroke(Color32::BLACK);
    surface.stroke_oval(center, radii);
}

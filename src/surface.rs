//! egui painter adapter for the clock renderer

use egui::{Color32, FontId, Painter, Pos2, Shape, Stroke, Vec2};

use crate::render::Surface;

/// Share of the row height above the baseline in egui's text layout.
const BASELINE_RATIO: f32 = 0.75;

/// [`Surface`] over an [`egui::Painter`], carrying canvas-style pen state.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    background: Color32,
    stroke: Color32,
    fill: Color32,
    line_width: f32,
    font: FontId,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, background: Color32) -> Self {
        Self {
            painter,
            background,
            stroke: Color32::BLACK,
            fill: Color32::BLACK,
            line_width: 1.0,
            font: FontId::proportional(14.0),
        }
    }

    fn pen(&self) -> Stroke {
        Stroke::new(self.line_width, self.stroke)
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, self.background);
    }

    fn set_stroke(&mut self, color: Color32) {
        self.stroke = color;
    }

    fn set_fill(&mut self, color: Color32) {
        self.fill = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_font_size(&mut self, size: f32) {
        self.font = FontId::proportional(size);
    }

    fn stroke_oval(&mut self, center: Pos2, radii: Vec2) {
        if radii.x == radii.y {
            self.painter.circle_stroke(center, radii.x, self.pen());
        } else {
            self.painter.add(Shape::ellipse_stroke(center, radii, self.pen()));
        }
    }

    fn fill_oval(&mut self, center: Pos2, radii: Vec2) {
        if radii.x == radii.y {
            self.painter.circle_filled(center, radii.x, self.fill);
        } else {
            self.painter.add(Shape::ellipse_filled(center, radii, self.fill));
        }
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2) {
        self.painter.line_segment([from, to], self.pen());
    }

    fn fill_polygon(&mut self, points: &[Pos2]) {
        self.painter
            .add(Shape::convex_polygon(points.to_vec(), self.fill, Stroke::NONE));
    }

    fn stroke_polygon(&mut self, points: &[Pos2]) {
        self.painter
            .add(Shape::closed_line(points.to_vec(), self.pen()));
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        self.painter
            .layout_no_wrap(text.to_owned(), self.font.clone(), self.fill)
            .size()
    }

    fn fill_text(&mut self, text: &str, origin: Pos2) {
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), self.font.clone(), self.fill);
        // egui positions a galley by its top-left corner.
        let top_left = origin - Vec2::new(0.0, galley.size().y * BASELINE_RATIO);
        self.painter.galley(top_left, galley, self.fill);
    }
}

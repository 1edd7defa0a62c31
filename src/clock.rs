//! Wall-clock sampling and hand geometry

use std::f32::consts::PI;

use chrono::{Datelike, Timelike};
use egui::{Color32, Pos2, Vec2};

/// Clock degrees swept per hour, minute and second.
const DEG_PER_HOUR: f32 = 30.0;
const DEG_PER_MINUTE: f32 = 6.0;
const DEG_PER_SECOND: f32 = 6.0;

/// Spread between the hand direction and each arrowhead base vertex.
const ARROW_SPREAD_DEG: f32 = 150.0;

/// Hand lengths as a share of the face radius.
const HOUR_HAND_SCALE: f32 = 0.5;
const MINUTE_HAND_SCALE: f32 = 0.8;
const SECOND_HAND_SCALE: f32 = 0.9;

/// Numerals sit on a circle of this share of the face radius.
const NUMERAL_RING_SCALE: f32 = 0.9;

/// One reading of the local clock, hour folded onto a 12-hour dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSample {
    /// 1..=12
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub day: u32,
    /// 1..=12
    pub month: u32,
    pub year: i32,
}

impl TimeSample {
    /// Reads a date-time, typically `chrono::Local::now()`.
    pub fn from_datetime<T: Datelike + Timelike>(t: &T) -> Self {
        let hour = match t.hour() % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute: t.minute(),
            second: t.second(),
            day: t.day(),
            month: t.month(),
            year: t.year(),
        }
    }

    /// Hour hand angle in clock degrees, drifting half a degree per minute.
    pub fn hour_angle(&self) -> f32 {
        (self.hour as f32 * DEG_PER_HOUR + self.minute as f32 * 0.5).rem_euclid(360.0)
    }

    /// Minute hand angle in clock degrees, drifting a tenth of a degree per second.
    pub fn minute_angle(&self) -> f32 {
        (self.minute as f32 * DEG_PER_MINUTE + self.second as f32 * 0.1).rem_euclid(360.0)
    }

    pub fn second_angle(&self) -> f32 {
        (self.second as f32 * DEG_PER_SECOND).rem_euclid(360.0)
    }
}

/// Converts clock degrees (0 at twelve, clockwise) to surface radians (0 along +x, y down).
pub fn to_surface_radians(clock_deg: f32) -> f32 {
    (clock_deg - 90.0).to_radians()
}

/// Point at `length` from `center` in the direction of `clock_deg`.
pub fn hand_tip(center: Pos2, clock_deg: f32, length: f32) -> Pos2 {
    let a = to_surface_radians(clock_deg);
    center + Vec2::new(a.cos(), a.sin()) * length
}

/// Triangle pointing along `direction` (surface radians) with its apex at `tip`.
///
/// Returns `[tip, left, right]`.
pub fn arrowhead(tip: Pos2, direction: f32, size: f32) -> [Pos2; 3] {
    let spread = ARROW_SPREAD_DEG.to_radians();
    let left = direction + spread;
    let right = direction - spread;
    [
        tip,
        tip + Vec2::new(left.cos(), left.sin()) * size,
        tip + Vec2::new(right.cos(), right.sin()) * size,
    ]
}

/// Roman numeral for a dial position. Only 1..=12 are defined.
pub fn to_roman(n: u32) -> &'static str {
    match n {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        6 => "VI",
        7 => "VII",
        8 => "VIII",
        9 => "IX",
        10 => "X",
        11 => "XI",
        12 => "XII",
        _ => "",
    }
}

/// Surface angle of dial position `i`: three o'clock is 0, twelve is straight up.
pub fn numeral_angle(i: u32) -> f32 {
    PI / 6.0 * (i as f32 - 3.0)
}

/// Point on the numeral ring for dial position `i`.
pub fn numeral_anchor(center: Pos2, face_radius: f32, i: u32) -> Pos2 {
    let theta = numeral_angle(i);
    center + Vec2::new(theta.cos(), theta.sin()) * (face_radius * NUMERAL_RING_SCALE)
}

/// Baseline origin that centers a numeral of `text_width` on its anchor.
///
/// `text_height` is the measured line height; a quarter of it below the
/// anchor puts the glyphs' visual middle on the ring.
pub fn numeral_origin(center: Pos2, face_radius: f32, i: u32, text_width: f32, text_height: f32) -> Pos2 {
    numeral_anchor(center, face_radius, i) + Vec2::new(-text_width / 2.0, text_height / 4.0)
}

/// Decoration at the end of a hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HandTip {
    /// White ring centered `back_offset` behind the tip.
    Circle { radius: f32, back_offset: f32 },
    /// Black-outlined triangle at the tip.
    Arrow { size: f32, fill: Color32 },
}

/// Everything needed to draw one hand for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandSpec {
    /// Clock degrees.
    pub angle_deg: f32,
    pub length: f32,
    pub line_width: f32,
    pub color: Color32,
    pub tip: HandTip,
}

impl HandSpec {
    pub fn hour(sample: &TimeSample, face_radius: f32) -> Self {
        Self {
            angle_deg: sample.hour_angle(),
            length: face_radius * HOUR_HAND_SCALE,
            line_width: 1.0,
            color: Color32::BLACK,
            tip: HandTip::Circle {
                radius: 8.0,
                back_offset: 20.0,
            },
        }
    }

    pub fn minute(sample: &TimeSample, face_radius: f32) -> Self {
        Self {
            angle_deg: sample.minute_angle(),
            length: face_radius * MINUTE_HAND_SCALE,
            line_width: 1.0,
            color: Color32::BLACK,
            tip: HandTip::Arrow {
                size: 12.0,
                fill: Color32::BLACK,
            },
        }
    }

    pub fn second(sample: &TimeSample, face_radius: f32) -> Self {
        Self {
            angle_deg: sample.second_angle(),
            length: face_radius * SECOND_HAND_SCALE,
            line_width: 1.0,
            color: Color32::BLACK,
            tip: HandTip::Arrow {
                size: 16.0,
                fill: Color32::WHITE,
            },
        }
    }

    pub fn direction(&self) -> f32 {
        to_surface_radians(self.angle_deg)
    }

    pub fn tip_point(&self, center: Pos2) -> Pos2 {
        hand_tip(center, self.angle_deg, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn pos_approx_eq(a: Pos2, b: Pos2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    fn sample(h: u32, m: u32, s: u32) -> TimeSample {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        TimeSample::from_datetime(&dt)
    }

    // --- TimeSample ---

    #[test]
    fn midnight_folds_to_twelve() {
        let t = sample(0, 0, 0);
        assert_eq!(t.hour, 12);
        assert!(approx_eq(t.hour_angle(), 0.0));
        assert!(approx_eq(t.minute_angle(), 0.0));
        assert!(approx_eq(t.second_angle(), 0.0));
    }

    #[test]
    fn afternoon_folds_onto_dial() {
        assert_eq!(sample(12, 0, 0).hour, 12);
        assert_eq!(sample(13, 0, 0).hour, 1);
        assert_eq!(sample(23, 59, 59).hour, 11);
    }

    #[test]
    fn carries_calendar_fields() {
        let t = sample(9, 41, 7);
        assert_eq!((t.day, t.month, t.year), (17, 10, 2026));
        assert_eq!((t.minute, t.second), (41, 7));
    }

    // --- hand angles ---

    #[test]
    fn hour_angle_matches_formula_for_every_hour_and_minute() {
        for hour in 1..=12 {
            for minute in 0..60 {
                let t = sample(hour, minute, 0);
                let expected = (hour as f32 * 30.0 + minute as f32 * 0.5) % 360.0;
                assert!(approx_eq(t.hour_angle(), expected), "{hour}:{minute}");
            }
        }
    }

    #[test]
    fn hour_angle_increases_within_the_hour() {
        for hour in 1..=12 {
            let angles: Vec<f32> = (0..60).map(|m| sample(hour, m, 0).hour_angle()).collect();
            assert!(angles.windows(2).all(|w| w[0] < w[1]), "hour {hour}");
        }
    }

    #[test]
    fn minute_angle_matches_formula() {
        for minute in 0..60 {
            for second in [0, 1, 30, 59] {
                let t = sample(5, minute, second);
                let expected = (minute as f32 * 6.0 + second as f32 * 0.1) % 360.0;
                assert!(approx_eq(t.minute_angle(), expected), "{minute}:{second}");
            }
        }
    }

    #[test]
    fn second_angle_is_exact() {
        for second in 0..60 {
            assert_eq!(sample(5, 10, second).second_angle(), second as f32 * 6.0);
        }
    }

    #[test]
    fn three_oclock_points_hour_hand_right() {
        let t = sample(3, 0, 0);
        assert!(approx_eq(t.hour_angle(), 90.0));
        assert!(approx_eq(t.minute_angle(), 0.0));
        assert!(approx_eq(t.second_angle(), 0.0));

        let center = Pos2::new(100.0, 100.0);
        let hour = HandSpec::hour(&t, 150.0);
        let minute = HandSpec::minute(&t, 150.0);
        let second = HandSpec::second(&t, 150.0);
        assert!(pos_approx_eq(hour.tip_point(center), Pos2::new(175.0, 100.0)));
        assert!(pos_approx_eq(minute.tip_point(center), Pos2::new(100.0, -20.0)));
        assert!(pos_approx_eq(second.tip_point(center), Pos2::new(100.0, -35.0)));
    }

    #[test]
    fn midnight_hands_point_up() {
        let t = sample(0, 0, 0);
        let center = Pos2::new(0.0, 0.0);
        let tip = HandSpec::hour(&t, 150.0).tip_point(center);
        assert!(pos_approx_eq(tip, Pos2::new(0.0, -75.0)));
    }

    // --- conversions ---

    #[test]
    fn surface_radians_put_twelve_up_and_three_right() {
        assert!(approx_eq(to_surface_radians(0.0), -PI / 2.0));
        assert!(approx_eq(to_surface_radians(90.0), 0.0));
        assert!(approx_eq(to_surface_radians(180.0), PI / 2.0));
    }

    // --- arrowhead ---

    #[test]
    fn arrowhead_for_horizontal_hand() {
        let length = 120.0;
        let size = 16.0;
        let tip = hand_tip(Pos2::ZERO, 90.0, length);
        let [apex, left, right] = arrowhead(tip, 0.0, size);

        let spread = 150.0_f32.to_radians();
        assert!(pos_approx_eq(apex, Pos2::new(length, 0.0)));
        assert!(pos_approx_eq(left, Pos2::new(length + size * spread.cos(), size * spread.sin())));
        assert!(pos_approx_eq(right, Pos2::new(length + size * (-spread).cos(), size * (-spread).sin())));
    }

    #[test]
    fn arrowhead_base_trails_the_tip() {
        // Hand pointing up: the base vertices sit below the apex, mirrored around it.
        let tip = Pos2::new(0.0, -100.0);
        let [apex, left, right] = arrowhead(tip, to_surface_radians(0.0), 12.0);
        assert!(left.y > apex.y && right.y > apex.y);
        assert!(approx_eq(left.x, -right.x));
        assert!(approx_eq(left.y, right.y));
    }

    // --- numerals ---

    #[test]
    fn roman_lookup_covers_the_dial() {
        let expected = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII"];
        for (i, numeral) in (1..=12).zip(expected) {
            assert_eq!(to_roman(i), numeral);
        }
        let mut all: Vec<&str> = (1..=12).map(to_roman).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn roman_outside_dial_is_empty() {
        assert_eq!(to_roman(0), "");
        assert_eq!(to_roman(13), "");
    }

    #[test]
    fn numerals_land_on_their_quarters() {
        let center = Pos2::new(350.0, 275.0);
        let r = 150.0;
        assert!(approx_eq(numeral_angle(3), 0.0));
        assert!(pos_approx_eq(numeral_anchor(center, r, 3), Pos2::new(485.0, 275.0)));
        assert!(pos_approx_eq(numeral_anchor(center, r, 6), Pos2::new(350.0, 410.0)));
        assert!(pos_approx_eq(numeral_anchor(center, r, 9), Pos2::new(215.0, 275.0)));
        assert!(pos_approx_eq(numeral_anchor(center, r, 12), Pos2::new(350.0, 140.0)));
    }

    #[test]
    fn numeral_origin_centers_measured_text() {
        let center = Pos2::new(350.0, 275.0);
        let origin = numeral_origin(center, 150.0, 12, 20.0, 16.0);
        assert!(pos_approx_eq(origin, Pos2::new(340.0, 144.0)));
        let origin = numeral_origin(center, 150.0, 3, 12.0, 16.0);
        assert!(pos_approx_eq(origin, Pos2::new(479.0, 279.0)));
    }

    // --- hand specs ---

    #[test]
    fn hand_specs_scale_with_radius() {
        let t = sample(10, 10, 30);
        assert!(approx_eq(HandSpec::hour(&t, 150.0).length, 75.0));
        assert!(approx_eq(HandSpec::minute(&t, 150.0).length, 120.0));
        assert!(approx_eq(HandSpec::second(&t, 150.0).length, 135.0));
    }

    #[test]
    fn hand_tips_match_decorations() {
        let t = sample(10, 10, 30);
        assert_eq!(
            HandSpec::hour(&t, 150.0).tip,
            HandTip::Circle { radius: 8.0, back_offset: 20.0 }
        );
        assert_eq!(
            HandSpec::minute(&t, 150.0).tip,
            HandTip::Arrow { size: 12.0, fill: Color32::BLACK }
        );
        assert_eq!(
            HandSpec::second(&t, 150.0).tip,
            HandTip::Arrow { size: 16.0, fill: Color32::WHITE }
        );
    }
}

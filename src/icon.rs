//! Application icon: a small clock glyph rasterized to RGBA.
//!
//! Shared by the window icon at runtime and `build.rs`, which turns it into
//! `icon.ico` for the Windows executable. Keep this file free of crate
//! dependencies so the build script can include it.

/// Ring, hand and center color.
const INK: [u8; 4] = [20, 20, 20, 255];
/// Face fill.
const PAPER: [u8; 4] = [255, 255, 255, 255];
/// Accent used by the center dot, same yellow-green as the side circles.
const ACCENT: [u8; 4] = [154, 205, 50, 255];

/// Distance from point `(px, py)` to the segment `(ax, ay)-(bx, by)`.
fn segment_distance(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (qx, qy) = (ax + t * dx, ay + t * dy);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

/// Rasterizes a `size`×`size` clock icon showing ten past ten.
///
/// Returns `size * size * 4` bytes, row-major RGBA, transparent outside the face.
pub fn clock_icon_rgba(size: u32) -> Vec<u8> {
    let c = size as f32 * 0.5;
    let r = size as f32 * 0.44;
    let ring = (size as f32 * 0.08).max(1.0);
    let hand = (size as f32 * 0.05).max(0.75);

    // Hands in surface coordinates, angles measured from 12 o'clock clockwise.
    let tip = |deg: f32, len: f32| {
        let a = (deg - 90.0).to_radians();
        (c + a.cos() * len, c + a.sin() * len)
    };
    let hour_tip = tip(305.0, r * 0.5);
    let minute_tip = tip(60.0, r * 0.75);

    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let d = ((px - c).powi(2) + (py - c).powi(2)).sqrt();

            let pixel = if d > r {
                [0, 0, 0, 0]
            } else if d > r - ring {
                INK
            } else if d <= hand * 1.5 {
                ACCENT
            } else if segment_distance(px, py, c, c, hour_tip.0, hour_tip.1) <= hand
                || segment_distance(px, py, c, c, minute_tip.0, minute_tip.1) <= hand
            {
                INK
            } else {
                PAPER
            };
            rgba.extend_from_slice(&pixel);
        }
    }
    rgba
}

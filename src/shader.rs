//! Per-pixel shading for the generated icon.
//!
//! Every color is a pure function of `(x, y, size)`: a layered gradient
//! background, a stylized "M" glyph built from two vertical strokes and two
//! diagonals, and a drop shadow that is the same glyph shifted down and right.

use std::f64::consts::SQRT_2;

pub type Rgb = [u8; 3];
pub type Rgba = [u8; 4];

const TOP_COLOR: Rgb = [42, 76, 178];
const BOTTOM_COLOR: Rgb = [82, 142, 255];
const ACCENT_COLOR: Rgb = [120, 196, 255];
const DIAGONAL_COLOR: Rgb = [34, 58, 148];

pub const SHADOW_COLOR: Rgba = [12, 26, 64, 160];
pub const GLYPH_COLOR: Rgba = [250, 252, 255, 255];

/// Weight of the radial glow at the canvas center.
const GLOW_STRENGTH: f64 = 0.35;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise blend of two colors, rounding halves to even.
fn mix_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let mut out = [0u8; 3];
    for (channel, (&from, &to)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        // t is always within [0, 1], so the result stays within the channel range
        *channel = lerp(from as f64, to as f64, t).round_ties_even() as u8;
    }
    out
}

fn point_segment_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    if dx == 0.0 && dy == 0.0 {
        return (px - ax).hypot(py - ay);
    }
    let t = (((px - ax) * dx + (py - ay) * dy) / (dx * dx + dy * dy)).clamp(0.0, 1.0);
    let vx = ax + dx * t;
    let vy = ay + dy * t;
    (px - vx).hypot(py - vy)
}

/// Glyph proportions, all derived from the canvas size.
struct GlyphGeometry {
    size: f64,
    margin: f64,
    top: f64,
    bottom: f64,
    stroke: f64,
}

impl GlyphGeometry {
    fn new(size: u32) -> Self {
        let size = size as f64;
        Self {
            size,
            margin: size * 0.18,
            top: size * 0.18,
            bottom: size - size * 0.18,
            stroke: size * 0.12,
        }
    }

    fn in_vertical_strokes(&self, x: f64, y: f64) -> bool {
        if y < self.top || y > self.bottom {
            return false;
        }
        let left = self.margin;
        let right = self.size - self.margin - self.stroke;
        (left <= x && x <= left + self.stroke) || (right <= x && x <= right + self.stroke)
    }

    fn in_diagonals(&self, x: f64, y: f64) -> bool {
        let peak_x = self.size / 2.0;
        let peak_y = self.top + self.stroke * 0.15;
        let left_start = self.margin + self.stroke * 0.25;
        let right_start = self.size - self.margin - self.stroke * 0.25;
        let radius = self.stroke * 0.55;

        [left_start, right_start].iter().any(|&start_x| {
            point_segment_distance(x, y, start_x, self.bottom, peak_x, peak_y) <= radius
        })
    }
}

/// Hit-test the glyph at the center of the (possibly fractional) pixel `(px, py)`.
pub fn is_glyph(px: f64, py: f64, size: u32) -> bool {
    let extent = size as f64;
    if px < 0.0 || py < 0.0 || px >= extent || py >= extent {
        return false;
    }

    let geometry = GlyphGeometry::new(size);
    let x = px + 0.5;
    let y = py + 0.5;
    geometry.in_vertical_strokes(x, y) || geometry.in_diagonals(x, y)
}

/// Layered background: vertical gradient, then a center glow, then a diagonal tint.
pub fn background_color(x: u32, y: u32, size: u32) -> Rgb {
    let span = size.saturating_sub(1) as f64;
    let (xf, yf) = (x as f64, y as f64);

    let vertical_t = yf / span.max(1.0);
    let base = mix_color(TOP_COLOR, BOTTOM_COLOR, vertical_t);

    let center = span / 2.0;
    let dist = (xf - center).hypot(yf - center) / (SQRT_2 * size as f64 / 2.0);
    let glow = (1.0 - dist).max(0.0);
    let with_glow = mix_color(base, ACCENT_COLOR, GLOW_STRENGTH * glow);

    let diagonal_t = (xf + (span - yf)) / (2.0 * span).max(1.0);
    mix_color(DIAGONAL_COLOR, with_glow, diagonal_t)
}

/// Offset of the drop shadow along both axes, never less than one pixel.
pub fn shadow_offset(size: u32) -> f64 {
    (size as f64 * 0.04).max(1.0)
}

/// Final RGBA color of pixel `(x, y)` on a `size`×`size` canvas.
///
/// The shadow is tested first and wins wherever it overlaps the glyph.
pub fn pixel_color(x: u32, y: u32, size: u32) -> Rgba {
    let offset = shadow_offset(size);
    if is_glyph(x as f64 - offset, y as f64 - offset, size) {
        return SHADOW_COLOR;
    }
    if is_glyph(x as f64, y as f64, size) {
        return GLYPH_COLOR;
    }
    let [r, g, b] = background_color(x, y, size);
    [r, g, b, 255]
}

/// One scanline of packed RGBA bytes for row `y`.
pub fn scanline(y: u32, size: u32) -> Vec<u8> {
    (0..size).flat_map(|x| pixel_color(x, y, size)).collect()
}

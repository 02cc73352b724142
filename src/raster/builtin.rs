//! Procedural rasterizer for art glyphs.
//!
//! Box-drawing, block and shade glyphs are drawn as rectangles sized to the
//! exact cell, so adjacent cells join without the seams a font would leave.
//! The geometric shapes from the art set are filled from simple predicates
//! with 4×4 supersampling.
//!
//! Handled: U+2500..=U+259F plus the shapes listed in the glyph classifier.

use super::GlyphMask;

/// Rasterize `ch` into a `width × height` cell mask, if it is handled here.
#[must_use]
pub fn rasterize(ch: char, width: u32, height: u32) -> Option<GlyphMask> {
    let w = width.max(1);
    let h = height.max(1);
    let mut canvas = Canvas::new(w, h);

    match ch as u32 {
        0x2500..=0x257F => draw_box(&mut canvas, ch as u32),
        0x2580..=0x259F => draw_block(&mut canvas, ch as u32),
        _ => draw_shape(&mut canvas, ch)?,
    }
    Some(canvas.into_mask())
}

// ---------------------------------------------------------------------------
// Coverage canvas
// ---------------------------------------------------------------------------

struct Canvas {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; width as usize * height as usize],
        }
    }

    fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64) {
        let x0 = x.clamp(0, i64::from(self.width));
        let y0 = y.clamp(0, i64::from(self.height));
        let x1 = (x + w).clamp(0, i64::from(self.width));
        let y1 = (y + h).clamp(0, i64::from(self.height));
        for row in y0..y1 {
            let start = (row * i64::from(self.width)) as usize;
            self.coverage[start + x0 as usize..start + x1 as usize].fill(255);
        }
    }

    /// Horizontal stroke centred on row `cy`, spanning columns `x0..=x1`.
    fn hline(&mut self, cy: i64, x0: i64, x1: i64, stroke: i64) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        self.fill_rect(x0, cy - stroke / 2, x1 - x0 + 1, stroke);
    }

    /// Vertical stroke centred on column `cx`, spanning rows `y0..=y1`.
    fn vline(&mut self, cx: i64, y0: i64, y1: i64, stroke: i64) {
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        self.fill_rect(cx - stroke / 2, y0, stroke, y1 - y0 + 1);
    }

    /// Fill every pixel whose 4×4 subsamples satisfy `inside`, with coverage
    /// proportional to the hits. Coordinates are in pixels.
    fn fill_with(&mut self, inside: impl Fn(f32, f32) -> bool) {
        const SUB: u32 = 4;
        for py in 0..self.height {
            for px in 0..self.width {
                let mut hits = 0u32;
                for sy in 0..SUB {
                    for sx in 0..SUB {
                        let x = px as f32 + (sx as f32 + 0.5) / SUB as f32;
                        let y = py as f32 + (sy as f32 + 0.5) / SUB as f32;
                        if inside(x, y) {
                            hits += 1;
                        }
                    }
                }
                let idx = (py * self.width + px) as usize;
                self.coverage[idx] = (hits * 255 / (SUB * SUB)) as u8;
            }
        }
    }

    /// Ordered dither: `level` of every 4 pixels in a 2×2 tile are set.
    fn dither(&mut self, level: u8) {
        for py in 0..self.height {
            for px in 0..self.width {
                let rank = match (px % 2, py % 2) {
                    (0, 0) => 0,
                    (1, 1) => 1,
                    (1, 0) => 2,
                    _ => 3,
                };
                if rank < level {
                    self.coverage[(py * self.width + px) as usize] = 255;
                }
            }
        }
    }

    fn into_mask(self) -> GlyphMask {
        GlyphMask {
            left: 0,
            top: 0,
            width: self.width,
            height: self.height,
            coverage: self.coverage,
        }
    }
}

// ---------------------------------------------------------------------------
// Box drawing (U+2500..=U+257F)
// ---------------------------------------------------------------------------

const NONE: u8 = 0;
const LIGHT: u8 = 1;
const HEAVY: u8 = 2;
const DOUBLE: u8 = 3;

/// Arm weights in the order right, down, left, up.
#[derive(Clone, Copy, Default)]
struct Arms {
    right: u8,
    down: u8,
    left: u8,
    up: u8,
}

impl Arms {
    const fn new(right: u8, down: u8, left: u8, up: u8) -> Self {
        Self {
            right,
            down,
            left,
            up,
        }
    }

    const fn has_double(self) -> bool {
        self.right == DOUBLE || self.down == DOUBLE || self.left == DOUBLE || self.up == DOUBLE
    }
}

/// Corners, tees and crosses U+250C..=U+254B as (right, down, left, up).
#[rustfmt::skip]
static JUNCTIONS: [(u8, u8, u8, u8); 64] = [
    // ┌ ┍ ┎ ┏ ┐ ┑ ┒ ┓
    (1,1,0,0), (2,1,0,0), (1,2,0,0), (2,2,0,0), (0,1,1,0), (0,1,2,0), (0,2,1,0), (0,2,2,0),
    // └ ┕ ┖ ┗ ┘ ┙ ┚ ┛
    (1,0,0,1), (2,0,0,1), (1,0,0,2), (2,0,0,2), (0,0,1,1), (0,0,2,1), (0,0,1,2), (0,0,2,2),
    // ├ ┝ ┞ ┟ ┠ ┡ ┢ ┣
    (1,1,0,1), (2,1,0,1), (1,1,0,2), (1,2,0,1), (1,2,0,2), (2,1,0,2), (2,2,0,1), (2,2,0,2),
    // ┤ ┥ ┦ ┧ ┨ ┩ ┪ ┫
    (0,1,1,1), (0,1,2,1), (0,1,1,2), (0,2,1,1), (0,2,1,2), (0,1,2,2), (0,2,2,1), (0,2,2,2),
    // ┬ ┭ ┮ ┯ ┰ ┱ ┲ ┳
    (1,1,1,0), (1,1,2,0), (2,1,1,0), (2,1,2,0), (1,2,1,0), (1,2,2,0), (2,2,1,0), (2,2,2,0),
    // ┴ ┵ ┶ ┷ ┸ ┹ ┺ ┻
    (1,0,1,1), (1,0,2,1), (2,0,1,1), (2,0,2,1), (1,0,1,2), (1,0,2,2), (2,0,1,2), (2,0,2,2),
    // ┼ ┽ ┾ ┿ ╀ ╁ ╂ ╃
    (1,1,1,1), (1,1,2,1), (2,1,1,1), (2,1,2,1), (1,1,1,2), (1,2,1,1), (1,2,1,2), (1,1,2,2),
    // ╄ ╅ ╆ ╇ ╈ ╉ ╊ ╋
    (2,1,1,2), (1,2,2,1), (2,2,1,1), (2,1,2,2), (2,2,2,1), (1,2,2,2), (2,2,1,2), (2,2,2,2),
];

/// Double-line set U+2550..=U+256C as (right, down, left, up).
#[rustfmt::skip]
static DOUBLES: [(u8, u8, u8, u8); 29] = [
    (3,0,3,0), // ═
    (0,3,0,3), // ║
    (3,1,0,0), // ╒
    (1,3,0,0), // ╓
    (3,3,0,0), // ╔
    (0,1,3,0), // ╕
    (0,3,1,0), // ╖
    (0,3,3,0), // ╗
    (3,0,0,1), // ╘
    (1,0,0,3), // ╙
    (3,0,0,3), // ╚
    (0,0,3,1), // ╛
    (0,0,1,3), // ╜
    (0,0,3,3), // ╝
    (3,1,0,1), // ╞
    (1,3,0,3), // ╟
    (3,3,0,3), // ╠
    (0,1,3,1), // ╡
    (0,3,1,3), // ╢
    (0,3,3,3), // ╣
    (3,1,3,0), // ╤
    (1,3,1,0), // ╥
    (3,3,3,0), // ╦
    (3,0,3,1), // ╧
    (1,0,1,3), // ╨
    (3,0,3,3), // ╩
    (3,1,3,1), // ╪
    (1,3,1,3), // ╫
    (3,3,3,3), // ╬
];

fn box_arms(cp: u32) -> Arms {
    let from = |(r, d, l, u): (u8, u8, u8, u8)| Arms::new(r, d, l, u);
    match cp {
        0x2500 => Arms::new(LIGHT, NONE, LIGHT, NONE),
        0x2501 => Arms::new(HEAVY, NONE, HEAVY, NONE),
        0x2502 => Arms::new(NONE, LIGHT, NONE, LIGHT),
        0x2503 => Arms::new(NONE, HEAVY, NONE, HEAVY),
        0x250C..=0x254B => from(JUNCTIONS[(cp - 0x250C) as usize]),
        0x2550..=0x256C => from(DOUBLES[(cp - 0x2550) as usize]),
        // Rounded corners are drawn square.
        0x256D => Arms::new(LIGHT, LIGHT, NONE, NONE),
        0x256E => Arms::new(NONE, LIGHT, LIGHT, NONE),
        0x256F => Arms::new(NONE, NONE, LIGHT, LIGHT),
        0x2570 => Arms::new(LIGHT, NONE, NONE, LIGHT),
        0x2574 => Arms::new(NONE, NONE, LIGHT, NONE),
        0x2575 => Arms::new(NONE, NONE, NONE, LIGHT),
        0x2576 => Arms::new(LIGHT, NONE, NONE, NONE),
        0x2577 => Arms::new(NONE, LIGHT, NONE, NONE),
        0x2578 => Arms::new(NONE, NONE, HEAVY, NONE),
        0x2579 => Arms::new(NONE, NONE, NONE, HEAVY),
        0x257A => Arms::new(HEAVY, NONE, NONE, NONE),
        0x257B => Arms::new(NONE, HEAVY, NONE, NONE),
        0x257C => Arms::new(HEAVY, NONE, LIGHT, NONE),
        0x257D => Arms::new(NONE, HEAVY, NONE, LIGHT),
        0x257E => Arms::new(LIGHT, NONE, HEAVY, NONE),
        0x257F => Arms::new(NONE, LIGHT, NONE, HEAVY),
        _ => Arms::default(),
    }
}

/// Stroke widths for a cell: (light, heavy).
fn strokes(w: u32, h: u32) -> (i64, i64) {
    let light = (f64::from(w.min(h)) / 8.0).round().max(1.0) as i64;
    (light, light * 2)
}

fn draw_box(canvas: &mut Canvas, cp: u32) {
    let (light, _) = strokes(canvas.width, canvas.height);
    match cp {
        0x2504..=0x250B => {
            let heavy = cp % 2 == 1;
            let segments = if cp < 0x2508 { 3 } else { 4 };
            draw_dashed(canvas, (cp - 0x2504) % 4 >= 2, heavy, segments);
        }
        0x254C..=0x254F => draw_dashed(canvas, cp >= 0x254E, cp % 2 == 1, 2),
        0x2571 => draw_diagonal(canvas, true, false, light),
        0x2572 => draw_diagonal(canvas, false, true, light),
        0x2573 => draw_diagonal(canvas, true, true, light),
        _ => {
            let arms = box_arms(cp);
            if arms.has_double() {
                draw_double_junction(canvas, arms);
            } else {
                draw_junction(canvas, arms);
            }
        }
    }
}

fn weight_stroke(weight: u8, light: i64, heavy: i64) -> i64 {
    match weight {
        NONE => 0,
        HEAVY => heavy,
        _ => light,
    }
}

fn draw_junction(canvas: &mut Canvas, arms: Arms) {
    let (w, h) = (i64::from(canvas.width), i64::from(canvas.height));
    let (light, heavy) = strokes(canvas.width, canvas.height);
    let (cx, cy) = (w / 2, h / 2);
    let h_stroke = weight_stroke(arms.left.max(arms.right), light, heavy);
    let v_stroke = weight_stroke(arms.up.max(arms.down), light, heavy);

    if arms.left != NONE {
        let s = weight_stroke(arms.left, light, heavy);
        canvas.hline(cy, 0, cx + v_stroke / 2, s);
    }
    if arms.right != NONE {
        let s = weight_stroke(arms.right, light, heavy);
        canvas.hline(cy, cx - v_stroke / 2, w - 1, s);
    }
    if arms.up != NONE {
        let s = weight_stroke(arms.up, light, heavy);
        canvas.vline(cx, 0, cy + h_stroke / 2, s);
    }
    if arms.down != NONE {
        let s = weight_stroke(arms.down, light, heavy);
        canvas.vline(cx, cy - h_stroke / 2, h - 1, s);
    }
}

/// Double lines sit `off` pixels either side of the centre line. Where a
/// double arm meets a perpendicular double arm, the outer line turns the
/// corner and the inner line stops at the inner rail.
fn draw_double_junction(canvas: &mut Canvas, arms: Arms) {
    let (w, h) = (i64::from(canvas.width), i64::from(canvas.height));
    let (light, _) = strokes(canvas.width, canvas.height);
    let off = light;
    let (cx, cy) = (w / 2, h / 2);
    let h_double = arms.left == DOUBLE || arms.right == DOUBLE;
    let v_double = arms.up == DOUBLE || arms.down == DOUBLE;

    // Horizontal rails: upper at cy - off, lower at cy + off.
    if arms.right == DOUBLE {
        let upper = if arms.up == DOUBLE { cx + off } else { cx - off };
        let lower = if arms.down == DOUBLE { cx + off } else { cx - off };
        canvas.hline(cy - off, upper, w - 1, light);
        canvas.hline(cy + off, lower, w - 1, light);
    }
    if arms.left == DOUBLE {
        let upper = if arms.up == DOUBLE { cx - off } else { cx + off };
        let lower = if arms.down == DOUBLE { cx - off } else { cx + off };
        canvas.hline(cy - off, 0, upper, light);
        canvas.hline(cy + off, 0, lower, light);
    }
    // Vertical rails: left at cx - off, right at cx + off.
    if arms.down == DOUBLE {
        let left = if arms.left == DOUBLE { cy + off } else { cy - off };
        let right = if arms.right == DOUBLE { cy + off } else { cy - off };
        canvas.vline(cx - off, left, h - 1, light);
        canvas.vline(cx + off, right, h - 1, light);
    }
    if arms.up == DOUBLE {
        let left = if arms.left == DOUBLE { cy - off } else { cy + off };
        let right = if arms.right == DOUBLE { cy - off } else { cy + off };
        canvas.vline(cx - off, 0, left, light);
        canvas.vline(cx + off, 0, right, light);
    }

    // Single arms reach across the double rails they meet.
    let reach_v = if h_double { off } else { 0 };
    let reach_h = if v_double { off } else { 0 };
    if arms.right == LIGHT {
        canvas.hline(cy, cx - reach_h, w - 1, light);
    }
    if arms.left == LIGHT {
        canvas.hline(cy, 0, cx + reach_h, light);
    }
    if arms.down == LIGHT {
        canvas.vline(cx, cy - reach_v, h - 1, light);
    }
    if arms.up == LIGHT {
        canvas.vline(cx, 0, cy + reach_v, light);
    }
}

fn draw_dashed(canvas: &mut Canvas, vertical: bool, heavy: bool, segments: i64) {
    let (w, h) = (i64::from(canvas.width), i64::from(canvas.height));
    let (light, heavy_stroke) = strokes(canvas.width, canvas.height);
    let stroke = if heavy { heavy_stroke } else { light };
    let length = if vertical { h } else { w };
    let pitch = (length / segments).max(1);
    let dash = (pitch * 2 / 3).max(1);

    for i in 0..segments {
        let start = i * pitch;
        let end = (start + dash - 1).min(length - 1);
        if vertical {
            canvas.vline(w / 2, start, end, stroke);
        } else {
            canvas.hline(h / 2, start, end, stroke);
        }
    }
}

fn draw_diagonal(canvas: &mut Canvas, rising: bool, falling: bool, stroke: i64) {
    let (w, h) = (canvas.width as f32, canvas.height as f32);
    let len = w.hypot(h);
    let half = stroke as f32 / 2.0 + 0.25;
    canvas.fill_with(|x, y| {
        // Distance from (x, y) to each diagonal of the cell.
        let falling_dist = (h * x - w * y).abs() / len;
        let rising_dist = (h * x + w * y - w * h).abs() / len;
        (rising && rising_dist <= half) || (falling && falling_dist <= half)
    });
}

// ---------------------------------------------------------------------------
// Block elements (U+2580..=U+259F)
// ---------------------------------------------------------------------------

fn draw_block(canvas: &mut Canvas, cp: u32) {
    let (w, h) = (i64::from(canvas.width), i64::from(canvas.height));
    let eighths = |total: i64, n: i64| (total * n + 4) / 8;

    match cp {
        0x2580 => canvas.fill_rect(0, 0, w, h / 2),
        // ▁ ▂ ▃ ▄ ▅ ▆ ▇ █: lower n/8
        0x2581..=0x2588 => {
            let n = i64::from(cp - 0x2580);
            let rows = eighths(h, n);
            canvas.fill_rect(0, h - rows, w, rows);
        }
        // ▉ ▊ ▋ ▌ ▍ ▎ ▏: left 7/8 .. 1/8
        0x2589..=0x258F => {
            let n = 8 - i64::from(cp - 0x2588);
            canvas.fill_rect(0, 0, eighths(w, n), h);
        }
        0x2590 => canvas.fill_rect(w / 2, 0, w - w / 2, h),
        0x2591 => canvas.dither(1),
        0x2592 => canvas.dither(2),
        0x2593 => canvas.dither(3),
        0x2594 => canvas.fill_rect(0, 0, w, eighths(h, 1)),
        0x2595 => {
            let cols = eighths(w, 1);
            canvas.fill_rect(w - cols, 0, cols, h);
        }
        0x2596..=0x259F => {
            let (hw, hh) = (w / 2, h / 2);
            let bits = quadrants(cp);
            if bits & TL != 0 {
                canvas.fill_rect(0, 0, hw, hh);
            }
            if bits & TR != 0 {
                canvas.fill_rect(hw, 0, w - hw, hh);
            }
            if bits & BL != 0 {
                canvas.fill_rect(0, hh, hw, h - hh);
            }
            if bits & BR != 0 {
                canvas.fill_rect(hw, hh, w - hw, h - hh);
            }
        }
        _ => {}
    }
}

const TL: u8 = 0b0001;
const TR: u8 = 0b0010;
const BL: u8 = 0b0100;
const BR: u8 = 0b1000;

const fn quadrants(cp: u32) -> u8 {
    match cp {
        0x2596 => BL,
        0x2597 => BR,
        0x2598 => TL,
        0x2599 => TL | BL | BR,
        0x259A => TL | BR,
        0x259B => TL | TR | BL,
        0x259C => TL | TR | BR,
        0x259D => TR,
        0x259E => TR | BL,
        0x259F => TR | BL | BR,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Geometric shapes
// ---------------------------------------------------------------------------

fn draw_shape(canvas: &mut Canvas, ch: char) -> Option<()> {
    let (w, h) = (canvas.width as f32, canvas.height as f32);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let radius = w * 0.35;
    let ring = (w / 8.0).max(1.0);

    match ch {
        '■' => {
            let half = w * 0.3;
            canvas.fill_with(|x, y| (x - cx).abs() <= half && (y - cy).abs() <= half);
        }
        '▬' => canvas.fill_with(|x, y| x >= w * 0.05 && x <= w * 0.95 && y >= h * 0.55 && y <= h * 0.8),
        '▲' | '▼' => {
            let (top, bottom) = (h * 0.25, h * 0.75);
            let half_base = w * 0.45;
            let up = ch == '▲';
            canvas.fill_with(|x, y| {
                if y < top || y > bottom {
                    return false;
                }
                let t = if up { (y - top) / (bottom - top) } else { (bottom - y) / (bottom - top) };
                (x - cx).abs() <= half_base * t
            });
        }
        '►' | '◄' => {
            let (left, right) = (w * 0.1, w * 0.9);
            let half_base = h * 0.3;
            let pointing_right = ch == '►';
            canvas.fill_with(|x, y| {
                if x < left || x > right {
                    return false;
                }
                let t = if pointing_right { (right - x) / (right - left) } else { (x - left) / (right - left) };
                (y - cy).abs() <= half_base * t
            });
        }
        '◆' => {
            let (rx, ry) = (w * 0.45, h * 0.3);
            canvas.fill_with(|x, y| (x - cx).abs() / rx + (y - cy).abs() / ry <= 1.0);
        }
        '●' => canvas.fill_with(|x, y| (x - cx).hypot(y - cy) <= radius),
        '○' => canvas.fill_with(|x, y| {
            let d = (x - cx).hypot(y - cy);
            d <= radius && d >= radius - ring
        }),
        '◘' => canvas.fill_with(|x, y| (x - cx).hypot(y - cy) > radius * 0.8),
        '◙' => canvas.fill_with(|x, y| {
            let d = (x - cx).hypot(y - cy);
            d > radius || d < radius - ring
        }),
        _ => return None,
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inked(mask: &GlyphMask) -> usize {
        mask.coverage.iter().filter(|&&c| c > 0).count()
    }

    fn at(mask: &GlyphMask, x: u32, y: u32) -> u8 {
        mask.coverage[(y * mask.width + x) as usize]
    }

    #[test]
    fn test_plain_text_not_handled() {
        assert!(rasterize('A', 8, 14).is_none());
        assert!(rasterize(' ', 8, 14).is_none());
        assert!(rasterize('□', 8, 14).is_none());
    }

    #[test]
    fn test_full_block_fills_cell() {
        let mask = rasterize('█', 8, 14).unwrap();
        assert_eq!((mask.width, mask.height), (8, 14));
        assert!(mask.coverage.iter().all(|&c| c == 255));
    }

    #[test]
    fn test_half_blocks() {
        let upper = rasterize('▀', 8, 14).unwrap();
        assert_eq!(at(&upper, 0, 0), 255);
        assert_eq!(at(&upper, 0, 13), 0);
        let lower = rasterize('▄', 8, 14).unwrap();
        assert_eq!(at(&lower, 0, 0), 0);
        assert_eq!(at(&lower, 7, 13), 255);
        let left = rasterize('▌', 8, 14).unwrap();
        assert_eq!(at(&left, 0, 5), 255);
        assert_eq!(at(&left, 7, 5), 0);
        let right = rasterize('▐', 8, 14).unwrap();
        assert_eq!(at(&right, 0, 5), 0);
        assert_eq!(at(&right, 7, 5), 255);
    }

    #[test]
    fn test_shades_increase_in_density() {
        let light = inked(&rasterize('░', 8, 14).unwrap());
        let medium = inked(&rasterize('▒', 8, 14).unwrap());
        let dark = inked(&rasterize('▓', 8, 14).unwrap());
        assert_eq!(light, 28);
        assert_eq!(medium, 56);
        assert_eq!(dark, 84);
    }

    #[test]
    fn test_horizontal_line_spans_width() {
        let mask = rasterize('─', 8, 14).unwrap();
        for x in 0..8 {
            assert_eq!(at(&mask, x, 7), 255, "column {x}");
        }
        assert_eq!(at(&mask, 3, 0), 0);
    }

    #[test]
    fn test_vertical_line_spans_height() {
        let mask = rasterize('│', 8, 14).unwrap();
        for y in 0..14 {
            assert_eq!(at(&mask, 4, y), 255, "row {y}");
        }
    }

    #[test]
    fn test_double_corner_has_gap_between_rails() {
        let mask = rasterize('╔', 8, 14).unwrap();
        // Outer rail row 6 from the outer vertical to the right edge.
        assert_eq!(at(&mask, 3, 6), 255);
        assert_eq!(at(&mask, 7, 6), 255);
        // Inner rail row 8 starts at the inner vertical.
        assert_eq!(at(&mask, 5, 8), 255);
        assert_eq!(at(&mask, 4, 8), 0);
        // Gap between the horizontal rails.
        assert_eq!(at(&mask, 7, 7), 0);
        // Nothing above-left of the corner.
        assert_eq!(at(&mask, 0, 0), 0);
    }

    #[test]
    fn test_heavy_is_thicker_than_light() {
        let light = inked(&rasterize('─', 16, 32).unwrap());
        let heavy = inked(&rasterize('━', 16, 32).unwrap());
        assert!(heavy > light);
    }

    #[test]
    fn test_every_box_and_block_glyph_inks() {
        for cp in 0x2500..=0x259F_u32 {
            let ch = char::from_u32(cp).unwrap();
            let mask = rasterize(ch, 8, 14).unwrap();
            assert!(inked(&mask) > 0, "U+{cp:04X} drew nothing");
        }
    }

    #[test]
    fn test_shapes_ink_inside_cell() {
        for ch in ['■', '▬', '▲', '►', '▼', '◄', '◆', '○', '●', '◘', '◙'] {
            let mask = rasterize(ch, 8, 14).unwrap();
            let count = inked(&mask);
            assert!(count > 0 && count < 8 * 14, "{ch} inked {count}");
        }
    }

    #[test]
    fn test_tiny_cells_do_not_panic() {
        for cp in 0x2500..=0x259F_u32 {
            let ch = char::from_u32(cp).unwrap();
            let _ = rasterize(ch, 1, 1);
            let _ = rasterize(ch, 0, 0);
        }
    }
}

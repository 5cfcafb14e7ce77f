//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - samples: `o`
//! - curves: one glyph per curve from `CURVE_GLYPHS`, listed in a legend
//!   under the grid

use crate::plot::{PlotData, pad_range};

/// Glyphs assigned to curves in order (wrapping around).
pub const CURVE_GLYPHS: [char; 8] = ['-', '*', '+', '=', '~', '#', '%', '@'];

const SAMPLE_GLYPH: char = 'o';

/// Render the plot into a `height`-row grid of `width` columns, plus header and legend.
pub fn render_ascii_plot(data: &PlotData, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = data.x_bounds().unwrap_or((0.0, 1.0));
    let (y_min, y_max) = data.y_bounds().unwrap_or((-1.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    let frame = Frame {
        x_min,
        x_max,
        y_min,
        y_max,
        width,
        height,
    };

    // Curves first (so samples overlay); earlier curves win shared cells.
    for (i, curve) in data.curves.iter().enumerate() {
        draw_curve(&mut grid, &curve.points, &frame, glyph(i));
    }

    for &(x, y) in &data.scatter {
        if !frame.contains_y(y) {
            continue;
        }
        grid[frame.row(y)][frame.col(x)] = SAMPLE_GLYPH;
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    for (i, curve) in data.curves.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", glyph(i), curve.label));
    }
    if !data.scatter.is_empty() {
        out.push_str(&format!("  {SAMPLE_GLYPH} samples\n"));
    }

    out
}

fn glyph(index: usize) -> char {
    CURVE_GLYPHS[index % CURVE_GLYPHS.len()]
}

struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    width: usize,
    height: usize,
}

impl Frame {
    fn contains_y(&self, y: f64) -> bool {
        y.is_finite() && y >= self.y_min && y <= self.y_max
    }

    fn col(&self, x: f64) -> usize {
        let u = ((x - self.x_min) / (self.x_max - self.x_min)).clamp(0.0, 1.0);
        (u * (self.width as f64 - 1.0)).round() as usize
    }

    fn row(&self, y: f64) -> usize {
        let u = ((y - self.y_min) / (self.y_max - self.y_min)).clamp(0.0, 1.0);
        // y=top is max -> row 0
        (self.height as f64 - 1.0 - (u * (self.height as f64 - 1.0))).round() as usize
    }
}

/// Connect consecutive curve points. Points outside the y frame break the line.
fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], frame: &Frame, ch: char) {
    let mut prev = None;
    for &(x, y) in curve {
        if !frame.contains_y(y) {
            prev = None;
            continue;
        }
        let cell = (frame.col(x), frame.row(y));
        let from = prev.unwrap_or(cell);
        for (col, row) in line_cells(from, cell) {
            if grid[row][col] == ' ' {
                grid[row][col] = ch;
            }
        }
        prev = Some(cell);
    }
}

/// Cells on the segment `from -> to` (both ends included), one per step along
/// the longer axis.
fn line_cells(from: (usize, usize), to: (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let (c0, r0) = (from.0 as f64, from.1 as f64);
    let (dc, dr) = (to.0 as f64 - c0, to.1 as f64 - r0);
    let steps = from.0.abs_diff(to.0).max(from.1.abs_diff(to.1));

    (0..=steps).map(move |i| {
        let u = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
        ((c0 + u * dc).round() as usize, (r0 + u * dr).round() as usize)
    })
}

//! Character-cell canvas: the terminal implementation of `Surface`.

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use tp3d_core::{Rgb, Surface};

/// Glyph used for painted cells; color carries the face identity.
const FILL_GLYPH: char = '█';

/// Default outline color, readable on dark terminals.
pub const DEFAULT_STROKE: Rgb = Rgb::new(0xD0, 0xD0, 0xD0);

#[derive(Debug, Clone, Copy)]
struct Cell {
    glyph: char,
    color: Rgb,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    color: Rgb::new(0, 0, 0),
};

/// A width x height grid of colored cells driven through the `Surface`
/// commands. There is no depth buffer: a later fill overwrites an
/// earlier one, which is exactly the painter contract.
pub struct CellCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    path: Vec<(f32, f32)>,
    closed: bool,
    fill_style: Rgb,
    stroke_style: Rgb,
}

impl CellCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
            path: Vec::new(),
            closed: false,
            fill_style: Rgb::new(0xFF, 0xFF, 0xFF),
            stroke_style: DEFAULT_STROKE,
        }
    }

    pub fn with_stroke(mut self, stroke: Rgb) -> Self {
        self.stroke_style = stroke;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Color of a painted cell, if any. Used by tests and tools.
    pub fn painted(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let cell = self.cells[y * self.width + x];
        (cell.glyph != ' ').then_some(cell.color)
    }

    fn set_cell(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell {
            glyph: FILL_GLYPH,
            color,
        };
    }

    /// Scanline-fill one triangle: walk the bounding box and test each
    /// cell center against the three edge functions.
    fn raster_triangle(&mut self, v0: (f32, f32), v1: (f32, f32), v2: (f32, f32), color: Rgb) {
        let min_x = (v0.0.min(v1.0).min(v2.0).floor() as i32).max(0);
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0.1.min(v1.1).min(v2.1).floor() as i32).max(0);
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(v1, v2, p);
                let w1 = edge(v2, v0, p);
                let w2 = edge(v0, v1, p);
                // Faces are not culled, so a triangle may arrive with
                // either winding; accept both.
                let inside = (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0)
                    || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);
                if inside {
                    self.set_cell(x, y, color);
                }
            }
        }
    }

    /// Bresenham line between two path points.
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb) {
        let (mut x0, mut y0) = (from.0.round() as i32, from.1.round() as i32);
        let (x1, y1) = (to.0.round() as i32, to.1.round() as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set_cell(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Queue the grid to a terminal writer, row by row.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                if cell.glyph == ' ' {
                    writer.queue(Print(' '))?;
                } else {
                    writer.queue(SetForegroundColor(Color::Rgb {
                        r: cell.color.r,
                        g: cell.color.g,
                        b: cell.color.b,
                    }))?;
                    writer.queue(Print(cell.glyph))?;
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for CellCanvas {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let x0 = x.max(0.0).floor() as usize;
        let y0 = y.max(0.0).floor() as usize;
        let x1 = (((x + width).ceil()).max(0.0) as usize).min(self.width);
        let y1 = (((y + height).ceil()).max(0.0) as usize).min(self.height);
        for row in y0..y1 {
            for col in x0..x1 {
                self.cells[row * self.width + col] = BLANK;
            }
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
    }

    // Only single-subpath paths are needed here, so move_to simply
    // starts the point list.
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push((x, y));
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn set_fill_style(&mut self, color: Rgb) {
        self.fill_style = color;
    }

    fn fill(&mut self) {
        if self.path.len() < 3 {
            return;
        }
        // Fan triangulation from the first path point; enough for the
        // convex paths the renderer emits.
        let points = self.path.clone();
        let color = self.fill_style;
        let first = points[0];
        for pair in points[1..].windows(2) {
            self.raster_triangle(first, pair[0], pair[1], color);
        }
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        let points = self.path.clone();
        let color = self.stroke_style;
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], color);
        }
        if self.closed {
            self.draw_line(points[points.len() - 1], points[0], color);
        }
    }
}

/// Signed-area edge function used by the rasterizer.
fn edge(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    (c.0 - a.0) * (b.1 - a.1) - (c.1 - a.1) * (b.0 - a.0)
}

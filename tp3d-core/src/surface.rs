//! Drawing-surface capability trait and the recording fake.

use nalgebra::Point2;

/// An RGB color for fill and stroke styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Immediate-mode 2D drawing surface, in device pixel coordinates.
///
/// This is the full contract the renderer needs from a backend; anything
/// that can run these eight commands can display a frame.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    fn set_fill_style(&mut self, color: Rgb);
    fn fill(&mut self);
    fn stroke(&mut self);
}

/// Fill a triangle, then stroke its outline with the surface's current
/// stroke style. Degenerate triangles come out as thin lines or nothing;
/// they are not rejected.
pub fn fill_triangle(
    surface: &mut dyn Surface,
    p0: Point2<f32>,
    p1: Point2<f32>,
    p2: Point2<f32>,
    color: Rgb,
) {
    surface.begin_path();
    surface.move_to(p0.x, p0.y);
    surface.line_to(p1.x, p1.y);
    surface.line_to(p2.x, p2.y);
    surface.close_path();
    surface.set_fill_style(color);
    surface.fill();
    surface.stroke();
}

/// One recorded surface command.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    BeginPath,
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    ClosePath,
    SetFillStyle(Rgb),
    Fill,
    Stroke,
}

/// A surface that records every command instead of drawing. Backs the
/// renderer unit tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(SurfaceOp::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn set_fill_style(&mut self, color: Rgb) {
        self.ops.push(SurfaceOp::SetFillStyle(color));
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_triangle_command_order() {
        let mut surface = RecordingSurface::new();
        let color = Rgb::new(0x66, 0x99, 0xCC);
        fill_triangle(
            &mut surface,
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
            color,
        );
        assert_eq!(
            surface.ops,
            vec![
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo { x: 0.0, y: 0.0 },
                SurfaceOp::LineTo { x: 4.0, y: 0.0 },
                SurfaceOp::LineTo { x: 0.0, y: 4.0 },
                SurfaceOp::ClosePath,
                SurfaceOp::SetFillStyle(color),
                SurfaceOp::Fill,
                SurfaceOp::Stroke,
            ]
        );
    }
}

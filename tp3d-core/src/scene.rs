//! The per-frame renderer: clear, transform, sort, draw.

use crate::geometry::Model;
use crate::pipeline::frame_triangles;
use crate::projection::Projector;
use crate::surface::{fill_triangle, Rgb, Surface};
use crate::transform::SpinState;

/// Default face fill (`#6699CC`).
pub const DEFAULT_FILL: Rgb = Rgb::new(0x66, 0x99, 0xCC);

/// Owns everything one frame needs: the model, the spin state, the
/// projector, a uniform model scale, and the fill color.
///
/// `render` draws the current frame; `advance` steps the spin. They are
/// separate operations so the host loop decides pacing and pause.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    pub model: Model,
    pub spin: SpinState,
    pub projector: Projector,
    pub scale: f32,
    pub fill: Rgb,
}

impl FrameRenderer {
    pub fn new(model: Model, projector: Projector) -> Self {
        Self {
            model,
            spin: SpinState::default(),
            projector,
            scale: 1.0,
            fill: DEFAULT_FILL,
        }
    }

    /// Draw one frame: clear the surface, then paint the depth-sorted
    /// triangles back to front.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear_rect(0.0, 0.0, self.projector.width, self.projector.height);
        for triangle in frame_triangles(
            &self.model,
            &self.spin.orientation(),
            self.scale,
            &self.projector,
        ) {
            fill_triangle(
                surface,
                triangle.points[0],
                triangle.points[1],
                triangle.points[2],
                self.fill,
            );
        }
    }

    /// Advance the spin by one frame step.
    pub fn advance(&mut self) {
        self.spin.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn test_frame_clears_then_paints_twelve_triangles() {
        let renderer = FrameRenderer::new(Model::cube(), Projector::new(320, 200));
        let mut surface = RecordingSurface::new();
        renderer.render(&mut surface);

        assert_eq!(
            surface.ops[0],
            SurfaceOp::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 320.0,
                height: 200.0
            }
        );
        let fills = surface
            .ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Fill))
            .count();
        let strokes = surface
            .ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke))
            .count();
        assert_eq!(fills, 12);
        assert_eq!(strokes, 12);
        // 1 clear + 12 x (begin, move, 2 line, close, set-fill, fill, stroke)
        assert_eq!(surface.ops.len(), 1 + 12 * 8);
    }

    #[test]
    fn test_render_does_not_advance_spin() {
        let renderer = FrameRenderer::new(Model::cube(), Projector::new(80, 24));
        let mut surface = RecordingSurface::new();
        renderer.render(&mut surface);
        renderer.render(&mut surface);
        assert_eq!(renderer.spin.angle(), 0.0);
    }

    #[test]
    fn test_advance_accumulates_angle() {
        let mut renderer = FrameRenderer::new(Model::cube(), Projector::new(80, 24));
        renderer.spin = SpinState::new(0.02);
        for _ in 0..100 {
            renderer.advance();
        }
        assert!((renderer.spin.angle() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_fill_styles_use_configured_color() {
        let mut renderer = FrameRenderer::new(Model::cube(), Projector::new(80, 24));
        renderer.fill = Rgb::new(10, 20, 30);
        let mut surface = RecordingSurface::new();
        renderer.render(&mut surface);
        assert!(surface
            .ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::SetFillStyle(color) => Some(*color),
                _ => None,
            })
            .all(|color| color == Rgb::new(10, 20, 30)));
    }
}

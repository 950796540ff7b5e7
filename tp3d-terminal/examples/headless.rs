//! Example: run the render pipeline without a terminal.
//!
//! Renders a few frames into a recording surface and prints what the
//! renderer asked the surface to do.

use tp3d_core::{FrameRenderer, Model, Projector, RecordingSurface, SurfaceOp};

fn main() {
    let mut renderer = FrameRenderer::new(Model::cube(), Projector::new(80, 24));
    renderer.scale = 6.0;

    for frame in 0..3 {
        let mut surface = RecordingSurface::new();
        renderer.render(&mut surface);

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
        println!(
            "frame {frame}: angle {:.3}, {} surface ops, {fills} fills, {strokes} strokes",
            renderer.spin.angle(),
            surface.ops.len(),
        );

        renderer.advance();
    }
}

//! TP3D Core Library - Painter's-algorithm rendering logic
//!
//! Stateless geometry, rotation, projection, and depth-sorting for the
//! painter renderer, plus the drawing-surface trait frontends implement.

pub mod geometry;
pub mod transform;
pub mod projection;
pub mod pipeline;
pub mod surface;
pub mod scene;

// Re-export commonly used types
pub use geometry::{Face, Model};
pub use transform::{rotate_point, Orientation, SpinState};
pub use projection::Projector;
pub use pipeline::{frame_triangles, RenderTriangle};
pub use surface::{fill_triangle, RecordingSurface, Rgb, Surface, SurfaceOp};
pub use scene::{FrameRenderer, DEFAULT_FILL};

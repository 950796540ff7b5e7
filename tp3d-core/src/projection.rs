//! Fixed-distance perspective projection to screen coordinates.

use nalgebra::{Point2, Point3};

/// Default projection distance; larger values flatten the perspective.
pub const DEFAULT_DISTANCE: f32 = 400.0;

/// Denominator floor for points numerically on the camera plane.
const MIN_DENOM: f32 = 1e-4;

/// Perspective projector over a fixed-size surface.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub width: f32,
    pub height: f32,
    pub distance: f32,
}

impl Projector {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            distance: DEFAULT_DISTANCE,
        }
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    /// Perspective scale factor for a depth value: `d / (z + d)`.
    ///
    /// A point with `z + d == 0` sits on the camera plane and has no
    /// finite projection; the denominator is clamped to a signed epsilon
    /// so the result stays finite. Unreachable for the cube model at the
    /// default distance.
    pub fn scale_at(&self, z: f32) -> f32 {
        let mut denom = z + self.distance;
        if denom.abs() < MIN_DENOM {
            denom = if denom < 0.0 { -MIN_DENOM } else { MIN_DENOM };
        }
        self.distance / denom
    }

    /// Project a rotated point onto the surface, centered at
    /// `(width / 2, height / 2)`.
    pub fn project(&self, point: &Point3<f32>) -> Point2<f32> {
        let scale = self.scale_at(point.z);
        Point2::new(
            point.x * scale + self.width / 2.0,
            point.y * scale + self.height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let projector = Projector::new(800, 600);
        let projected = projector.project(&Point3::origin());
        assert_eq!(projected, Point2::new(400.0, 300.0));
    }

    #[test]
    fn test_closer_points_scale_larger() {
        let projector = Projector::new(800, 600);
        assert!(projector.scale_at(-1.0) >= projector.scale_at(1.0));
        assert!(projector.scale_at(-100.0) > projector.scale_at(100.0));
    }

    #[test]
    fn test_camera_plane_is_clamped_finite() {
        let projector = Projector::new(100, 100).with_distance(1.0);
        let projected = projector.project(&Point3::new(1.0, 1.0, -1.0));
        assert!(projected.x.is_finite() && projected.y.is_finite());
    }

    #[test]
    fn test_distance_flattens_perspective() {
        let near = Projector::new(100, 100).with_distance(4.0);
        let far = Projector::new(100, 100).with_distance(4000.0);
        // Scale spread between front and back of the cube shrinks as the
        // distance grows.
        let near_spread = near.scale_at(-1.0) - near.scale_at(1.0);
        let far_spread = far.scale_at(-1.0) - far.scale_at(1.0);
        assert!(near_spread > far_spread);
    }
}

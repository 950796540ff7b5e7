//! Spin state and the sequential Euler rotation.

use nalgebra::Point3;

/// Y and Z spin rates relative to the master angle. The differing rates
/// keep the composite tumble from looking periodic.
pub const TUMBLE_Y: f32 = 0.7;
pub const TUMBLE_Z: f32 = 1.3;

/// Default master-angle increment per frame, in radians.
pub const DEFAULT_STEP: f32 = 0.01;

/// Per-axis rotation angles for one frame, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Master spin angle plus its per-frame step.
///
/// The angle grows without a wraparound guard; the trigonometry is
/// periodic, so unbounded growth is harmless over realistic runs.
#[derive(Debug, Clone, Copy)]
pub struct SpinState {
    angle: f32,
    step: f32,
}

impl SpinState {
    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance by one frame step.
    pub fn advance(&mut self) {
        self.angle += self.step;
    }

    /// Derive the per-axis angles for the current frame.
    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.angle, TUMBLE_Y * self.angle, TUMBLE_Z * self.angle)
    }
}

impl Default for SpinState {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

/// Rotate a point about X, then Y, then Z.
///
/// Each step is the same 2D rotation pattern on the plane orthogonal to
/// its axis. For Y this sign convention is the transpose of the standard
/// right-handed matrix (+x rotates toward +z), so the rotation must stay
/// in this sequential form rather than a stock matrix composition.
pub fn rotate_point(point: &Point3<f32>, orientation: &Orientation) -> Point3<f32> {
    let (mut x, mut y, mut z) = (point.x, point.y, point.z);

    let (sin, cos) = orientation.x.sin_cos();
    (y, z) = (y * cos - z * sin, y * sin + z * cos);

    let (sin, cos) = orientation.y.sin_cos();
    (x, z) = (x * cos - z * sin, x * sin + z * cos);

    let (sin, cos) = orientation.z.sin_cos();
    (x, y) = (x * cos - y * sin, x * sin + y * cos);

    Point3::new(x, y, z)
}

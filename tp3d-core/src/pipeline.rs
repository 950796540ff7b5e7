//! Per-frame transform-and-sort: the painter's pipeline.

use nalgebra::{Point2, Point3};

use crate::geometry::Model;
use crate::projection::Projector;
use crate::transform::{rotate_point, Orientation};

/// One screen-space triangle, scored for the painter's sort.
#[derive(Debug, Clone, Copy)]
pub struct RenderTriangle {
    pub points: [Point2<f32>; 3],
    /// Mean rotated-space z of the three corners, taken before projection.
    pub depth: f32,
}

/// Build one frame's triangles: rotate the vertex template, apply the
/// uniform model scale, fan-split each quad face, score each triangle by
/// mean depth, and sort farthest-first. Back-to-front draw order is the
/// only occlusion mechanism downstream.
pub fn frame_triangles(
    model: &Model,
    orientation: &Orientation,
    scale: f32,
    projector: &Projector,
) -> Vec<RenderTriangle> {
    let rotated: Vec<Point3<f32>> = model
        .vertices
        .iter()
        .map(|vertex| rotate_point(vertex, orientation) * scale)
        .collect();

    let mut triangles = Vec::with_capacity(model.triangle_count());
    for face in &model.faces {
        for [a, b, c] in face.triangles() {
            let depth = (rotated[a].z + rotated[b].z + rotated[c].z) / 3.0;
            triangles.push(RenderTriangle {
                points: [
                    projector.project(&rotated[a]),
                    projector.project(&rotated[b]),
                    projector.project(&rotated[c]),
                ],
                depth,
            });
        }
    }

    triangles.sort_by(|t1, t2| t2.depth.total_cmp(&t1.depth));
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> Projector {
        Projector::new(640, 480)
    }

    #[test]
    fn test_twelve_triangles_sorted_back_to_front() {
        let triangles = frame_triangles(
            &Model::cube(),
            &Orientation::new(0.3, 0.21, 0.39),
            1.0,
            &projector(),
        );
        assert_eq!(triangles.len(), 12);
        for pair in triangles.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn test_unrotated_frame_matches_raw_projection() {
        let model = Model::cube();
        let proj = projector();
        let triangles =
            frame_triangles(&model, &Orientation::new(0.0, 0.0, 0.0), 1.0, &proj);

        // With no rotation and unit scale, every triangle must be the
        // raw template pushed through the same fan split and projection.
        let mut expected = Vec::new();
        for face in &model.faces {
            for [a, b, c] in face.triangles() {
                expected.push([
                    proj.project(&model.vertices[a]),
                    proj.project(&model.vertices[b]),
                    proj.project(&model.vertices[c]),
                ]);
            }
        }
        for triangle in &triangles {
            assert!(expected.iter().any(|corners| {
                corners
                    .iter()
                    .zip(triangle.points.iter())
                    .all(|(p, q)| (p - q).norm() < 1e-4)
            }));
        }
    }

    #[test]
    fn test_depth_is_mean_of_rotated_z() {
        // At zero rotation the back face (z = 1) scores 1 and sorts
        // first; the front face (z = -1) scores -1 and sorts last.
        let triangles = frame_triangles(
            &Model::cube(),
            &Orientation::new(0.0, 0.0, 0.0),
            1.0,
            &projector(),
        );
        assert!((triangles.first().unwrap().depth - 1.0).abs() < 1e-6);
        assert!((triangles.last().unwrap().depth + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_deterministic_order() {
        let orientation = Orientation::new(1.0, 0.7, 1.3);
        let first = frame_triangles(&Model::cube(), &orientation, 1.0, &projector());
        let second = frame_triangles(&Model::cube(), &orientation, 1.0, &projector());
        assert_eq!(first.len(), second.len());
        for (t1, t2) in first.iter().zip(second.iter()) {
            assert_eq!(t1.depth, t2.depth);
            assert_eq!(t1.points, t2.points);
        }
    }

    #[test]
    fn test_uniform_scale_preserves_depth_order() {
        let orientation = Orientation::new(0.8, 0.56, 1.04);
        let unscaled = frame_triangles(&Model::cube(), &orientation, 1.0, &projector());
        let scaled = frame_triangles(&Model::cube(), &orientation, 10.0, &projector());
        for (t1, t2) in unscaled.iter().zip(scaled.iter()) {
            assert!((t1.depth * 10.0 - t2.depth).abs() < 1e-3);
        }
    }
}

//! Geometry primitives: the vertex template and quad faces.

use nalgebra::Point3;

/// A quad face, stored as four indices into a model's vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [usize; 4],
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self {
            indices: [a, b, c, d],
        }
    }

    /// Split the quad into two triangles fanned from the first vertex:
    /// `(a, b, c)` and `(a, c, d)`. Only valid for planar quads, which
    /// is all the model format allows.
    pub fn triangles(&self) -> [[usize; 3]; 2] {
        let [a, b, c, d] = self.indices;
        [[a, b, c], [a, c, d]]
    }
}

/// An indexed model: an immutable vertex template plus quad faces.
///
/// The template is never mutated; each frame rotates a working copy.
#[derive(Debug, Clone)]
pub struct Model {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<Face>,
}

impl Model {
    /// Face indices must be valid for the vertex list.
    pub fn new(vertices: Vec<Point3<f32>>, faces: Vec<Face>) -> Self {
        debug_assert!(faces
            .iter()
            .flat_map(|face| face.indices)
            .all(|index| index < vertices.len()));
        Self { vertices, faces }
    }

    /// The cube model: eight corners in {-1, 1}^3, six quad faces.
    pub fn cube() -> Self {
        let vertices = vec![
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(-1.0, -1.0, 1.0),
            Point3::new(1.0, -1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, 1.0, 1.0),
        ];
        let faces = vec![
            // front/back
            Face::new(0, 1, 2, 3),
            Face::new(4, 5, 6, 7),
            // top/bottom
            Face::new(0, 1, 5, 4),
            Face::new(2, 3, 7, 6),
            // sides
            Face::new(1, 2, 6, 5),
            Face::new(0, 3, 7, 4),
        ];
        Self::new(vertices, faces)
    }

    /// Triangles produced per frame: two per quad face.
    pub fn triangle_count(&self) -> usize {
        self.faces.len() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let cube = Model::cube();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.faces.len(), 6);
        assert_eq!(cube.triangle_count(), 12);
        for vertex in &cube.vertices {
            assert_eq!(vertex.x.abs(), 1.0);
            assert_eq!(vertex.y.abs(), 1.0);
            assert_eq!(vertex.z.abs(), 1.0);
        }
    }

    #[test]
    fn test_face_indices_valid() {
        let cube = Model::cube();
        for face in &cube.faces {
            for &index in &face.indices {
                assert!(index < cube.vertices.len());
            }
        }
    }

    #[test]
    fn test_fan_triangulation() {
        let face = Face::new(0, 1, 2, 3);
        assert_eq!(face.triangles(), [[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_every_vertex_used() {
        let cube = Model::cube();
        for index in 0..cube.vertices.len() {
            assert!(cube.faces.iter().any(|face| face.indices.contains(&index)));
        }
    }
}

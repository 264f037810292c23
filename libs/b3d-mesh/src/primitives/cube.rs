//! # Cube Primitive
//!
//! Eight corners and six quads, centered on the origin.

use crate::builder::{MeshBuilder, MeshBuilderVertex, NormalPolicy};
use glam::DVec3;

/// Corner signs, in local vertex order.
const CORNERS: [[f64; 3]; 8] = [
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Quads in local vertex indices, wound so their normals point outwards.
const QUADS: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [0, 4, 5, 1],
    [0, 3, 7, 4],
    [6, 5, 4, 7],
    [6, 7, 3, 2],
    [6, 2, 1, 5],
];

impl MeshBuilder {
    /// Adds a box with the given half extents.
    ///
    /// The corners carry no normals or texture coordinates; the faces take
    /// their normals from the geometry at assembly time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use b3d_mesh::MeshBuilder;
    /// use glam::DVec3;
    ///
    /// let mut builder = MeshBuilder::new();
    /// builder.add_cube(DVec3::new(1.0, 2.0, 3.0), 1);
    /// assert_eq!(builder.vertex_count(), 8);
    /// assert_eq!(builder.face_count(), 6);
    /// ```
    pub fn add_cube(&mut self, half_extents: DVec3, line: usize) {
        let base = self.vertices.len();
        for corner in CORNERS {
            self.vertices
                .push(MeshBuilderVertex::at(DVec3::from_array(corner) * half_extents));
        }
        for quad in &QUADS {
            self.push_local_face(base, quad, NormalPolicy::UseVertexNormals, line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let mut builder = MeshBuilder::new();
        builder.add_cube(DVec3::splat(1.0), 3);
        assert_eq!(builder.vertex_count(), 8);
        assert_eq!(builder.face_count(), 6);
        assert!(builder.faces().iter().all(|face| face.vertices.len() == 4));
        assert!(builder.faces().iter().all(|face| face.line == 3));
    }

    #[test]
    fn test_cube_extents() {
        let mut builder = MeshBuilder::new();
        builder.add_cube(DVec3::new(1.0, 2.0, 3.0), 1);
        let positions: Vec<DVec3> = builder.vertices().iter().map(|v| v.position).collect();
        assert_eq!(positions[0], DVec3::new(1.0, 2.0, -3.0));
        assert_eq!(positions[6], DVec3::new(-1.0, -2.0, 3.0));
        assert!(builder.vertices().iter().all(|v| v.normal == DVec3::ZERO));
    }

    #[test]
    fn test_cube_faces_are_offset() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(MeshBuilderVertex::default());
        builder.add_vertex(MeshBuilderVertex::default());
        builder.add_cube(DVec3::ONE, 1);
        assert_eq!(builder.faces()[0].vertices, vec![2, 3, 4, 5]);
        assert_eq!(builder.faces()[5].vertices, vec![8, 4, 3, 7]);
    }

    #[test]
    fn test_cube_faces_point_outwards() {
        let mut builder = MeshBuilder::new();
        builder.add_cube(DVec3::ONE, 1);
        for face in builder.faces() {
            let p: Vec<DVec3> = face.vertices.iter().map(|&i| builder.vertices()[i].position).collect();
            let normal = (p[1] - p[0]).cross(p[2] - p[0]);
            let centroid = p.iter().copied().sum::<DVec3>() / p.len() as f64;
            assert!(normal.dot(centroid) > 0.0, "face {:?} points inwards", face.vertices);
        }
    }
}

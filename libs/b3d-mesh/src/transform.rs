//! # Affine Operators
//!
//! In-place transforms of a builder's vertices. Normals follow the
//! transform and stay unit length; unset (zero) normals stay unset.

use crate::builder::MeshBuilder;
use glam::DVec3;

/// Rotates `v` around the unit vector `axis` by the angle whose cosine and
/// sine are given (right-handed).
///
/// # Example
///
/// ```rust
/// use b3d_mesh::transform::rotate_vector;
/// use glam::DVec3;
///
/// let (sin, cos) = std::f64::consts::FRAC_PI_2.sin_cos();
/// let rotated = rotate_vector(DVec3::X, DVec3::Z, cos, sin);
/// assert!((rotated - DVec3::Y).length() < 1e-12);
/// ```
pub fn rotate_vector(v: DVec3, axis: DVec3, cos: f64, sin: f64) -> DVec3 {
    let t = 1.0 - cos;
    let DVec3 { x, y, z } = axis;
    DVec3::new(
        (t * x * x + cos) * v.x + (t * x * y - sin * z) * v.y + (t * x * z + sin * y) * v.z,
        (t * x * y + sin * z) * v.x + (t * y * y + cos) * v.y + (t * y * z - sin * x) * v.z,
        (t * x * z - sin * y) * v.x + (t * y * z + sin * x) * v.y + (t * z * z + cos) * v.z,
    )
}

/// Reciprocal that maps zero to zero.
#[inline]
fn safe_inverse(factor: f64) -> f64 {
    if factor == 0.0 {
        0.0
    } else {
        1.0 / factor
    }
}

impl MeshBuilder {
    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Scales every vertex component-wise.
    ///
    /// Normals are multiplied by the inverse factors and renormalized; a
    /// zero factor flattens that normal component. A negative factor
    /// product mirrors the geometry, so every face is reversed to keep its
    /// front side outwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use b3d_mesh::MeshBuilder;
    /// use glam::DVec3;
    ///
    /// let mut builder = MeshBuilder::new();
    /// builder.add_cube(DVec3::ONE, 1);
    /// let before = builder.faces()[0].vertices.clone();
    /// builder.scale(DVec3::new(-1.0, 1.0, 1.0));
    /// let mut after = builder.faces()[0].vertices.clone();
    /// after.reverse();
    /// assert_eq!(before, after);
    /// ```
    pub fn scale(&mut self, factor: DVec3) {
        let inverse = DVec3::new(
            safe_inverse(factor.x),
            safe_inverse(factor.y),
            safe_inverse(factor.z),
        );
        for vertex in &mut self.vertices {
            vertex.position *= factor;
            if vertex.normal != DVec3::ZERO {
                vertex.normal = (vertex.normal * inverse).normalize_or_zero();
            }
        }
        if factor.x * factor.y * factor.z < 0.0 {
            for face in &mut self.faces {
                face.vertices.reverse();
            }
        }
    }

    /// Rotates every vertex position and normal around `axis`, which must
    /// be a unit vector.
    pub fn rotate(&mut self, axis: DVec3, cos: f64, sin: f64) {
        for vertex in &mut self.vertices {
            vertex.position = rotate_vector(vertex.position, axis, cos, sin);
            vertex.normal = rotate_vector(vertex.normal, axis, cos, sin);
        }
    }

    /// Shears along `shift` in proportion to the distance along
    /// `direction`. Both must be unit (or zero) vectors.
    pub fn shear(&mut self, direction: DVec3, shift: DVec3, ratio: f64) {
        for vertex in &mut self.vertices {
            let position_factor = ratio * vertex.position.dot(direction);
            let normal_factor = ratio * vertex.normal.dot(shift);
            vertex.position += shift * position_factor;
            vertex.normal = (vertex.normal - direction * normal_factor).normalize_or_zero();
        }
    }

    /// Mirrors across the planes of the flagged axes.
    pub fn mirror(&mut self, x: bool, y: bool, z: bool) {
        let flip = |mirrored: bool| if mirrored { -1.0 } else { 1.0 };
        self.scale(DVec3::new(flip(x), flip(y), flip(z)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{MeshBuilderFace, MeshBuilderVertex, NormalPolicy};
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn single_vertex(position: DVec3, normal: DVec3) -> MeshBuilder {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(MeshBuilderVertex {
            position,
            normal,
            texture: DVec2::ZERO,
        });
        builder
    }

    fn triangle() -> MeshBuilder {
        let mut builder = MeshBuilder::new();
        for position in [DVec3::ZERO, DVec3::X, DVec3::Y] {
            builder.add_vertex(MeshBuilderVertex::at(position));
        }
        builder
            .add_face(MeshBuilderFace::new(vec![0, 1, 2], NormalPolicy::UseVertexNormals, 1))
            .unwrap();
        builder
    }

    #[test]
    fn test_translate() {
        let mut builder = single_vertex(DVec3::new(1.0, 2.0, 3.0), DVec3::Y);
        builder.translate(DVec3::new(-1.0, 0.5, 10.0));
        assert_eq!(builder.vertices()[0].position, DVec3::new(0.0, 2.5, 13.0));
        assert_eq!(builder.vertices()[0].normal, DVec3::Y);
    }

    #[test]
    fn test_scale_positive_keeps_winding() {
        let mut builder = triangle();
        builder.scale(DVec3::new(2.0, 3.0, 4.0));
        assert_eq!(builder.faces()[0].vertices, vec![0, 1, 2]);
        assert_eq!(builder.vertices()[1].position, DVec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_scale_negative_product_reverses_winding() {
        let mut builder = triangle();
        builder.scale(DVec3::new(1.0, -1.0, 1.0));
        assert_eq!(builder.faces()[0].vertices, vec![2, 1, 0]);

        // Two negative axes cancel out
        let mut builder = triangle();
        builder.scale(DVec3::new(-1.0, -1.0, 1.0));
        assert_eq!(builder.faces()[0].vertices, vec![0, 1, 2]);
    }

    #[test]
    fn test_scale_renormalizes_normals() {
        let normal = DVec3::new(1.0, 1.0, 0.0).normalize();
        let mut builder = single_vertex(DVec3::ONE, normal);
        builder.scale(DVec3::new(2.0, 1.0, 1.0));
        let scaled = builder.vertices()[0].normal;
        assert_relative_eq!(scaled.length(), 1.0, epsilon = 1e-12);
        // Stretching along x tilts the normal away from x
        assert!(scaled.y > scaled.x);
    }

    #[test]
    fn test_scale_by_zero_collapses_normal_component() {
        let normal = DVec3::new(1.0, 1.0, 0.0).normalize();
        let mut builder = single_vertex(DVec3::ONE, normal);
        builder.scale(DVec3::new(0.0, 1.0, 1.0));
        assert_eq!(builder.vertices()[0].position, DVec3::new(0.0, 1.0, 1.0));
        assert_relative_eq!(builder.vertices()[0].normal.y, 1.0, epsilon = 1e-12);
        assert_eq!(builder.vertices()[0].normal.x, 0.0);
    }

    #[test]
    fn test_unset_normals_stay_unset() {
        let mut builder = single_vertex(DVec3::ONE, DVec3::ZERO);
        builder.scale(DVec3::splat(3.0));
        builder.rotate(DVec3::Z, 0.0, 1.0);
        builder.shear(DVec3::X, DVec3::Y, 1.0);
        assert_eq!(builder.vertices()[0].normal, DVec3::ZERO);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut builder = single_vertex(DVec3::X, DVec3::X);
        builder.rotate(DVec3::Z, 0.0, 1.0);
        let vertex = builder.vertices()[0];
        assert_relative_eq!(vertex.position.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(vertex.position.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(vertex.normal.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shear() {
        let mut builder = single_vertex(DVec3::new(2.0, 0.0, 0.0), DVec3::Y);
        builder.shear(DVec3::X, DVec3::Y, 0.5);
        let vertex = builder.vertices()[0];
        // Moved up by ratio * distance along x
        assert_eq!(vertex.position, DVec3::new(2.0, 1.0, 0.0));
        // Normal leans back against the shear and stays unit length
        assert!(vertex.normal.x < 0.0);
        assert_relative_eq!(vertex.normal.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mirror() {
        let mut builder = triangle();
        builder.mirror(true, false, false);
        assert_eq!(builder.vertices()[1].position, DVec3::new(-1.0, 0.0, 0.0));
        assert_eq!(builder.faces()[0].vertices, vec![2, 1, 0]);
    }
}

//! # Cylinder Primitive
//!
//! Cylinders, frustums and cones around the vertical axis.
//!
//! ## Layout
//!
//! Vertices come in pairs, one per segment: the upper vertex at local index
//! `2i` (at `+height / 2`) and the lower one at `2i + 1` (at `-height / 2`).
//! Side vertices carry the slope normal of the side surface. Where an end
//! has radius exactly zero its vertices collapse into an apex, and the apex
//! normals are turned by half a segment so each bisects the two side faces
//! meeting there.

use crate::builder::{MeshBuilder, MeshBuilderVertex, NormalPolicy};
use crate::transform::rotate_vector;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

impl MeshBuilder {
    /// Adds a cylinder with `segments` sides.
    ///
    /// An end gets a cap if its radius is positive. Negative radii are used
    /// by absolute value but suppress the cap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use b3d_mesh::MeshBuilder;
    ///
    /// let mut builder = MeshBuilder::new();
    /// builder.add_cylinder(8, 1.0, 1.0, 2.0, 1);
    /// assert_eq!(builder.vertex_count(), 16);
    /// assert_eq!(builder.face_count(), 8 + 2);
    /// ```
    pub fn add_cylinder(
        &mut self,
        segments: usize,
        upper_radius: f64,
        lower_radius: f64,
        height: f64,
        line: usize,
    ) {
        if segments == 0 {
            return;
        }
        let upper_cap = upper_radius > 0.0;
        let lower_cap = lower_radius > 0.0;
        let upper_apex = upper_radius == 0.0;
        let lower_apex = lower_radius == 0.0;
        let upper_radius = upper_radius.abs();
        let lower_radius = lower_radius.abs();
        let half_height = 0.5 * height;

        // One segment is two half-steps; apexes start one half-step ahead.
        let (half_sin, half_cos) = (0.5 * TAU / segments as f64).sin_cos();
        let half_step = |v: DVec3| rotate_vector(v, DVec3::Y, half_cos, half_sin);
        let full_step = |v: DVec3| half_step(half_step(v));

        let mut direction = DVec3::X;
        let slope = side_slope(direction, upper_radius, lower_radius, height);
        let mut upper_slope = if upper_apex { half_step(slope) } else { slope };
        let mut lower_slope = if lower_apex { half_step(slope) } else { slope };

        let base = self.vertices.len();
        for _ in 0..segments {
            self.vertices.push(MeshBuilderVertex {
                position: direction * upper_radius + DVec3::Y * half_height,
                normal: upper_slope,
                texture: DVec2::ZERO,
            });
            self.vertices.push(MeshBuilderVertex {
                position: direction * lower_radius - DVec3::Y * half_height,
                normal: lower_slope,
                texture: DVec2::ZERO,
            });
            direction = full_step(direction);
            upper_slope = full_step(upper_slope);
            lower_slope = full_step(lower_slope);
        }

        let count = 2 * segments;
        if height != 0.0 && !(upper_apex && lower_apex) {
            for i in 0..segments {
                let upper = 2 * i;
                let lower = 2 * i + 1;
                let next_upper = (2 * i + 2) % count;
                let next_lower = (2 * i + 3) % count;
                let policy = NormalPolicy::UseVertexNormals;
                if upper_apex {
                    self.push_local_face(base, &[upper, lower, next_lower], policy, line);
                } else if lower_apex {
                    self.push_local_face(base, &[upper, lower, next_upper], policy, line);
                } else {
                    self.push_local_face(base, &[upper, lower, next_lower, next_upper], policy, line);
                }
            }
        }

        if upper_cap {
            let cap: Vec<usize> = (0..segments).map(|j| 2 * j).collect();
            self.push_local_face(base, &cap, NormalPolicy::GenerateFromFace, line);
        }
        if lower_cap {
            let cap: Vec<usize> = (0..segments).rev().map(|j| 2 * j + 1).collect();
            self.push_local_face(base, &cap, NormalPolicy::GenerateFromFace, line);
        }
    }
}

/// Outward normal of the side surface at `direction`.
///
/// Without height the side is a flat ring; it faces up when the lower
/// radius is at least the upper one and down otherwise.
fn side_slope(direction: DVec3, upper_radius: f64, lower_radius: f64, height: f64) -> DVec3 {
    if height == 0.0 {
        if lower_radius < upper_radius {
            DVec3::NEG_Y
        } else {
            DVec3::Y
        }
    } else {
        (direction * height + DVec3::Y * (lower_radius - upper_radius)).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn face_normal(builder: &MeshBuilder, face: usize) -> DVec3 {
        let indices = &builder.faces()[face].vertices;
        let p: Vec<DVec3> = indices.iter().map(|&i| builder.vertices()[i].position).collect();
        (p[1] - p[0]).cross(p[2] - p[0])
    }

    #[test]
    fn test_cylinder_counts() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(6, 1.0, 2.0, 3.0, 1);
        assert_eq!(builder.vertex_count(), 12);
        assert_eq!(builder.face_count(), 8);
        assert!(builder.faces()[..6].iter().all(|f| f.vertices.len() == 4));
        assert_eq!(builder.faces()[6].vertices.len(), 6);
        assert_eq!(builder.faces()[7].vertices.len(), 6);
    }

    #[test]
    fn test_cylinder_positions() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(4, 1.0, 2.0, 4.0, 1);
        let v = builder.vertices();
        assert_relative_eq!(v[0].position.x, 1.0);
        assert_relative_eq!(v[0].position.y, 2.0);
        assert_relative_eq!(v[1].position.x, 2.0);
        assert_relative_eq!(v[1].position.y, -2.0);
        // Second segment is a quarter turn further
        assert_relative_eq!(v[2].position.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v[2].position.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_direction_stays_unit_length() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(1000, 1.0, 1.0, 1.0, 1);
        for vertex in builder.vertices() {
            let radial = DVec3::new(vertex.position.x, 0.0, vertex.position.z);
            assert_relative_eq!(radial.length(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_caps_use_generated_normals() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(5, 1.0, 1.0, 1.0, 1);
        assert_eq!(builder.faces()[5].normal_policy, NormalPolicy::GenerateFromFace);
        assert_eq!(builder.faces()[6].normal_policy, NormalPolicy::GenerateFromFace);
        assert!(face_normal(&builder, 5).y > 0.0);
        assert!(face_normal(&builder, 6).y < 0.0);
    }

    #[test]
    fn test_sides_point_outwards() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(7, 1.0, 1.5, 2.0, 1);
        for face in 0..7 {
            let indices = &builder.faces()[face].vertices;
            let centroid = indices
                .iter()
                .map(|&i| builder.vertices()[i].position)
                .sum::<DVec3>()
                / indices.len() as f64;
            let radial = DVec3::new(centroid.x, 0.0, centroid.z);
            assert!(face_normal(&builder, face).dot(radial) > 0.0);
        }
    }

    #[test]
    fn test_cone_with_upper_apex() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(4, 0.0, 1.0, 2.0, 1);
        // Four triangles and only the lower cap
        assert_eq!(builder.face_count(), 5);
        assert!(builder.faces()[..4].iter().all(|f| f.vertices.len() == 3));
        assert_eq!(builder.faces()[4].vertices, vec![7, 5, 3, 1]);
        assert_relative_eq!(builder.vertices()[0].position.length(), 1.0);
    }

    #[test]
    fn test_apex_normal_bisects_segment() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(4, 0.0, 1.0, 2.0, 1);
        let apex = builder.vertices()[0].normal;
        let rim = builder.vertices()[1].normal;
        // Rim normal lies at angle 0, the apex normal half a segment (45°) further
        assert_relative_eq!(rim.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(apex.x, -apex.z, epsilon = 1e-12);
        assert!(apex.x > 0.0);
        assert_relative_eq!(apex.y, rim.y, epsilon = 1e-12);
    }

    #[test]
    fn test_cone_with_lower_apex() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(3, 1.0, 0.0, 2.0, 1);
        assert_eq!(builder.face_count(), 4);
        assert_eq!(builder.faces()[0].vertices, vec![0, 1, 2]);
        assert_eq!(builder.faces()[3].vertices, vec![0, 2, 4]);
    }

    #[test]
    fn test_negative_radius_suppresses_cap() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(4, -1.0, 1.0, 2.0, 1);
        // Quads on the side, only the lower cap
        assert_eq!(builder.face_count(), 5);
        assert!(builder.faces()[..4].iter().all(|f| f.vertices.len() == 4));
        assert_relative_eq!(builder.vertices()[0].position.x, 1.0);
    }

    #[test]
    fn test_zero_height_has_no_sides() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(4, 1.0, 2.0, 0.0, 1);
        assert_eq!(builder.face_count(), 2);
        assert_eq!(builder.vertices()[0].normal, DVec3::Y);

        // Flagged behaviour: a flat ring with a larger upper radius faces down
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(4, 2.0, 1.0, 0.0, 1);
        assert_eq!(builder.vertices()[0].normal, DVec3::NEG_Y);
    }

    #[test]
    fn test_both_radii_zero() {
        let mut builder = MeshBuilder::new();
        builder.add_cylinder(4, 0.0, 0.0, 2.0, 1);
        assert_eq!(builder.vertex_count(), 8);
        assert_eq!(builder.face_count(), 0);
    }

    #[test]
    fn test_cylinder_faces_are_offset() {
        let mut builder = MeshBuilder::new();
        builder.add_cube(DVec3::ONE, 1);
        builder.add_cylinder(3, 1.0, 1.0, 1.0, 2);
        assert_eq!(builder.faces()[6].vertices, vec![8, 9, 11, 10]);
        assert_eq!(builder.faces()[6].line, 2);
    }
}

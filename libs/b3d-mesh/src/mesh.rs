//! # Object Mesh
//!
//! The immutable result of assembly: single-precision vertices and
//! materials, each stored once, and faces referencing both by index.

use crate::color::{BlendMode, Color24, GlowAttenuation};
use crate::error::MeshError;
use crate::texture::TextureHandle;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

// =============================================================================
// VERTEX
// =============================================================================

/// A final vertex.
///
/// Equality and hashing compare the exact bit patterns of all eight
/// components, so vertices deduplicate by value. Callers construct them
/// through the assembler, which never produces NaN and folds `-0.0` into
/// `0.0`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub texture: Vec2,
}

impl Vertex {
    fn bits(&self) -> [u32; 8] {
        [
            self.position.x.to_bits(),
            self.position.y.to_bits(),
            self.position.z.to_bits(),
            self.normal.x.to_bits(),
            self.normal.y.to_bits(),
            self.normal.z.to_bits(),
            self.texture.x.to_bits(),
            self.texture.y.to_bits(),
        ]
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

// =============================================================================
// MATERIAL AND FACE
// =============================================================================

/// Appearance shared by any number of faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Material {
    pub alpha: u8,
    pub reflective_color: Color24,
    pub emissive_color: Color24,
    pub emissive: bool,
    pub blend_mode: BlendMode,
    pub glow_half_distance: u16,
    pub glow_attenuation: GlowAttenuation,
    pub daytime_texture: Option<TextureHandle>,
    pub nighttime_texture: Option<TextureHandle>,
}

/// A polygon referencing vertices and a material of its [`ObjectMesh`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub vertices: Vec<u32>,
    pub material: u32,
    /// Source line the face came from.
    pub line: usize,
}

// =============================================================================
// OBJECT MESH
// =============================================================================

/// A decoded object.
///
/// Only the assembler creates meshes; afterwards they are read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMesh {
    vertices: Vec<Vertex>,
    materials: Vec<Material>,
    faces: Vec<Face>,
}

impl ObjectMesh {
    pub(crate) fn from_parts(vertices: Vec<Vertex>, materials: Vec<Material>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            materials,
            faces,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Axis-aligned bounds of all vertex positions as (min, max), or `None`
    /// for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let (first, rest) = self.vertices.split_first()?;
        Some(rest.iter().fold((first.position, first.position), |(min, max), v| {
            (min.min(v.position), max.max(v.position))
        }))
    }

    /// Checks the structural invariants: every face has at least three
    /// vertices, and every vertex and material index is in range.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        let material_count = self.materials.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if face.vertices.len() < 3 {
                return Err(MeshError::TooFewVertices {
                    face: face_index,
                    count: face.vertices.len(),
                });
            }
            if let Some(&index) = face.vertices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::VertexOutOfRange {
                    index: index as usize,
                    count: vertex_count,
                });
            }
            if face.material as usize >= material_count {
                return Err(MeshError::MaterialOutOfRange {
                    face: face_index,
                    index: face.material as usize,
                    count: material_count,
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

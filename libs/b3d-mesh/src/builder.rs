//! # Mesh Builder
//!
//! Mutable per-block container of vertices and faces. One builder exists
//! per mesh-builder block of the source file; all of them are merged by the
//! assembler at the end.

use crate::color::{BlendMode, Color24, GlowAttenuation};
use crate::error::MeshError;
use config::constants::DEFAULT_ALPHA;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// VERTICES AND FACES
// =============================================================================

/// A builder vertex. A zero normal means "unset".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshBuilderVertex {
    pub position: DVec3,
    pub normal: DVec3,
    pub texture: DVec2,
}

impl MeshBuilderVertex {
    /// Creates a vertex with no normal and zero texture coordinates.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// How vertex normals of a face are resolved at assembly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NormalPolicy {
    /// Keep each vertex normal; unset ones take the face normal.
    #[default]
    UseVertexNormals,
    /// Negate each vertex normal (the back side of a two-sided face).
    InvertVertexNormals,
    /// Always use the normal computed from the face geometry.
    GenerateFromFace,
}

/// A builder face: vertex indices local to its builder plus appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuilderFace {
    pub vertices: Vec<usize>,
    pub normal_policy: NormalPolicy,
    pub alpha: u8,
    pub reflective_color: Color24,
    pub emissive_color: Color24,
    pub emissive: bool,
    pub blend_mode: BlendMode,
    pub glow_half_distance: u16,
    pub glow_attenuation: GlowAttenuation,
    /// Source line the face came from; diagnostics only.
    pub line: usize,
}

impl MeshBuilderFace {
    /// Creates a face with default appearance: opaque white, no emission.
    pub fn new(vertices: Vec<usize>, normal_policy: NormalPolicy, line: usize) -> Self {
        Self {
            vertices,
            normal_policy,
            alpha: DEFAULT_ALPHA,
            reflective_color: Color24::WHITE,
            emissive_color: Color24::BLACK,
            emissive: false,
            blend_mode: BlendMode::default(),
            glow_half_distance: 0,
            glow_attenuation: GlowAttenuation::default(),
            line,
        }
    }

    /// The same face seen from the other side: reversed vertex order and
    /// inverted normals.
    pub fn back_face(&self) -> Self {
        let mut face = self.clone();
        face.vertices.reverse();
        face.normal_policy = NormalPolicy::InvertVertexNormals;
        face
    }
}

// =============================================================================
// MESH BUILDER
// =============================================================================

/// Vertices, faces and texture state of one mesh-builder block.
///
/// # Example
///
/// ```rust
/// use b3d_mesh::{MeshBuilder, MeshBuilderFace, MeshBuilderVertex, NormalPolicy};
/// use glam::DVec3;
///
/// let mut builder = MeshBuilder::new();
/// builder.add_vertex(MeshBuilderVertex::at(DVec3::ZERO));
/// builder.add_vertex(MeshBuilderVertex::at(DVec3::X));
/// builder.add_vertex(MeshBuilderVertex::at(DVec3::Y));
/// builder
///     .add_face(MeshBuilderFace::new(vec![0, 1, 2], NormalPolicy::UseVertexNormals, 1))
///     .unwrap();
/// assert_eq!(builder.face_count(), 1);
/// assert!(builder
///     .add_face(MeshBuilderFace::new(vec![0, 1, 3], NormalPolicy::UseVertexNormals, 2))
///     .is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuilder {
    pub(crate) vertices: Vec<MeshBuilderVertex>,
    pub(crate) faces: Vec<MeshBuilderFace>,
    daytime_texture: Option<String>,
    nighttime_texture: Option<String>,
    transparent_color: Option<Color24>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the builder has neither vertices nor faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[MeshBuilderVertex] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[MeshBuilderFace] {
        &self.faces
    }

    /// Appends a vertex and returns its local index.
    pub fn add_vertex(&mut self, vertex: MeshBuilderVertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Appends a face whose indices already refer to this builder.
    pub fn add_face(&mut self, face: MeshBuilderFace) -> Result<(), MeshError> {
        if face.vertices.len() < 3 {
            return Err(MeshError::TooFewVertices {
                face: self.faces.len(),
                count: face.vertices.len(),
            });
        }
        let count = self.vertices.len();
        if let Some(&index) = face.vertices.iter().find(|&&index| index >= count) {
            return Err(MeshError::VertexOutOfRange { index, count });
        }
        self.faces.push(face);
        Ok(())
    }

    /// Appends a face given in indices local to a primitive whose first
    /// vertex sits at `base`.
    pub(crate) fn push_local_face(
        &mut self,
        base: usize,
        local: &[usize],
        normal_policy: NormalPolicy,
        line: usize,
    ) {
        let vertices = local.iter().map(|&index| base + index).collect();
        self.faces.push(MeshBuilderFace::new(vertices, normal_policy, line));
    }

    /// Sets the texture coordinate of one vertex.
    pub fn set_texture_coordinates(&mut self, index: usize, texture: DVec2) -> Result<(), MeshError> {
        let count = self.vertices.len();
        let vertex = self
            .vertices
            .get_mut(index)
            .ok_or(MeshError::VertexOutOfRange { index, count })?;
        vertex.texture = texture;
        Ok(())
    }

    // =========================================================================
    // APPEARANCE
    //
    // Face-level setters only touch faces that already exist. Faces added
    // afterwards keep the defaults.
    // =========================================================================

    /// Sets reflective colour and alpha on every existing face.
    pub fn set_color(&mut self, color: Color24, alpha: u8) {
        for face in &mut self.faces {
            face.reflective_color = color;
            face.alpha = alpha;
        }
    }

    /// Sets the emissive colour on every existing face and marks it emissive.
    pub fn set_emissive_color(&mut self, color: Color24) {
        for face in &mut self.faces {
            face.emissive_color = color;
            face.emissive = true;
        }
    }

    /// Sets blend mode and glow on every existing face.
    pub fn set_blend_mode(&mut self, mode: BlendMode, glow_half_distance: u16, glow_attenuation: GlowAttenuation) {
        for face in &mut self.faces {
            face.blend_mode = mode;
            face.glow_half_distance = glow_half_distance;
            face.glow_attenuation = glow_attenuation;
        }
    }

    /// Sets the texture paths (relative to the source file) for the whole
    /// builder.
    pub fn set_textures(&mut self, daytime: impl Into<String>, nighttime: Option<String>) {
        self.daytime_texture = Some(daytime.into());
        self.nighttime_texture = nighttime;
    }

    /// Sets the colour keyed out of the daytime texture.
    pub fn set_transparent_color(&mut self, color: Color24) {
        self.transparent_color = Some(color);
    }

    #[inline]
    pub fn daytime_texture(&self) -> Option<&str> {
        self.daytime_texture.as_deref()
    }

    #[inline]
    pub fn nighttime_texture(&self) -> Option<&str> {
        self.nighttime_texture.as_deref()
    }

    #[inline]
    pub fn transparent_color(&self) -> Option<Color24> {
        self.transparent_color
    }
}

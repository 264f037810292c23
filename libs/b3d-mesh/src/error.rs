//! # Mesh Errors
//!
//! Error types for builder edits and mesh validation.

use thiserror::Error;

/// Errors raised when a builder edit or a finished mesh breaks a structural
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A face needs at least three vertices.
    #[error("Face {face} has {count} vertices (at least 3 required)")]
    TooFewVertices { face: usize, count: usize },

    /// A face or command references a vertex that does not exist.
    #[error("Vertex index {index} is out of range (vertex count: {count})")]
    VertexOutOfRange { index: usize, count: usize },

    /// A face references a material that does not exist.
    #[error("Material index {index} of face {face} is out of range (material count: {count})")]
    MaterialOutOfRange {
        face: usize,
        index: usize,
        count: usize,
    },
}

//! # B3D Mesh
//!
//! Geometry kernel and final assembly for CSV/B3D objects.
//!
//! ## Architecture
//!
//! ```text
//! MeshBuilder (f64, mutable)  ──┐
//! MeshBuilder (f64, mutable)  ──┼─ assemble() ─→ ObjectMesh (f32, deduplicated, immutable)
//! MeshBuilder (f64, mutable)  ──┘
//! ```
//!
//! Builders keep double precision while commands are applied. Only the
//! assembler narrows to single precision, after every transform has run.
//!
//! ## Usage
//!
//! ```rust
//! use b3d_mesh::{assemble, MeshBuilder, TextureRegistry};
//! use glam::DVec3;
//! use std::path::Path;
//!
//! let mut builder = MeshBuilder::new();
//! builder.add_cube(DVec3::splat(1.0), 1);
//! let mut textures = TextureRegistry::default();
//! let mesh = assemble(&[builder], Path::new("."), &mut textures);
//! assert_eq!(mesh.face_count(), 6);
//! assert!(mesh.is_valid());
//! ```

pub mod assembler;
pub mod builder;
pub mod color;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod texture;
pub mod transform;

pub use assembler::assemble;
pub use builder::{MeshBuilder, MeshBuilderFace, MeshBuilderVertex, NormalPolicy};
pub use color::{BlendMode, Color24, GlowAttenuation};
pub use error::MeshError;
pub use mesh::{Face, Material, ObjectMesh, Vertex};
pub use texture::{TextureHandle, TextureRegistry, TextureRequest, TextureResolver};

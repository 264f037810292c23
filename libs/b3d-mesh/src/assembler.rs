//! # Mesh Assembler
//!
//! Merges every builder of a decoded file into one [`ObjectMesh`].
//!
//! For each face the assembler resolves vertex normals according to the
//! face's [`NormalPolicy`], narrows everything to single precision and
//! interns vertices and materials in value-keyed maps, so identical entries
//! from any builder end up shared.

use crate::builder::{MeshBuilder, MeshBuilderFace, MeshBuilderVertex, NormalPolicy};
use crate::color::Color24;
use crate::mesh::{Face, Material, ObjectMesh, Vertex};
use crate::texture::{texture_path, TextureHandle, TextureResolver};
use config::constants::DEGENERATE_LENGTH_SQUARED;
use glam::{DVec3, Vec2, Vec3};
use std::collections::HashMap;
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// Assembles `builders` into a mesh.
///
/// Texture paths are resolved against `base_dir` (the directory of the
/// source file). Builders without faces never touch the resolver.
pub fn assemble(builders: &[MeshBuilder], base_dir: &Path, resolver: &mut dyn TextureResolver) -> ObjectMesh {
    let mut assembler = Assembler::new(base_dir, resolver);
    for builder in builders {
        assembler.add_builder(builder);
    }
    assembler.finish()
}

/// Value-keyed table that stores each distinct entry once.
struct Interner<T> {
    entries: Vec<T>,
    index: HashMap<T, u32>,
}

impl<T: Copy + Eq + Hash> Interner<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn intern(&mut self, value: T) -> u32 {
        let entries = &mut self.entries;
        *self.index.entry(value).or_insert_with(|| {
            entries.push(value);
            (entries.len() - 1) as u32
        })
    }
}

struct Assembler<'a> {
    base_dir: &'a Path,
    resolver: &'a mut dyn TextureResolver,
    textures: HashMap<(PathBuf, Option<Color24>), TextureHandle>,
    vertices: Interner<Vertex>,
    materials: Interner<Material>,
    faces: Vec<Face>,
}

impl<'a> Assembler<'a> {
    fn new(base_dir: &'a Path, resolver: &'a mut dyn TextureResolver) -> Self {
        Self {
            base_dir,
            resolver,
            textures: HashMap::new(),
            vertices: Interner::new(),
            materials: Interner::new(),
            faces: Vec::new(),
        }
    }

    fn add_builder(&mut self, builder: &MeshBuilder) {
        if builder.faces().is_empty() {
            return;
        }
        let daytime = builder
            .daytime_texture()
            .map(|path| self.texture(path, builder.transparent_color()));
        let nighttime = builder.nighttime_texture().map(|path| self.texture(path, None));

        for face in builder.faces() {
            let material = self.materials.intern(Material {
                alpha: face.alpha,
                reflective_color: face.reflective_color,
                emissive_color: face.emissive_color,
                emissive: face.emissive,
                blend_mode: face.blend_mode,
                glow_half_distance: face.glow_half_distance,
                glow_attenuation: face.glow_attenuation,
                daytime_texture: daytime,
                nighttime_texture: nighttime,
            });
            let vertices = self.face_vertices(builder.vertices(), face);
            self.faces.push(Face {
                vertices,
                material,
                line: face.line,
            });
        }
    }

    fn face_vertices(&mut self, vertices: &[MeshBuilderVertex], face: &MeshBuilderFace) -> Vec<u32> {
        let normal = face_normal(vertices, &face.vertices);
        face.vertices
            .iter()
            .map(|&index| {
                let source = vertices[index];
                let resolved = match face.normal_policy {
                    NormalPolicy::UseVertexNormals if source.normal != DVec3::ZERO => source.normal,
                    NormalPolicy::InvertVertexNormals if source.normal != DVec3::ZERO => -source.normal,
                    _ => normal,
                };
                self.vertices.intern(Vertex {
                    position: narrow(source.position),
                    normal: narrow(resolved),
                    texture: source.texture.as_vec2() + Vec2::ZERO,
                })
            })
            .collect()
    }

    fn texture(&mut self, relative: &str, transparent: Option<Color24>) -> TextureHandle {
        let path = texture_path(self.base_dir, relative);
        let resolver = &mut *self.resolver;
        *self
            .textures
            .entry((path, transparent))
            .or_insert_with_key(|(path, key)| resolver.resolve(path, *key))
    }

    fn finish(self) -> ObjectMesh {
        ObjectMesh::from_parts(self.vertices.entries, self.materials.entries, self.faces)
    }
}

/// Unit normal of the plane through the first three vertices of a face, or
/// `+Y` when they are collinear or coincide.
fn face_normal(vertices: &[MeshBuilderVertex], indices: &[usize]) -> DVec3 {
    let [a, b, c] = match indices {
        [a, b, c, ..] => [vertices[*a], vertices[*b], vertices[*c]].map(|v| v.position),
        _ => return DVec3::Y,
    };
    let normal = (b - a).cross(c - a);
    if normal.length_squared() < DEGENERATE_LENGTH_SQUARED {
        DVec3::Y
    } else {
        normal.normalize()
    }
}

/// Converts to single precision, folding negative zero into positive zero.
#[inline]
fn narrow(v: DVec3) -> Vec3 {
    v.as_vec3() + Vec3::ZERO
}

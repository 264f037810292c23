//! # Texture Resolution
//!
//! Textures are loaded by whoever consumes the mesh. The assembler only
//! asks a [`TextureResolver`] for an opaque handle per distinct
//! (path, transparent key) pair and stores that handle in the material.

use crate::color::Color24;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Opaque texture id handed out by a [`TextureResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    #[inline]
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Collaborator that turns texture paths into handles.
///
/// The assembler calls it at most once per distinct (path, key) pair within
/// one assembly.
pub trait TextureResolver {
    /// Registers `path` (already resolved against the source directory),
    /// optionally keyed by a colour to treat as transparent.
    fn resolve(&mut self, path: &Path, transparent: Option<Color24>) -> TextureHandle;
}

/// One call made to a [`TextureRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRequest {
    pub path: PathBuf,
    pub transparent: Option<Color24>,
}

/// Resolver that hands out sequential handles and remembers every request.
///
/// The handle id is the index of the request in [`requests`](Self::requests).
///
/// # Example
///
/// ```rust
/// use b3d_mesh::{TextureRegistry, TextureResolver};
/// use std::path::Path;
///
/// let mut registry = TextureRegistry::default();
/// let day = registry.resolve(Path::new("objects/day.png"), None);
/// let night = registry.resolve(Path::new("objects/night.png"), None);
/// assert_eq!(day.id(), 0);
/// assert_eq!(night.id(), 1);
/// assert_eq!(registry.requests()[1].path, Path::new("objects/night.png"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    requests: Vec<TextureRequest>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request received, in order.
    #[inline]
    pub fn requests(&self) -> &[TextureRequest] {
        &self.requests
    }

    /// The request that produced `handle`.
    pub fn get(&self, handle: TextureHandle) -> Option<&TextureRequest> {
        self.requests.get(handle.0 as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl TextureResolver for TextureRegistry {
    fn resolve(&mut self, path: &Path, transparent: Option<Color24>) -> TextureHandle {
        let handle = TextureHandle(self.requests.len() as u32);
        self.requests.push(TextureRequest {
            path: path.to_path_buf(),
            transparent,
        });
        handle
    }
}

/// Joins a texture path as written in a source file onto `base_dir`.
///
/// Object files are often authored with backslash separators; both `\` and
/// `/` split components here.
pub fn texture_path(base_dir: &Path, relative: &str) -> PathBuf {
    relative
        .split(['\\', '/'])
        .filter(|component| !component.is_empty())
        .fold(base_dir.to_path_buf(), |path, component| path.join(component))
}

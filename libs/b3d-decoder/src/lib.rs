//! # B3D Decoder
//!
//! Decodes CSV/B3D object files into an [`ObjectMesh`].
//!
//! ## Architecture
//!
//! ```text
//! source text → b3d-syntax (tokenize, resolve, coerce)
//!             → dispatcher (drives MeshBuilders)
//!             → b3d-mesh::assemble (deduplicated ObjectMesh)
//! ```
//!
//! Decoding is a single synchronous pass. Malformed content is reported to
//! a [`DiagnosticSink`] and never stops the decode; only failing to read
//! the file or an unknown file type is an error.
//!
//! ## Usage
//!
//! ```rust
//! use b3d_decoder::{decode_str, Diagnostic, Dialect, TextureRegistry};
//! use std::path::Path;
//!
//! let source = "CreateMeshBuilder\nAddVertex,0,0,0\nAddVertex,1,0,0\nAddVertex,0,1,0\nAddFace,0,1,2";
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let mut textures = TextureRegistry::default();
//! let mesh = decode_str(source, Dialect::Csv, Path::new("triangle.csv"), &mut diagnostics, &mut textures);
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! assert!(diagnostics.is_empty());
//! ```

mod dispatcher;
pub mod error;

pub use b3d_mesh::{ObjectMesh, TextureHandle, TextureRegistry, TextureResolver};
pub use b3d_syntax::{Diagnostic, DiagnosticSink, Dialect, LogSink, Severity};
pub use config::constants::DecoderConfig;
pub use error::DecodeError;

use dispatcher::Dispatcher;
use std::path::Path;

// =============================================================================
// DECODER
// =============================================================================

/// Object file decoder.
///
/// # Example
///
/// ```rust
/// use b3d_decoder::{Decoder, DecoderConfig, Diagnostic, Dialect, TextureRegistry};
/// use std::path::Path;
///
/// // Lenient mode skips the spelling and separator warnings
/// let decoder = Decoder::with_config(DecoderConfig { strict: false, ..DecoderConfig::default() });
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let mesh = decoder.decode_str(
///     "[MeshBuilder]\nCube,1",
///     Dialect::B3d,
///     Path::new("box.b3d"),
///     &mut diagnostics,
///     &mut TextureRegistry::default(),
/// );
/// assert_eq!(mesh.face_count(), 6);
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a decoder with default options (strict mode on).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes in-memory source text.
    ///
    /// `path` names the file in diagnostics, and its directory is the base
    /// for texture paths. Nothing is read from disk.
    pub fn decode_str(
        &self,
        source: &str,
        dialect: Dialect,
        path: &Path,
        sink: &mut dyn DiagnosticSink,
        resolver: &mut dyn TextureResolver,
    ) -> ObjectMesh {
        let display = path.display().to_string();
        log::debug!("Decoding {display} as {dialect}");

        let mut dispatcher = Dispatcher::new(dialect, display.as_str(), &self.config, sink);
        for (index, line) in source.lines().enumerate() {
            dispatcher.dispatch_line(index + 1, line);
        }
        let commands = dispatcher.command_count();
        let builders = dispatcher.finish();

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let mesh = b3d_mesh::assemble(&builders, base_dir, resolver);
        log::debug!(
            "Decoded {display}: {commands} commands, {} builders, {} vertices, {} materials, {} faces",
            builders.len(),
            mesh.vertex_count(),
            mesh.materials().len(),
            mesh.face_count()
        );
        mesh
    }

    /// Reads and decodes a file, selecting the dialect from its extension.
    ///
    /// A leading byte-order mark is skipped.
    pub fn decode_file(
        &self,
        path: &Path,
        sink: &mut dyn DiagnosticSink,
        resolver: &mut dyn TextureResolver,
    ) -> Result<ObjectMesh, DecodeError> {
        let dialect = Dialect::from_path(path).ok_or_else(|| DecodeError::unknown_dialect(path))?;
        let source = std::fs::read_to_string(path).map_err(|source| DecodeError::io(path, source))?;
        let source = source.strip_prefix('\u{feff}').unwrap_or(&source);
        Ok(self.decode_str(source, dialect, path, sink, resolver))
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Decodes in-memory source text with default options.
///
/// See [`Decoder::decode_str`].
pub fn decode_str(
    source: &str,
    dialect: Dialect,
    path: &Path,
    sink: &mut dyn DiagnosticSink,
    resolver: &mut dyn TextureResolver,
) -> ObjectMesh {
    Decoder::new().decode_str(source, dialect, path, sink, resolver)
}

/// Reads and decodes a file with default options.
///
/// See [`Decoder::decode_file`].
pub fn decode_file(
    path: &Path,
    sink: &mut dyn DiagnosticSink,
    resolver: &mut dyn TextureResolver,
) -> Result<ObjectMesh, DecodeError> {
    Decoder::new().decode_file(path, sink, resolver)
}

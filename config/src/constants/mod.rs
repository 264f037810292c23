//! # Configuration Constants
//!
//! Centralized constants for the CSV/B3D object pipeline.
//!
//! ## Categories
//!
//! - **Syntax**: Comment marker, separators and file extensions
//! - **Colours**: Channel bounds and per-face defaults
//! - **Geometry**: Tessellation limits and degeneracy tolerance
//! - **Options**: The validated [`DecoderConfig`] snapshot

use std::fmt;

// =============================================================================
// SYNTAX CONSTANTS
// =============================================================================

/// Character that starts a line comment. Everything from it to the end of
/// the line is discarded before tokenizing.
///
/// # Example
///
/// ```rust
/// use config::constants::COMMENT_CHAR;
///
/// let line = "Vertex 1, 2, 3 ; corner";
/// let code = line.split(COMMENT_CHAR).next().unwrap_or_default().trim();
/// assert_eq!(code, "Vertex 1, 2, 3");
/// ```
pub const COMMENT_CHAR: char = ';';

/// Separator between arguments, and between the command and its arguments
/// in the comma-delimited (CSV) dialect.
pub const CSV_SEPARATOR: char = ',';

/// Separator between the command and its arguments in the space-delimited
/// (B3D) dialect.
pub const B3D_SEPARATOR: char = ' ';

/// File extension (without dot, lowercase) selecting the comma-delimited dialect.
pub const CSV_EXTENSION: &str = "csv";

/// File extension (without dot, lowercase) selecting the space-delimited dialect.
pub const B3D_EXTENSION: &str = "b3d";

// =============================================================================
// COLOUR CONSTANTS
// =============================================================================

/// Smallest value accepted for a colour channel.
pub const COLOR_CHANNEL_MIN: i32 = 0;

/// Largest value accepted for a colour channel.
///
/// # Example
///
/// ```rust
/// use config::constants::{COLOR_CHANNEL_MAX, COLOR_CHANNEL_MIN};
///
/// let requested = 300;
/// assert_eq!(requested.clamp(COLOR_CHANNEL_MIN, COLOR_CHANNEL_MAX), 255);
/// ```
pub const COLOR_CHANNEL_MAX: i32 = 255;

/// Reflective colour every new face starts with (opaque white).
pub const DEFAULT_REFLECTIVE_COLOR: [u8; 3] = [255, 255, 255];

/// Alpha every new face starts with (fully opaque).
pub const DEFAULT_ALPHA: u8 = 255;

/// Emissive colour every new face starts with (black, i.e. no emission).
pub const DEFAULT_EMISSIVE_COLOR: [u8; 3] = [0, 0, 0];

/// Largest glow half distance `SetBlendMode` accepts.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GLOW_HALF_DISTANCE;
///
/// assert!(MAX_GLOW_HALF_DISTANCE < u16::MAX as i32);
/// ```
pub const MAX_GLOW_HALF_DISTANCE: i32 = 4095;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Minimum number of segments around a cylinder.
///
/// Two segments already produce a closed (if flat) shape; anything below
/// is rejected and voids the command.
pub const MIN_CYLINDER_SEGMENTS: i32 = 2;

/// Tolerance below which a squared vector length counts as zero.
///
/// Used when deciding whether a face normal is degenerate and has to fall
/// back to the up vector.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_LENGTH_SQUARED;
///
/// let cross = [0.0_f64, 0.0, 1.0e-20];
/// let length_squared: f64 = cross.iter().map(|c| c * c).sum();
/// assert!(length_squared < DEGENERATE_LENGTH_SQUARED);
/// ```
pub const DEGENERATE_LENGTH_SQUARED: f64 = 1.0e-24;

// =============================================================================
// DECODER OPTIONS
// =============================================================================

/// Immutable snapshot of the options a decode run is performed with.
///
/// # Examples
/// ```
/// use config::constants::DecoderConfig;
/// let config = DecoderConfig::default();
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Emit extra diagnostics for spelling and separator deviations.
    /// Never changes what is accepted.
    pub strict: bool,
    /// Largest number of arguments a single line may carry before the
    /// surplus is discarded.
    pub max_arguments: usize,
}

/// Default cap on the number of arguments kept from one line.
///
/// Faces are the only unbounded command; real files stay far below this.
pub const DEFAULT_MAX_ARGUMENTS: usize = 4096;

impl DecoderConfig {
    /// Builds a configuration, rejecting an argument cap too small to hold
    /// the widest fixed-arity command (`AddVertex`, 8 arguments).
    ///
    /// # Examples
    /// ```
    /// use config::constants::DecoderConfig;
    /// let cfg = DecoderConfig::new(false, 64).expect("valid config");
    /// assert!(!cfg.strict);
    /// assert!(DecoderConfig::new(true, 3).is_err());
    /// ```
    pub fn new(strict: bool, max_arguments: usize) -> Result<Self, ConfigError> {
        if max_arguments < MIN_ARGUMENT_CAP {
            return Err(ConfigError::ArgumentCapTooSmall(max_arguments));
        }
        Ok(Self {
            strict,
            max_arguments,
        })
    }
}

/// Smallest accepted value for [`DecoderConfig::max_arguments`].
pub const MIN_ARGUMENT_CAP: usize = 8;

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strict: true,
            max_arguments: DEFAULT_MAX_ARGUMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the argument cap cannot hold an `AddVertex` line.
    ArgumentCapTooSmall(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ArgumentCapTooSmall(value) => {
                write!(f, "max_arguments must be >= {MIN_ARGUMENT_CAP}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

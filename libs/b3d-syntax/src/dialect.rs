//! # Dialects
//!
//! The two surface syntaxes sharing one command set.

use config::constants::{B3D_EXTENSION, B3D_SEPARATOR, CSV_EXTENSION, CSV_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Surface syntax of an object file.
///
/// # Example
///
/// ```rust
/// use b3d_syntax::Dialect;
/// use std::path::Path;
///
/// assert_eq!(Dialect::from_path(Path::new("cab.B3D")), Some(Dialect::B3d));
/// assert_eq!(Dialect::from_path(Path::new("cab.csv")), Some(Dialect::Csv));
/// assert_eq!(Dialect::from_path(Path::new("cab.x")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Comma-delimited: `AddVertex, 1, 2, 3`
    Csv,
    /// Space-delimited: `Vertex 1, 2, 3`
    B3d,
}

impl Dialect {
    /// Selects the dialect from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            CSV_EXTENSION => Some(Self::Csv),
            B3D_EXTENSION => Some(Self::B3d),
            _ => None,
        }
    }

    /// Returns true if `c` separates the command from its arguments in
    /// this dialect.
    #[inline]
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Self::Csv => c == CSV_SEPARATOR,
            Self::B3d => c == B3D_SEPARATOR || c == '\t',
        }
    }

    /// Returns true if `c` is the separator of the *other* dialect, which
    /// signals a command glued to its arguments.
    #[inline]
    pub fn is_foreign_separator(self, c: char) -> bool {
        self.other().is_separator(c)
    }

    /// The other dialect.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Self::Csv => Self::B3d,
            Self::B3d => Self::Csv,
        }
    }

    /// Human-readable description of the expected separator.
    pub fn separator_description(self) -> &'static str {
        match self {
            Self::Csv => "a comma",
            Self::B3d => "a space",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::B3d => write!(f, "B3D"),
        }
    }
}

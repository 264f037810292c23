//! # Command Table
//!
//! The closed set of commands both dialects share, their spellings and the
//! number of arguments each accepts.
//!
//! Keywords are resolved once through a case-insensitive lookup table per
//! dialect. A keyword spelled the way the *other* dialect spells it still
//! resolves, but is marked as non-canonical so strict mode can complain.

use crate::dialect::Dialect;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Every command an object file can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CreateMeshBuilder,
    AddVertex,
    AddFace,
    AddFace2,
    Cube,
    Cylinder,
    Translate,
    TranslateAll,
    Scale,
    ScaleAll,
    Rotate,
    RotateAll,
    Shear,
    ShearAll,
    Mirror,
    MirrorAll,
    SetColor,
    SetEmissiveColor,
    SetBlendMode,
    LoadTexture,
    SetDecalTransparentColor,
    SetTextureCoordinates,
    GenerateNormals,
}

/// Inclusive argument count range. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    const fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    const fn between(min: usize, max: usize) -> Self {
        Self { min, max: Some(max) }
    }

    const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Returns true if `count` arguments are acceptable.
    #[inline]
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "exactly {max}"),
            Some(max) => write!(f, "between {} and {max}", self.min),
            None => write!(f, "at least {}", self.min),
        }
    }
}

/// Result of resolving a keyword in a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub command: Command,
    /// False if the keyword is the other dialect's spelling.
    pub canonical: bool,
}

impl Command {
    /// All commands, in table order.
    pub const ALL: [Command; 23] = [
        Command::CreateMeshBuilder,
        Command::AddVertex,
        Command::AddFace,
        Command::AddFace2,
        Command::Cube,
        Command::Cylinder,
        Command::Translate,
        Command::TranslateAll,
        Command::Scale,
        Command::ScaleAll,
        Command::Rotate,
        Command::RotateAll,
        Command::Shear,
        Command::ShearAll,
        Command::Mirror,
        Command::MirrorAll,
        Command::SetColor,
        Command::SetEmissiveColor,
        Command::SetBlendMode,
        Command::LoadTexture,
        Command::SetDecalTransparentColor,
        Command::SetTextureCoordinates,
        Command::GenerateNormals,
    ];

    /// Spelling in the space-delimited dialect.
    pub fn b3d_name(self) -> &'static str {
        match self {
            Command::CreateMeshBuilder => "[MeshBuilder]",
            Command::AddVertex => "Vertex",
            Command::AddFace => "Face",
            Command::AddFace2 => "Face2",
            Command::SetColor => "Color",
            Command::SetEmissiveColor => "EmissiveColor",
            Command::SetBlendMode => "BlendMode",
            Command::LoadTexture => "Load",
            Command::SetDecalTransparentColor => "Transparent",
            Command::SetTextureCoordinates => "Coordinates",
            Command::GenerateNormals => "[Texture]",
            other => other.csv_name(),
        }
    }

    /// Spelling in the comma-delimited dialect.
    pub fn csv_name(self) -> &'static str {
        match self {
            Command::CreateMeshBuilder => "CreateMeshBuilder",
            Command::AddVertex => "AddVertex",
            Command::AddFace => "AddFace",
            Command::AddFace2 => "AddFace2",
            Command::Cube => "Cube",
            Command::Cylinder => "Cylinder",
            Command::Translate => "Translate",
            Command::TranslateAll => "TranslateAll",
            Command::Scale => "Scale",
            Command::ScaleAll => "ScaleAll",
            Command::Rotate => "Rotate",
            Command::RotateAll => "RotateAll",
            Command::Shear => "Shear",
            Command::ShearAll => "ShearAll",
            Command::Mirror => "Mirror",
            Command::MirrorAll => "MirrorAll",
            Command::SetColor => "SetColor",
            Command::SetEmissiveColor => "SetEmissiveColor",
            Command::SetBlendMode => "SetBlendMode",
            Command::LoadTexture => "LoadTexture",
            Command::SetDecalTransparentColor => "SetDecalTransparentColor",
            Command::SetTextureCoordinates => "SetTextureCoordinates",
            Command::GenerateNormals => "GenerateNormals",
        }
    }

    /// Spelling in `dialect`.
    pub fn name(self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Csv => self.csv_name(),
            Dialect::B3d => self.b3d_name(),
        }
    }

    /// Number of arguments the command accepts.
    pub fn arity(self) -> Arity {
        match self {
            Command::CreateMeshBuilder | Command::GenerateNormals => Arity::exactly(0),
            Command::AddVertex => Arity::between(0, 8),
            Command::AddFace | Command::AddFace2 => Arity::at_least(3),
            Command::Cube => Arity::between(0, 3),
            Command::Cylinder => Arity::between(1, 4),
            Command::Translate
            | Command::TranslateAll
            | Command::Scale
            | Command::ScaleAll
            | Command::Mirror
            | Command::MirrorAll => Arity::between(0, 3),
            Command::Rotate | Command::RotateAll => Arity::between(0, 4),
            Command::Shear | Command::ShearAll => Arity::between(0, 7),
            Command::SetColor => Arity::between(0, 4),
            Command::SetEmissiveColor | Command::SetDecalTransparentColor => Arity::between(0, 3),
            Command::SetBlendMode => Arity::between(0, 3),
            Command::LoadTexture => Arity::between(1, 2),
            Command::SetTextureCoordinates => Arity::between(1, 3),
        }
    }

    /// True for the commands that only mark a section and do nothing.
    pub fn is_placeholder(self) -> bool {
        matches!(self, Command::GenerateNormals)
    }

    /// Resolves a keyword (case-insensitive) for `dialect`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use b3d_syntax::{Command, Dialect};
    ///
    /// let resolution = Command::resolve("vertex", Dialect::B3d).unwrap();
    /// assert_eq!(resolution.command, Command::AddVertex);
    /// assert!(resolution.canonical);
    ///
    /// let resolution = Command::resolve("AddVertex", Dialect::B3d).unwrap();
    /// assert!(!resolution.canonical);
    ///
    /// assert!(Command::resolve("Sphere", Dialect::Csv).is_none());
    /// ```
    pub fn resolve(keyword: &str, dialect: Dialect) -> Option<Resolution> {
        let key = keyword.to_ascii_lowercase();
        if let Some(&command) = keyword_table(dialect).get(key.as_str()) {
            return Some(Resolution {
                command,
                canonical: true,
            });
        }
        keyword_table(dialect.other())
            .get(key.as_str())
            .map(|&command| Resolution {
                command,
                canonical: false,
            })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.csv_name())
    }
}

/// Lowercase keyword → command, one table per dialect.
fn keyword_table(dialect: Dialect) -> &'static HashMap<String, Command> {
    static CSV: OnceLock<HashMap<String, Command>> = OnceLock::new();
    static B3D: OnceLock<HashMap<String, Command>> = OnceLock::new();
    let cell = match dialect {
        Dialect::Csv => &CSV,
        Dialect::B3d => &B3D,
    };
    cell.get_or_init(|| {
        Command::ALL
            .iter()
            .map(|&command| (command.name(dialect).to_ascii_lowercase(), command))
            .collect()
    })
}

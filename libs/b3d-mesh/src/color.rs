//! # Colours and Blending
//!
//! Per-face appearance values carried from builder faces into materials.

use config::constants::{DEFAULT_EMISSIVE_COLOR, DEFAULT_REFLECTIVE_COLOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGB colour.
///
/// # Example
///
/// ```rust
/// use b3d_mesh::Color24;
///
/// let key = Color24::new(0, 0, 255);
/// assert_eq!(key.to_string(), "(0, 0, 255)");
/// assert_eq!(Color24::default(), Color24::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color24 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color24 {
    pub const BLACK: Self = Self::from_array(DEFAULT_EMISSIVE_COLOR);
    pub const WHITE: Self = Self::from_array(DEFAULT_REFLECTIVE_COLOR);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for Color24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// How a face is blended with what is behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendMode {
    #[default]
    Normal,
    Additive,
}

/// How glow fades with distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GlowAttenuation {
    DivideExponent2,
    #[default]
    DivideExponent4,
}

impl BlendMode {
    /// Parses a keyword (case-insensitive).
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "additive" => Some(Self::Additive),
            _ => None,
        }
    }
}

impl GlowAttenuation {
    /// Parses a keyword (case-insensitive).
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "divideexponent2" => Some(Self::DivideExponent2),
            "divideexponent4" => Some(Self::DivideExponent4),
            _ => None,
        }
    }
}

//! # Numeric Coercion
//!
//! Legacy-compatible lenient number parsing.
//!
//! Object files written for older tools routinely contain numbers such as
//! `12ab` or `1 .5`. Those must keep loading with the value older tools
//! read from them, so parsing retries on ever shorter prefixes of the
//! whitespace-free text before giving up.
//!
//! ## Example
//!
//! ```rust
//! use b3d_syntax::{parse_lenient, ParseOutcome};
//!
//! let exact = parse_lenient::<i32>("12", 0);
//! assert_eq!((exact.value, exact.outcome), (12, ParseOutcome::Exact));
//!
//! let partial = parse_lenient::<i32>("12ab", 0);
//! assert_eq!((partial.value, partial.outcome), (12, ParseOutcome::Partial));
//!
//! let failed = parse_lenient::<i32>("ab", 7);
//! assert_eq!((failed.value, failed.outcome), (7, ParseOutcome::Failed));
//! ```

use std::fmt;

// =============================================================================
// PARSE PRIMITIVES
// =============================================================================

/// A number type with a strict, culture-invariant parse primitive.
pub trait LenientNumber: Copy + PartialOrd + fmt::Display {
    /// Parses the whole text or nothing.
    fn parse_exact(text: &str) -> Option<Self>;
}

impl LenientNumber for i32 {
    fn parse_exact(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl LenientNumber for f64 {
    fn parse_exact(text: &str) -> Option<Self> {
        text.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

/// How a value was obtained from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The whole text parsed.
    Exact,
    /// Only a right-truncated prefix of the whitespace-free text parsed.
    Partial,
    /// Nothing parsed; the value is the caller's default.
    Failed,
}

/// A value together with the way it was parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced<T> {
    pub value: T,
    pub outcome: ParseOutcome,
}

/// Parses `text` leniently, falling back to `default`.
///
/// The trimmed text is tried first. On failure all whitespace is removed
/// and the last character is dropped repeatedly until a prefix parses or
/// nothing is left.
pub fn parse_lenient<T: LenientNumber>(text: &str, default: T) -> Coerced<T> {
    if let Some(value) = T::parse_exact(text.trim()) {
        return Coerced {
            value,
            outcome: ParseOutcome::Exact,
        };
    }

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut end = compact.len();
    while end > 0 {
        if let Some(value) = T::parse_exact(&compact[..end]) {
            return Coerced {
                value,
                outcome: ParseOutcome::Partial,
            };
        }
        end = compact[..end]
            .char_indices()
            .next_back()
            .map_or(0, |(index, _)| index);
    }

    Coerced {
        value: default,
        outcome: ParseOutcome::Failed,
    }
}

// =============================================================================
// RANGES
// =============================================================================

/// Inclusive bounds a value is clamped to. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

/// A bound a value violated, with the wording legacy tools used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeViolation<T> {
    /// Only an upper bound exists and the value exceeded it.
    AboveMax { max: T },
    /// Only a lower bound exists and the value fell below it.
    BelowMin { min: T },
    /// Both bounds exist and one of them was violated.
    Outside { min: T, max: T },
}

impl<T: fmt::Display> fmt::Display for RangeViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AboveMax { max } => write!(f, "must be at most {max}"),
            Self::BelowMin { min } => write!(f, "must be at least {min}"),
            Self::Outside { min, max } => {
                write!(f, "must be within the range from {min} to {max}")
            }
        }
    }
}

impl<T: LenientNumber> NumericRange<T> {
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Clamps `value` into the range and reports which bound was hit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use b3d_syntax::{NumericRange, RangeViolation};
    ///
    /// let range = NumericRange::between(0, 255);
    /// assert_eq!(range.clamp(300), (255, Some(RangeViolation::Outside { min: 0, max: 255 })));
    /// assert_eq!(range.clamp(17), (17, None));
    /// ```
    pub fn clamp(&self, value: T) -> (T, Option<RangeViolation<T>>) {
        match (self.min, self.max) {
            (None, None) => (value, None),
            (None, Some(max)) if value > max => (max, Some(RangeViolation::AboveMax { max })),
            (Some(min), None) if value < min => (min, Some(RangeViolation::BelowMin { min })),
            (Some(min), Some(max)) if value < min => {
                (min, Some(RangeViolation::Outside { min, max }))
            }
            (Some(min), Some(max)) if value > max => {
                (max, Some(RangeViolation::Outside { min, max }))
            }
            _ => (value, None),
        }
    }
}

impl<T: LenientNumber> Default for NumericRange<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

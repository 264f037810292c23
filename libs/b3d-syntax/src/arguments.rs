//! # Argument Extraction
//!
//! Typed access to a line's arguments. Every problem (missing, unparsable,
//! truncated or out-of-range values) is reported to the sink, and the caller
//! gets the best value available.

use crate::diagnostic::{Diagnostic, DiagnosticSink, Location};
use crate::numeric::{parse_lenient, LenientNumber, NumericRange, ParseOutcome};

/// Arguments of one command, plus what is needed to word diagnostics.
///
/// # Example
///
/// ```rust
/// use b3d_syntax::{Arguments, Diagnostic, Location, NumericRange};
///
/// let values = vec!["1.5".to_string(), "12ab".to_string()];
/// let location = Location::new("train.csv", 4);
/// let arguments = Arguments::new(&values, "AddVertex", &location, true);
/// let mut sink: Vec<Diagnostic> = Vec::new();
///
/// assert_eq!(arguments.double(&mut sink, 0, "vX", 0.0), 1.5);
/// assert_eq!(arguments.double(&mut sink, 1, "vY", 0.0), 12.0);
/// assert_eq!(arguments.double(&mut sink, 2, "vZ", 0.0), 0.0);
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [String],
    command: &'a str,
    location: &'a Location,
    strict: bool,
}

impl<'a> Arguments<'a> {
    pub fn new(values: &'a [String], command: &'a str, location: &'a Location, strict: bool) -> Self {
        Self {
            values,
            command,
            location,
            strict,
        }
    }

    /// Number of arguments supplied.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The command name diagnostics refer to.
    #[inline]
    pub fn command(&self) -> &'a str {
        self.command
    }

    /// The location diagnostics refer to.
    #[inline]
    pub fn location(&self) -> &'a Location {
        self.location
    }

    /// Raw text of an argument, or `None` if it is missing or empty.
    pub fn text(&self, index: usize) -> Option<&'a str> {
        self.values
            .get(index)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Optional, unbounded floating-point argument.
    pub fn double(&self, sink: &mut dyn DiagnosticSink, index: usize, name: &str, default: f64) -> f64 {
        self.double_in(sink, index, name, default, NumericRange::unbounded())
    }

    /// Optional floating-point argument clamped to `range`.
    pub fn double_in(
        &self,
        sink: &mut dyn DiagnosticSink,
        index: usize,
        name: &str,
        default: f64,
        range: NumericRange<f64>,
    ) -> f64 {
        self.coerce(sink, index, name, default, false, range)
            .unwrap_or(default)
    }

    /// Optional integer argument clamped to `range`.
    pub fn int(
        &self,
        sink: &mut dyn DiagnosticSink,
        index: usize,
        name: &str,
        default: i32,
        range: NumericRange<i32>,
    ) -> i32 {
        self.coerce(sink, index, name, default, false, range)
            .unwrap_or(default)
    }

    /// Required integer argument.
    ///
    /// Returns `None` if the argument is missing or nothing of it parses;
    /// both cases are reported.
    pub fn required_int(
        &self,
        sink: &mut dyn DiagnosticSink,
        index: usize,
        name: &str,
        range: NumericRange<i32>,
    ) -> Option<i32> {
        self.coerce(sink, index, name, 0, true, range)
    }

    /// Reports an error about this command at this location.
    pub fn error(&self, sink: &mut dyn DiagnosticSink, message: impl Into<String>) {
        sink.report(Diagnostic::error(message, self.location.clone()));
    }

    /// Reports a warning about this command at this location.
    pub fn warning(&self, sink: &mut dyn DiagnosticSink, message: impl Into<String>) {
        sink.report(Diagnostic::warning(message, self.location.clone()));
    }

    fn coerce<T: LenientNumber>(
        &self,
        sink: &mut dyn DiagnosticSink,
        index: usize,
        name: &str,
        default: T,
        required: bool,
        range: NumericRange<T>,
    ) -> Option<T> {
        let Some(raw) = self.text(index) else {
            if required {
                self.error(
                    sink,
                    format!("Argument {} ({name}) is required in {}", index + 1, self.command),
                );
                return None;
            }
            return Some(default);
        };

        let coerced = parse_lenient(raw, default);
        match coerced.outcome {
            ParseOutcome::Exact => {}
            ParseOutcome::Partial => {
                if self.strict {
                    self.warning(
                        sink,
                        format!(
                            "Argument {} ({name}) in {} is malformed and was read as {}",
                            index + 1,
                            self.command,
                            coerced.value
                        ),
                    );
                }
            }
            ParseOutcome::Failed => {
                self.error(
                    sink,
                    format!("Invalid argument {} ({name}) in {}", index + 1, self.command),
                );
                return if required { None } else { Some(default) };
            }
        }

        let (value, violation) = range.clamp(coerced.value);
        if let Some(violation) = violation {
            self.error(sink, format!("{name} in {} {violation}", self.command));
        }
        Some(value)
    }
}

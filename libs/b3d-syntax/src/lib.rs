//! # B3D Syntax
//!
//! Line-oriented syntax layer for CSV/B3D object files.
//!
//! ## Architecture
//!
//! ```text
//! raw line → tokenizer (command + arguments) → Command::resolve
//!                                            → Arguments (numeric coercion)
//! ```
//!
//! Nothing in this crate aborts on malformed input. Problems are turned
//! into [`Diagnostic`] values and handed to a [`DiagnosticSink`].
//!
//! ## Example
//!
//! ```rust
//! use b3d_syntax::{tokenize_line, Command, Dialect};
//!
//! let line = tokenize_line(Dialect::Csv, "AddVertex, 1, 2, 3 ; corner").unwrap();
//! let resolution = Command::resolve(&line.command, Dialect::Csv).unwrap();
//! assert_eq!(resolution.command, Command::AddVertex);
//! assert_eq!(line.argument_count(), 3);
//! ```

pub mod arguments;
pub mod command;
pub mod diagnostic;
pub mod dialect;
pub mod numeric;
pub mod tokenizer;

pub use arguments::Arguments;
pub use command::{Arity, Command, Resolution};
pub use diagnostic::{Diagnostic, DiagnosticSink, Location, LogSink, Severity};
pub use dialect::Dialect;
pub use numeric::{parse_lenient, Coerced, LenientNumber, NumericRange, ParseOutcome, RangeViolation};
pub use tokenizer::{tokenize_line, TokenizedLine};

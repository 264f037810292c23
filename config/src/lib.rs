//! # Config Crate
//!
//! Centralized configuration constants for the CSV/B3D object pipeline.
//! Every literal shared between the syntax, mesh and decoder crates is
//! defined here so the crates stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DecoderConfig, COLOR_CHANNEL_MAX, MIN_CYLINDER_SEGMENTS};
//!
//! let config = DecoderConfig::default();
//! assert!(config.strict);
//!
//! let requested_segments = 1;
//! let segments = requested_segments.max(MIN_CYLINDER_SEGMENTS);
//! assert_eq!(segments, 2);
//! assert_eq!(COLOR_CHANNEL_MAX, 255);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Legacy Compatible**: Defaults match what existing object files expect

pub mod constants;

//! # Primitives
//!
//! Shapes generated straight into a builder (cube, cylinder). Each primitive
//! emits faces in its own 0-based indices, shifted by the builder's vertex
//! count at the time of the call.

pub mod cube;
pub mod cylinder;

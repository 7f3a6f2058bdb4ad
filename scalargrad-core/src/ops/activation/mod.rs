// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear squashing functions on a single scalar.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): Hyperbolic tangent.

pub mod tanh;

// Re-export key functions
pub use tanh::tanh_op;

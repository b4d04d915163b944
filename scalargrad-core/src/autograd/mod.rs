//! # Automatic Differentiation Module (autograd)
//!
//! Reverse-mode machinery: the backward pass driver (topological sort over
//! the arena, then reverse gradient accumulation) and the finite-difference
//! gradient checker used to validate derivative rules.

pub mod backward;
pub mod grad_check;

pub use grad_check::{check_gradients, GradCheckError};

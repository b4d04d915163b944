// Declare the main modules of the crate
pub mod autograd;
pub mod graph;
pub mod ops;

// Declare new top-level modules
pub mod nn;
pub mod optim;
pub mod utils;

// Re-export the core handle types so they are accessible directly via
// `scalargrad_core::{Graph, Value}`.
pub use graph::{Graph, NodeId, Op, Value};

pub mod error;
pub use error::ScalarGradError;

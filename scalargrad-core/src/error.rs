use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// Covers precondition violations raised while building a computation graph
/// or driving the neural-network layers. Numeric degeneracy (infinities, NaN)
/// is deliberately *not* represented here: an overflowing `exp` or a division
/// by a zero-valued node propagates through `data`/`grad` as a non-finite
/// number for the caller to inspect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScalarGradError {
    /// Error when an operation combines nodes owned by different graphs.
    #[error("Operands belong to different graphs (Operation: '{operation}')")]
    GraphMismatch {
        /// The name of the operation where the mismatch occurred.
        operation: String,
    },

    /// Error when a node id does not refer to a node of the graph it is
    /// presented to.
    #[error("Node index {index} is out of bounds for a graph of {len} nodes")]
    NodeOutOfBounds { index: usize, len: usize },

    /// Error when a layer or loss receives a slice of the wrong length
    /// (e.g. a neuron fed fewer inputs than it has weights).
    #[error("Input size mismatch (Operation: '{operation}'): expected {expected}, got {actual}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        /// The name of the operation where the mismatch occurred.
        operation: String,
    },
}

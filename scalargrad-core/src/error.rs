use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// Numeric domain problems (division by a zero-valued node, a fractional power of a
/// negative base, `exp` overflow) are not represented here: they surface as IEEE
/// infinities or NaNs in the node values, exactly as the host math library produces them.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Node belongs to graph {actual}, but was used with graph {expected}")]
    ForeignNode { expected: u64, actual: u64 },

    #[error("Node index {index} out of bounds for graph with {len} nodes")]
    NodeNotFound { index: usize, len: usize },

    /// The arena was already borrowed when an operation needed it. Public methods
    /// never hold a borrow across user code, so this only surfaces from re-entrant
    /// use inside the crate.
    #[error("Graph storage already borrowed: {0}")]
    BorrowConflict(String),
}

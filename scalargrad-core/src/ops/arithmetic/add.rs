// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_binary_op, Operand};
use crate::types::Scalar;

// --- Forward Operation ---

/// Adds two operands.
///
/// Either operand may be an existing node or a raw number; a raw number becomes a fresh
/// implicit leaf. The new node depends on `(lhs, rhs)` in that order.
pub fn add_op<T, A, B>(graph: &Graph<T>, lhs: A, rhs: B) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    A: Into<Operand<T>>,
    B: Into<Operand<T>>,
{
    apply_binary_op(
        graph,
        lhs.into(),
        rhs.into(),
        |a, b| a + b,
        |lhs, rhs| BackwardOp::Add { lhs, rhs },
        "add_op",
    )
}

// --- Backward Operation ---

/// Local rule of `out = a + b`: both inputs receive the upstream gradient unchanged.
pub(crate) fn add_backward<T: Scalar>(grad_output: T) -> (T, T) {
    (grad_output, grad_output)
}

// --- Graph Method (calls fallible function) ---

impl<T: Scalar> Graph<T> {
    pub fn add<A, B>(&self, lhs: A, rhs: B) -> Result<NodeId, ScalarGradError>
    where
        A: Into<Operand<T>>,
        B: Into<Operand<T>>,
    {
        add_op(self, lhs, rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

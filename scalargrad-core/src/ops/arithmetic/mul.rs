use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_binary_op, Operand};
use crate::types::Scalar;

/// Multiplies two operands.
///
/// Either operand may be an existing node or a raw number (wrapped in a fresh implicit
/// leaf). Multiplying a node by itself records the same dependency twice, so its
/// gradient receives both contributions.
pub fn mul_op<T, A, B>(graph: &Graph<T>, lhs: A, rhs: B) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    A: Into<Operand<T>>,
    B: Into<Operand<T>>,
{
    apply_binary_op(
        graph,
        lhs.into(),
        rhs.into(),
        |a, b| a * b,
        |lhs, rhs| BackwardOp::Mul { lhs, rhs },
        "mul_op",
    )
}

/// Local rule of `out = a * b`:
/// `grad_a = b * grad_out`, `grad_b = a * grad_out`.
pub(crate) fn mul_backward<T: Scalar>(a: T, b: T, grad_output: T) -> (T, T) {
    (b * grad_output, a * grad_output)
}

impl<T: Scalar> Graph<T> {
    pub fn mul<A, B>(&self, lhs: A, rhs: B) -> Result<NodeId, ScalarGradError>
    where
        A: Into<Operand<T>>,
        B: Into<Operand<T>>,
    {
        mul_op(self, lhs, rhs)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

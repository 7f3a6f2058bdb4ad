use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::{resolve_operand, Operand};
use crate::types::Scalar;

// --- Forward Operation ---

/// Subtracts `rhs` from `lhs`.
///
/// Built as `lhs + neg(rhs)`. A raw-number operand on either side becomes a fresh
/// implicit leaf first, so `x - 3.0` has the same shape as `x - leaf(3.0)`.
pub fn sub_op<T, A, B>(graph: &Graph<T>, lhs: A, rhs: B) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    A: Into<Operand<T>>,
    B: Into<Operand<T>>,
{
    let lhs = resolve_operand(graph, lhs.into())?;
    let negated = neg_op(graph, rhs)?;
    add_op(graph, lhs, negated)
}

impl<T: Scalar> Graph<T> {
    pub fn sub<A, B>(&self, lhs: A, rhs: B) -> Result<NodeId, ScalarGradError>
    where
        A: Into<Operand<T>>,
        B: Into<Operand<T>>,
    {
        sub_op(self, lhs, rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;

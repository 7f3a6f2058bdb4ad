use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::ops::{resolve_operand, Operand};
use crate::types::Scalar;

/// Divides `lhs` by `rhs`.
///
/// Built as `lhs * rhs^-1`. A raw-number divisor is wrapped in a fresh implicit leaf
/// and raised to `-1` like any other node.
///
/// # Domain Considerations
/// Dividing by a zero-valued node is not an error: the reciprocal is an infinity and
/// the product follows IEEE rules (infinity or NaN).
pub fn div_op<T, A, B>(graph: &Graph<T>, lhs: A, rhs: B) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    A: Into<Operand<T>>,
    B: Into<Operand<T>>,
{
    let lhs = resolve_operand(graph, lhs.into())?;
    let reciprocal = pow_op(graph, rhs, -T::one())?;
    mul_op(graph, lhs, reciprocal)
}

impl<T: Scalar> Graph<T> {
    pub fn div<A, B>(&self, lhs: A, rhs: B) -> Result<NodeId, ScalarGradError>
    where
        A: Into<Operand<T>>,
        B: Into<Operand<T>>,
    {
        div_op(self, lhs, rhs)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

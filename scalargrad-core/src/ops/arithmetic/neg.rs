use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::{resolve_operand, Operand};
use crate::types::Scalar;

/// Negates an operand.
///
/// Built as `input * -1`, where `-1` is a fresh implicit leaf; no dedicated backward
/// rule exists, the gradient flows through the multiplication.
pub fn neg_op<T, A>(graph: &Graph<T>, input: A) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    A: Into<Operand<T>>,
{
    let input = resolve_operand(graph, input.into())?;
    mul_op(graph, input, Operand::Constant(-T::one()))
}

impl<T: Scalar> Graph<T> {
    pub fn neg<A>(&self, input: A) -> Result<NodeId, ScalarGradError>
    where
        A: Into<Operand<T>>,
    {
        neg_op(self, input)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;

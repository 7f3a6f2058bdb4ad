use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_unary_op, Operand};
use crate::types::Scalar;

/// Applies the hyperbolic tangent to an operand.
///
/// The output lies in `(-1, 1)`; it saturates to exactly `±1` for large inputs, where
/// the gradient becomes zero.
pub fn tanh_op<T, A>(graph: &Graph<T>, input: A) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    A: Into<Operand<T>>,
{
    apply_unary_op(
        graph,
        input.into(),
        |x| x.tanh(),
        |input| BackwardOp::Tanh { input },
        "tanh_op",
    )
}

/// Local rule of `t = tanh(x)`: `grad_x = (1 - t^2) * grad_t`, using the stored output.
pub(crate) fn tanh_backward<T: Scalar>(output_value: T, grad_output: T) -> T {
    (T::one() - output_value * output_value) * grad_output
}

impl<T: Scalar> Graph<T> {
    pub fn tanh<A>(&self, input: A) -> Result<NodeId, ScalarGradError>
    where
        A: Into<Operand<T>>,
    {
        tanh_op(self, input)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;

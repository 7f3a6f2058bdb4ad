// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_unary_op, Operand};
use crate::types::Scalar;

/// Computes the exponential \( e^x \) of an operand.
///
/// This operation supports automatic differentiation.
///
/// # Domain Considerations
/// Large inputs overflow to `+inf` (about 709.8 for `f64`, 88.7 for `f32`); the value is
/// stored as is and no error is raised.
pub fn exp_op<T, A>(graph: &Graph<T>, input: A) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    A: Into<Operand<T>>,
{
    apply_unary_op(
        graph,
        input.into(),
        |x| x.exp(),
        |input| BackwardOp::Exp { input },
        "exp_op",
    )
}

/// Computes the gradient for \( z = e^x \).
///
/// Since \( \frac{dz}{dx} = e^x = z \), the rule reuses the node's own forward value:
/// \\[ \frac{dL}{dx} = z \cdot \frac{dL}{dz} \\]
pub(crate) fn exp_backward<T: Scalar>(output_value: T, grad_output: T) -> T {
    output_value * grad_output
}

impl<T: Scalar> Graph<T> {
    pub fn exp<A>(&self, input: A) -> Result<NodeId, ScalarGradError>
    where
        A: Into<Operand<T>>,
    {
        exp_op(self, input)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests; // Link to the test file

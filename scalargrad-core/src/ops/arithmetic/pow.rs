// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_unary_op, Operand};
use crate::types::Scalar;

/// Raises `base` to a constant real `exponent`.
///
/// The exponent is a plain number, never a node: no gradient flows to it.
///
/// # Domain Considerations
/// A fractional exponent of a negative base yields NaN, and a negative exponent of a
/// zero base yields an infinity, as `powf` does. Neither is reported as an error.
pub fn pow_op<T, A>(graph: &Graph<T>, base: A, exponent: T) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    A: Into<Operand<T>>,
{
    apply_unary_op(
        graph,
        base.into(),
        |x| x.powf(exponent),
        |base| BackwardOp::Pow { base, exponent },
        "pow_op",
    )
}

/// Local rule of `out = x ^ k`: `grad_x = k * x^(k-1) * grad_out`.
pub(crate) fn pow_backward<T: Scalar>(base: T, exponent: T, grad_output: T) -> T {
    exponent * base.powf(exponent - T::one()) * grad_output
}

impl<T: Scalar> Graph<T> {
    pub fn pow<A>(&self, base: A, exponent: T) -> Result<NodeId, ScalarGradError>
    where
        A: Into<Operand<T>>,
    {
        pow_op(self, base, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;

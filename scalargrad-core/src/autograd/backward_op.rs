use crate::node::NodeId;
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use crate::ops::math_elem::exp::exp_backward;
use crate::types::Scalar;

/// The local derivative rule attached to a node.
///
/// Every node produced by an operation stores one of these variants. A variant records
/// the operation kind, the ids of the input nodes it was computed from (in order) and any
/// extra constant captured at construction (the exponent of `Pow`). The backward engine
/// interprets it generically, so nodes never hold closures or references to each other.
///
/// Composite operations (`neg`, `sub`, `div`) have no variant of their own: they are
/// expressed through `Add`, `Mul` and `Pow` when they are built.
#[derive(Debug, Clone, PartialEq)]
pub enum BackwardOp<T: Scalar> {
    /// A node created from a raw number. Its local rule is a no-op.
    Leaf,
    /// `out = lhs + rhs`
    Add { lhs: NodeId, rhs: NodeId },
    /// `out = lhs * rhs`
    Mul { lhs: NodeId, rhs: NodeId },
    /// `out = base ^ exponent`, with a constant exponent.
    Pow { base: NodeId, exponent: T },
    /// `out = e ^ input`
    Exp { input: NodeId },
    /// `out = tanh(input)`
    Tanh { input: NodeId },
}

impl<T: Scalar> BackwardOp<T> {
    /// Returns the ids of the nodes this operation read during the forward pass.
    ///
    /// The order matches the operand order of the forward call and is the order the
    /// topological sort visits them in. Leaves return an empty list.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => vec![],
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Exp { input } | BackwardOp::Tanh { input } => vec![input],
        }
    }

    /// Diagnostic tag of the producing operation.
    pub fn tag(&self) -> String {
        match self {
            BackwardOp::Leaf => "leaf".to_string(),
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("**{}", exponent),
            BackwardOp::Exp { .. } => "exp".to_string(),
            BackwardOp::Tanh { .. } => "tanh".to_string(),
        }
    }

    /// Computes the gradient contribution this node sends to each of its inputs.
    ///
    /// `output_value` and `grad_output` are the value and (final) accumulated gradient of
    /// the node owning this rule. `value_of` reads the forward value of an input node.
    ///
    /// # Returns
    /// One `(input, contribution)` pair per input, in the same order as [`inputs`](Self::inputs).
    /// The caller adds each contribution into the input's gradient; nothing is overwritten.
    pub fn backward<F>(&self, output_value: T, grad_output: T, value_of: F) -> Vec<(NodeId, T)>
    where
        F: Fn(NodeId) -> T,
    {
        match *self {
            BackwardOp::Leaf => vec![],
            BackwardOp::Add { lhs, rhs } => {
                let (grad_lhs, grad_rhs) = add_backward(grad_output);
                vec![(lhs, grad_lhs), (rhs, grad_rhs)]
            }
            BackwardOp::Mul { lhs, rhs } => {
                let (grad_lhs, grad_rhs) = mul_backward(value_of(lhs), value_of(rhs), grad_output);
                vec![(lhs, grad_lhs), (rhs, grad_rhs)]
            }
            BackwardOp::Pow { base, exponent } => {
                vec![(base, pow_backward(value_of(base), exponent, grad_output))]
            }
            BackwardOp::Exp { input } => vec![(input, exp_backward(output_value, grad_output))],
            BackwardOp::Tanh { input } => vec![(input, tanh_backward(output_value, grad_output))],
        }
    }
}

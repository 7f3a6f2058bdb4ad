//! # Scalar Operations Module (`ops`)
//!
//! This module serves as the central hub for the operation constructors of ScalarGrad.
//! Operations are categorized into submodules based on their functionality.
//!
//! ## Structure:
//!
//! - **Submodules:** Operations are grouped logically (`arithmetic`, `math_elem`, `activation`).
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`) that computes
//!   the forward value, appends the new node to the graph and attaches its local
//!   derivative rule. `Graph` methods (`graph.add(..)`, `graph.tanh(..)`) and the `Var`
//!   operators forward to these functions.
//! - **`xxx_backward` Functions:** The local partial derivatives of each primitive
//!   operation, called by [`BackwardOp::backward`](crate::autograd::BackwardOp::backward).
//!   Composite operations (`neg`, `sub`, `div`) are built out of primitives and have none.
//! - **[`Operand`]:** Every operand may be an existing node or a raw number. A raw number
//!   is always wrapped into a fresh implicit leaf, never shared with another node.

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId};
use crate::types::Scalar;
use crate::var::Var;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// An operand of an operation constructor: an existing node, or a raw number that will
/// become a fresh implicit leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T> {
    Node(NodeId),
    Constant(T),
}

impl<T> From<NodeId> for Operand<T> {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl<'g, T: Scalar> From<Var<'g, T>> for Operand<T> {
    fn from(var: Var<'g, T>) -> Self {
        Operand::Node(var.id())
    }
}

impl<'g, T: Scalar> From<&Var<'g, T>> for Operand<T> {
    fn from(var: &Var<'g, T>) -> Self {
        Operand::Node(var.id())
    }
}

impl From<f32> for Operand<f32> {
    fn from(value: f32) -> Self {
        Operand::Constant(value)
    }
}

impl From<f64> for Operand<f64> {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

/// Turns an operand into a node id of `graph`: validates an existing id, or creates an
/// implicit leaf for a constant.
pub(crate) fn resolve_operand<T: Scalar>(
    graph: &Graph<T>,
    operand: Operand<T>,
) -> Result<NodeId, ScalarGradError> {
    match operand {
        Operand::Node(id) => {
            graph.check_node(id)?;
            Ok(id)
        }
        Operand::Constant(value) => graph.leaf(value),
    }
}

/// Applies a unary primitive operation.
///
/// Handles operand resolution, forward computation from the input's value and node
/// creation with the local rule produced by `backward_builder`.
///
/// # Arguments
/// * `graph`: The graph receiving the new node.
/// * `input`: The operand.
/// * `forward`: Closure computing the output value from the input value.
/// * `backward_builder`: Closure building the `BackwardOp` from the resolved input id.
/// * `op_name`: Name of the operation for logging.
pub(crate) fn apply_unary_op<T, F, B>(
    graph: &Graph<T>,
    input: Operand<T>,
    forward: F,
    backward_builder: B,
    op_name: &str,
) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    F: Fn(T) -> T,
    B: FnOnce(NodeId) -> BackwardOp<T>,
{
    let input = resolve_operand(graph, input)?;
    let value = forward(graph.value(input)?);
    let output = graph.push_node(NodeData::new(value, backward_builder(input)))?;
    log::trace!("[{}] {} = f({}) -> {}", op_name, output, input, value);
    Ok(output)
}

/// Applies a binary primitive operation. Operands are resolved left to right, so
/// implicit leaves are created in operand order.
pub(crate) fn apply_binary_op<T, F, B>(
    graph: &Graph<T>,
    lhs: Operand<T>,
    rhs: Operand<T>,
    forward: F,
    backward_builder: B,
    op_name: &str,
) -> Result<NodeId, ScalarGradError>
where
    T: Scalar,
    F: Fn(T, T) -> T,
    B: FnOnce(NodeId, NodeId) -> BackwardOp<T>,
{
    let lhs = resolve_operand(graph, lhs)?;
    let rhs = resolve_operand(graph, rhs)?;
    let value = forward(graph.value(lhs)?, graph.value(rhs)?);
    let output = graph.push_node(NodeData::new(value, backward_builder(lhs, rhs)))?;
    log::trace!("[{}] {} = f({}, {}) -> {}", op_name, output, lhs, rhs, value);
    Ok(output)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

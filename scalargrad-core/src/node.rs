// src/node.rs
use std::fmt;

use crate::autograd::BackwardOp;
use crate::types::Scalar;

/// Identity of a node inside a [`Graph`](crate::graph::Graph).
///
/// A `NodeId` is the pair (owning graph id, arena index). Two nodes holding the same
/// numeric value are still distinct nodes; all visited-set bookkeeping during the
/// backward pass is keyed on this identity, never on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: u64,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in its graph's arena (creation order).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Id of the graph that owns this node.
    pub fn graph_id(&self) -> u64 {
        self.graph
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Internal storage for a single scalar node.
///
/// `value` is fixed at construction. `grad` only changes through accumulation
/// (`+=`) during a backward pass, the root seed, or an explicit `zero_grad`.
#[derive(Debug, Clone)]
pub struct NodeData<T: Scalar> {
    /// Forward-computed value.
    pub(crate) value: T,
    /// Accumulated d(root)/d(self). Starts at zero.
    pub(crate) grad: T,
    /// The local derivative rule, also recording the node's dependencies.
    /// Leaves carry `BackwardOp::Leaf`.
    pub(crate) op: BackwardOp<T>,
    /// Optional human-readable name. Cosmetic only.
    pub(crate) label: Option<String>,
}

impl<T: Scalar> NodeData<T> {
    pub(crate) fn new(value: T, op: BackwardOp<T>) -> Self {
        NodeData {
            value,
            grad: T::zero(),
            op,
            label: None,
        }
    }

    pub(crate) fn leaf(value: T) -> Self {
        Self::new(value, BackwardOp::Leaf)
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn grad(&self) -> T {
        self.grad
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn op(&self) -> &BackwardOp<T> {
        &self.op
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op, BackwardOp::Leaf)
    }
}

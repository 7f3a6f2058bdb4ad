// src/graph/mod.rs

use crate::error::ScalarGradError;
use crate::node::{NodeData, NodeId};
use crate::types::Scalar;
use crate::var::Var;
use std::cell::{Ref, RefCell, RefMut};
use std::sync::atomic::{AtomicU64, Ordering};

mod accessors;
mod autograd_methods;
mod debug;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// An append-only arena holding every node of one or more scalar expressions.
///
/// `Graph` uses `RefCell<Vec<NodeData<T>>>` internally so that:
/// 1.  **Shared handles:** nodes are referred to by `Copy` ids ([`NodeId`]) or by
///     lightweight [`Var`] handles borrowing the graph, never by owning pointers. The
///     dependency edges are indices into the arena, so no reference cycles can form.
/// 2.  **Interior mutability:** operations append nodes and the backward pass
///     accumulates gradients through a shared `&Graph`.
///
/// Nodes live as long as the graph. Every graph gets a process-unique id which is
/// stamped into each `NodeId`, so ids from another graph are rejected instead of
/// silently aliasing an unrelated node.
pub struct Graph<T: Scalar = f64> {
    id: u64,
    pub(crate) nodes: RefCell<Vec<NodeData<T>>>,
}

impl<T: Scalar> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Process-unique id of this graph.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of nodes created in this graph so far (leaves and implicit leaves included).
    ///
    /// Never panics: reports 0 while the arena is mutably borrowed inside the crate.
    pub fn len(&self) -> usize {
        self.nodes.try_borrow().map(|nodes| nodes.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a leaf node wrapping a raw number.
    pub fn leaf(&self, value: T) -> Result<NodeId, ScalarGradError> {
        self.push_node(NodeData::leaf(value))
    }

    /// Creates a leaf node with a cosmetic label.
    pub fn labeled_leaf(&self, value: T, label: &str) -> Result<NodeId, ScalarGradError> {
        let mut node = NodeData::leaf(value);
        node.label = Some(label.to_string());
        self.push_node(node)
    }

    /// Creates a leaf and returns a [`Var`] handle to it.
    ///
    /// # Panics
    /// Panics if the graph storage is currently borrowed (for instance from inside a
    /// backward observer).
    pub fn var(&self, value: T) -> Var<'_, T> {
        let id = self
            .leaf(value)
            .unwrap_or_else(|e| panic!("Graph::var failed to create leaf: {}", e));
        Var::new(self, id)
    }

    /// Creates a labeled leaf and returns a [`Var`] handle to it.
    ///
    /// # Panics
    /// Same conditions as [`var`](Self::var).
    pub fn labeled_var(&self, value: T, label: &str) -> Var<'_, T> {
        let id = self
            .labeled_leaf(value, label)
            .unwrap_or_else(|e| panic!("Graph::labeled_var failed to create leaf: {}", e));
        Var::new(self, id)
    }

    /// Wraps an existing node id of this graph into a [`Var`] handle.
    pub fn handle(&self, id: NodeId) -> Result<Var<'_, T>, ScalarGradError> {
        self.check_node(id)?;
        Ok(Var::new(self, id))
    }

    /// Verifies that `id` was issued by this graph and points inside the arena.
    pub(crate) fn check_node(&self, id: NodeId) -> Result<(), ScalarGradError> {
        if id.graph != self.id {
            return Err(ScalarGradError::ForeignNode {
                expected: self.id,
                actual: id.graph,
            });
        }
        let len = self.read_nodes()?.len();
        if id.index >= len {
            return Err(ScalarGradError::NodeNotFound {
                index: id.index,
                len,
            });
        }
        Ok(())
    }

    /// Appends a node and returns its id. The node's dependencies must already be
    /// validated against this graph.
    pub(crate) fn push_node(&self, node: NodeData<T>) -> Result<NodeId, ScalarGradError> {
        let mut nodes = self.write_nodes()?;
        let index = nodes.len();
        nodes.push(node);
        Ok(NodeId {
            graph: self.id,
            index,
        })
    }

    pub(crate) fn read_nodes(&self) -> Result<Ref<'_, Vec<NodeData<T>>>, ScalarGradError> {
        self.nodes.try_borrow().map_err(|_| {
            ScalarGradError::BorrowConflict("graph nodes are mutably borrowed".to_string())
        })
    }

    pub(crate) fn write_nodes(&self) -> Result<RefMut<'_, Vec<NodeData<T>>>, ScalarGradError> {
        self.nodes.try_borrow_mut().map_err(|_| {
            ScalarGradError::BorrowConflict("graph nodes are already borrowed".to_string())
        })
    }
}

impl<T: Scalar> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId};
use crate::types::Scalar;

impl<T: Scalar> Graph<T> {
    /// Forward value of a node. Never recomputed; reading it has no side effect.
    pub fn value(&self, id: NodeId) -> Result<T, ScalarGradError> {
        self.with_node(id, |node| node.value)
    }

    /// Accumulated gradient of a node. Zero until a backward pass reaches it.
    pub fn grad(&self, id: NodeId) -> Result<T, ScalarGradError> {
        self.with_node(id, |node| node.grad)
    }

    pub fn label(&self, id: NodeId) -> Result<Option<String>, ScalarGradError> {
        self.with_node(id, |node| node.label.clone())
    }

    /// Replaces the cosmetic label of any node, leaf or not.
    pub fn set_label(&self, id: NodeId, label: &str) -> Result<(), ScalarGradError> {
        self.check_node(id)?;
        self.write_nodes()?[id.index].label = Some(label.to_string());
        Ok(())
    }

    /// Tag of the operation that produced the node (`"leaf"` for leaves).
    pub fn op_tag(&self, id: NodeId) -> Result<String, ScalarGradError> {
        self.with_node(id, |node| node.op.tag())
    }

    /// Direct dependencies of a node, in operand order.
    pub fn dependencies(&self, id: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        self.with_node(id, |node| node.op.inputs())
    }

    pub fn is_leaf(&self, id: NodeId) -> Result<bool, ScalarGradError> {
        self.with_node(id, |node| node.is_leaf())
    }

    /// Snapshot of a node's full record.
    pub fn node(&self, id: NodeId) -> Result<NodeData<T>, ScalarGradError> {
        self.with_node(id, |node| node.clone())
    }

    fn with_node<R, F>(&self, id: NodeId, f: F) -> Result<R, ScalarGradError>
    where
        F: FnOnce(&NodeData<T>) -> R,
    {
        self.check_node(id)?;
        let nodes = self.read_nodes()?;
        Ok(f(&nodes[id.index]))
    }
}

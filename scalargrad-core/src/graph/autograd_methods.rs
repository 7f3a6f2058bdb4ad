use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;

impl<T: Scalar> Graph<T> {
    /// Performs the backward pass starting from `root`.
    ///
    /// Computes d(root)/d(node) for `root` and every node reachable from it through its
    /// dependencies:
    /// 1. builds the depth-first post-order of the reachable sub-graph,
    /// 2. force-sets `root`'s gradient to one (the seed),
    /// 3. runs every node's local rule in reverse order, root first, each one adding its
    ///    contributions into the gradients of its inputs.
    ///
    /// Gradients are never reset: calling `backward` again on the same or an overlapping
    /// graph adds on top of the previous results. Use [`zero_grad`](Self::zero_grad)
    /// explicitly if a fresh pass is wanted.
    ///
    /// # Errors
    /// Returns `ScalarGradError` if `root` does not belong to this graph or the graph
    /// storage is already borrowed.
    pub fn backward(&self, root: NodeId) -> Result<(), ScalarGradError> {
        self.backward_with_observer(root, |_| {})
    }

    /// Same as [`backward`](Self::backward), calling `observer` with each node id right
    /// before that node's local rule runs.
    ///
    /// The graph is not borrowed while the observer runs, so it may read values and
    /// gradients of any node.
    pub fn backward_with_observer<F>(&self, root: NodeId, mut observer: F) -> Result<(), ScalarGradError>
    where
        F: FnMut(NodeId),
    {
        let sorted_nodes = self.topological_order(root)?;
        log::debug!(
            "backward() from node {} over {} reachable nodes",
            root,
            sorted_nodes.len()
        );

        self.write_nodes()?[root.index].grad = T::one();

        if sorted_nodes.len() == 1 {
            log::debug!("backward() called on a leaf node. Only the seed gradient is set.");
        }

        for &node_id in sorted_nodes.iter().rev() {
            log::trace!("[backward] running local rule of {}", node_id);
            observer(node_id);

            let mut nodes = self.write_nodes()?;
            let contributions = {
                let node = &nodes[node_id.index];
                node.op
                    .backward(node.value, node.grad, |input| nodes[input.index].value)
            };
            for (input, contribution) in contributions {
                log::trace!(
                    "[backward] {} -> {}: grad += {}",
                    node_id,
                    input,
                    contribution
                );
                let input_node = &mut nodes[input.index];
                input_node.grad = input_node.grad + contribution;
            }
        }

        Ok(())
    }

    /// Returns the order `backward(root)` processes nodes in, reversed: every node
    /// appears after all of its dependencies, and `root` comes last.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        self.check_node(root)?;
        let nodes = self.read_nodes()?;
        Ok(topological_sort(&nodes, root))
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&self) -> Result<(), ScalarGradError> {
        for node in self.write_nodes()?.iter_mut() {
            node.grad = T::zero();
        }
        Ok(())
    }

    /// Resets the gradient of a single node to zero.
    pub fn zero_grad_node(&self, id: NodeId) -> Result<(), ScalarGradError> {
        self.check_node(id)?;
        self.write_nodes()?[id.index].grad = T::zero();
        Ok(())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;

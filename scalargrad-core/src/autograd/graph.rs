use crate::node::{NodeData, NodeId};
use crate::types::Scalar;
use std::collections::HashSet;

/// Builds the topological order of the sub-graph reachable from `root`.
///
/// Depth-first post-order: the dependencies of a node (in operand order) are placed
/// before the node itself, and a node reached through several paths is placed only
/// once, at its first visit. Iterating the result in reverse therefore processes every
/// node after all of its dependents.
///
/// Uses an explicit stack instead of recursion so long chains do not exhaust the
/// thread stack; the produced order is the same as the recursive formulation.
///
/// `root` must already be validated against `nodes`.
pub(crate) fn topological_sort<T: Scalar>(nodes: &[NodeData<T>], root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<NodeId> = Vec::new();
    // (node, inputs of node, index of the next input to visit)
    let mut stack: Vec<(NodeId, Vec<NodeId>, usize)> = Vec::new();

    visited.insert(root);
    stack.push((root, nodes[root.index].op.inputs(), 0));

    while let Some((node, inputs, cursor)) = stack.last_mut() {
        if *cursor < inputs.len() {
            let next = inputs[*cursor];
            *cursor += 1;
            if visited.insert(next) {
                log::trace!("[topological_sort] visiting {} from {}", next, node);
                let next_inputs = nodes[next.index].op.inputs();
                stack.push((next, next_inputs, 0));
            }
        } else {
            sorted_list.push(*node);
            stack.pop();
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

// src/graph/debug.rs
use crate::graph::Graph;
use crate::types::Scalar;
use std::fmt;

// Manual implementation of Debug: one line per node, in creation order.
impl<T: Scalar> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nodes.try_borrow() {
            Ok(nodes) => {
                writeln!(f, "Graph(id={}, nodes={})", self.id(), nodes.len())?;
                for (index, node) in nodes.iter().enumerate() {
                    write!(
                        f,
                        "  #{} {} data={} grad={}",
                        index,
                        node.op.tag(),
                        node.value,
                        node.grad
                    )?;
                    if let Some(label) = &node.label {
                        write!(f, " label={:?}", label)?;
                    }
                    let inputs = node.op.inputs();
                    if !inputs.is_empty() {
                        let inputs: Vec<String> = inputs.iter().map(|id| id.to_string()).collect();
                        write!(f, " <- [{}]", inputs.join(", "))?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
            Err(_) => write!(f, "Graph(id={}, <storage borrowed>)", self.id()),
        }
    }
}

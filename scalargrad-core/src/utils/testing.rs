use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with the node id, actual and expected values otherwise.
pub fn check_value_near<T: Scalar>(graph: &Graph<T>, id: NodeId, expected: f64, tolerance: f64) {
    let actual = graph
        .value(id)
        .expect("Failed to read node value in check_value_near");
    check_near(id, "value", actual, expected, tolerance);
}

/// Checks that a node's accumulated gradient is within `tolerance` of `expected`.
pub fn check_grad_near<T: Scalar>(graph: &Graph<T>, id: NodeId, expected: f64, tolerance: f64) {
    let actual = graph
        .grad(id)
        .expect("Failed to read node gradient in check_grad_near");
    check_near(id, "grad", actual, expected, tolerance);
}

fn check_near<T: Scalar>(id: NodeId, what: &str, actual: T, expected: f64, tolerance: f64) {
    let actual = actual
        .to_f64()
        .expect("Scalar value not representable as f64");
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "{} mismatch for node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            what, id, actual, expected, diff, tolerance
        );
    }
}

use super::*;
use crate::autograd::check_grad;

#[test]
fn test_sub_nodes() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let a = graph.leaf(5.0)?;
    let b = graph.leaf(2.0)?;
    let diff = sub_op(&graph, a, b)?;
    assert_eq!(graph.value(diff)?, 3.0);
    assert_eq!(graph.op_tag(diff)?, "+");

    graph.backward(diff)?;
    assert_eq!(graph.grad(a)?, 1.0);
    assert_eq!(graph.grad(b)?, -1.0);
    Ok(())
}

#[test]
fn test_sub_constant_rhs_shape() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let a = graph.leaf(5.0)?;
    let diff = graph.sub(a, 3.0)?;
    // a, leaf(3), leaf(-1), 3 * -1, a + (-3)
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.value(diff)?, 2.0);

    graph.backward(diff)?;
    assert_eq!(graph.grad(a)?, 1.0);
    Ok(())
}

#[test]
fn test_sub_constant_lhs_resolved_first() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let a = graph.leaf(2.0)?;
    let diff = graph.sub(5.0, a)?;
    assert_eq!(graph.value(diff)?, 3.0);

    let deps = graph.dependencies(diff)?;
    assert_eq!(graph.value(deps[0])?, 5.0);
    assert_eq!(deps[0].index(), 1);
    assert_eq!(graph.op_tag(deps[1])?, "*");

    graph.backward(diff)?;
    assert_eq!(graph.grad(a)?, -1.0);
    Ok(())
}

#[test]
fn test_sub_self_is_zero() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let a = graph.leaf(7.0)?;
    let zero = graph.sub(a, a)?;
    graph.backward(zero)?;
    assert_eq!(graph.value(zero)?, 0.0);
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}

#[test]
fn test_sub_check_grad() {
    let result = check_grad(
        |graph: &Graph<f64>, x: &[NodeId]| {
            let sq = graph.mul(x[1], x[1])?;
            graph.sub(x[0], sq)
        },
        &[0.9, -2.1],
        1e-6,
        1e-6,
    );
    assert!(result.is_ok(), "check_grad failed: {:?}", result.err());
}

use super::*;
use crate::autograd::check_grad;

#[test]
fn test_add_nodes_ok() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let a = graph.leaf(1.5)?;
    let b = graph.leaf(2.25)?;
    let sum = add_op(&graph, a, b)?;
    assert_eq!(graph.value(sum)?, 3.75);
    assert_eq!(graph.op_tag(sum)?, "+");
    assert_eq!(graph.dependencies(sum)?, vec![a, b]);
    assert_eq!(graph.grad(sum)?, 0.0);
    Ok(())
}

#[test]
fn test_add_constant_creates_implicit_leaf() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let a = graph.leaf(1.0)?;
    let sum = graph.add(a, 2.0)?;
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.value(sum)?, 3.0);
    let deps = graph.dependencies(sum)?;
    assert_eq!(deps[0], a);
    assert!(graph.is_leaf(deps[1])?);
    Ok(())
}

#[test]
fn test_add_foreign_operand() -> Result<(), ScalarGradError> {
    let g1 = Graph::<f64>::new();
    let g2 = Graph::<f64>::new();
    let a = g1.leaf(1.0)?;
    let b = g2.leaf(1.0)?;
    assert!(matches!(
        add_op(&g2, b, a),
        Err(ScalarGradError::ForeignNode { .. })
    ));
    Ok(())
}

#[test]
fn test_add_backward() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let a = graph.leaf(1.0)?;
    let b = graph.leaf(-4.0)?;
    let sum = graph.add(a, b)?;
    graph.backward(sum)?;
    assert_eq!(graph.grad(a)?, 1.0);
    assert_eq!(graph.grad(b)?, 1.0);
    assert_eq!(add_backward(0.5), (0.5, 0.5));
    Ok(())
}

#[test]
fn test_add_same_node_twice() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let a = graph.leaf(3.0)?;
    let sum = graph.add(a, a)?;
    graph.backward(sum)?;
    assert_eq!(graph.value(sum)?, 6.0);
    assert_eq!(graph.grad(a)?, 2.0);
    Ok(())
}

#[test]
fn test_add_check_grad() {
    let result = check_grad(
        |graph: &Graph<f64>, x: &[NodeId]| graph.add(x[0], x[1]),
        &[0.3, -1.7],
        1e-6,
        1e-6,
    );
    assert!(result.is_ok(), "check_grad failed: {:?}", result.err());
}

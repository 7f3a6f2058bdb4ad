use super::*;
use crate::autograd::check_grad;
use crate::utils::testing::{check_grad_near, check_value_near};

#[test]
fn test_exp_forward() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let x = graph.leaf(0.0)?;
    let y = exp_op(&graph, x)?;
    assert_eq!(graph.value(y)?, 1.0);
    assert_eq!(graph.op_tag(y)?, "exp");
    assert_eq!(graph.dependencies(y)?, vec![x]);
    Ok(())
}

#[test]
fn test_exp_at_zero() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let x = graph.leaf(0.0)?;
    let y = graph.exp(x)?;
    graph.backward(y)?;
    assert_eq!(graph.value(y)?, 1.0);
    assert_eq!(graph.grad(x)?, 1.0);
    Ok(())
}

#[test]
fn test_exp_backward_uses_output() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let x = graph.leaf(1.5)?;
    let y = graph.exp(x)?;
    graph.backward(y)?;
    check_value_near(&graph, y, 1.5f64.exp(), 1e-12);
    check_grad_near(&graph, x, 1.5f64.exp(), 1e-12);
    assert_eq!(exp_backward(2.0f64, 3.0), 6.0);
    Ok(())
}

#[test]
fn test_exp_overflow_not_an_error() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let y = graph.exp(1000.0)?;
    assert_eq!(graph.value(y)?, f64::INFINITY);
    Ok(())
}

#[test]
fn test_exp_check_grad() {
    let result = check_grad(
        |graph: &Graph<f64>, x: &[NodeId]| {
            let scaled = graph.mul(x[0], -0.5)?;
            graph.exp(scaled)
        },
        &[0.8],
        1e-6,
        1e-6,
    );
    assert!(result.is_ok(), "check_grad failed: {:?}", result.err());
}

use scalargrad_core::{Graph, ScalarGradError};

mod common;
use common::{build_scenario, grads, init_logging};

#[test]
fn test_forward_values() {
    init_logging();
    let graph = Graph::<f64>::new();
    let s = build_scenario(&graph);
    assert_eq!(s.e.value(), -6.0);
    assert_eq!(s.d.value(), 4.0);
    assert_eq!(s.loss.value(), -8.0);
    assert_eq!(graph.len(), 7);
}

#[test]
fn test_backward_gradients() -> Result<(), ScalarGradError> {
    init_logging();
    let graph = Graph::<f64>::new();
    let s = build_scenario(&graph);
    s.loss.backward()?;

    let actual = grads(&[s.loss, s.f, s.d, s.e, s.c, s.b, s.a])?;
    assert_eq!(actual, vec![1.0, 4.0, -2.0, -2.0, -2.0, -4.0, 6.0]);
    Ok(())
}

#[test]
fn test_values_unchanged_by_backward() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let s = build_scenario(&graph);
    let before: Vec<f64> = [s.a, s.b, s.c, s.f, s.e, s.d, s.loss]
        .iter()
        .map(|v| v.value())
        .collect();
    s.loss.backward()?;
    let after: Vec<f64> = [s.a, s.b, s.c, s.f, s.e, s.d, s.loss]
        .iter()
        .map(|v| v.value())
        .collect();
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_second_backward_accumulates() -> Result<(), ScalarGradError> {
    let graph = Graph::<f64>::new();
    let s = build_scenario(&graph);
    s.loss.backward()?;
    s.loss.backward()?;

    let actual = grads(&[s.loss, s.f, s.d, s.e, s.c, s.b, s.a])?;
    assert_eq!(actual, vec![1.0, 8.0, -4.0, -6.0, -6.0, -16.0, 24.0]);

    graph.zero_grad()?;
    s.loss.backward()?;
    let actual = grads(&[s.loss, s.f, s.d, s.e, s.c, s.b, s.a])?;
    assert_eq!(actual, vec![1.0, 4.0, -2.0, -2.0, -2.0, -4.0, 6.0]);
    Ok(())
}

#[test]
fn test_labels_and_tags() {
    let graph = Graph::<f64>::new();
    let s = build_scenario(&graph);
    assert_eq!(s.loss.label().as_deref(), Some("L"));
    assert_eq!(s.loss.op_tag(), "*");
    assert_eq!(s.d.op_tag(), "+");
    assert_eq!(s.a.op_tag(), "leaf");
    assert_eq!(
        s.loss.to_string(),
        "Value(data=-8, grad=0, label=L, op=*)"
    );
}

#[test]
fn test_neuron() -> Result<(), ScalarGradError> {
    init_logging();
    let graph = Graph::<f64>::new();
    let x1 = graph.labeled_var(2.0, "x1");
    let x2 = graph.labeled_var(0.0, "x2");
    let w1 = graph.labeled_var(-3.0, "w1");
    let w2 = graph.labeled_var(1.0, "w2");
    let b = graph.labeled_var(6.881_373_587_019_543_2, "b");

    let n = x1 * w1 + x2 * w2 + b;
    let o = n.tanh();
    o.backward()?;

    assert!((o.value() - 0.7071).abs() < 1e-4);
    assert!((x1.grad() - -1.5).abs() < 1e-4);
    assert!((w1.grad() - 1.0).abs() < 1e-4);
    assert!((x2.grad() - 0.5).abs() < 1e-4);
    assert_eq!(w2.grad(), 0.0);

    // Same neuron with tanh spelled out through exp and division.
    let graph2 = Graph::<f64>::new();
    let x1 = graph2.var(2.0);
    let w1 = graph2.var(-3.0);
    let b = graph2.var(6.881_373_587_019_543_2);
    let n = x1 * w1 + b;
    let e = (2.0 * n).exp();
    let o2 = (e - 1.0) / (e + 1.0);
    o2.backward()?;
    assert!((o2.value() - o.value()).abs() < 1e-12);
    assert!((x1.grad() - -1.5).abs() < 1e-4);
    Ok(())
}

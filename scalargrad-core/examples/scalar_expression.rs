//! # Scalar Expression Example
//!
//! Builds `L = (a*b + c) * f`, runs one backward pass and prints every node's value and
//! gradient next to the hand-derived expectation. Then repeats the exercise on a single
//! tanh neuron.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example scalar_expression`

use scalargrad_core::{Graph, ScalarGradError, Var};

fn report(name: &str, var: Var<'_>, expected_value: f64, expected_grad: f64) {
    println!(
        "{:>3}: {:<45} expected data={} grad={}",
        name,
        var.to_string(),
        expected_value,
        expected_grad
    );
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    println!("--- L = (a*b + c) * f ---");
    let graph = Graph::<f64>::new();
    let a = graph.labeled_var(2.0, "a");
    let b = graph.labeled_var(-3.0, "b");
    let c = graph.labeled_var(10.0, "c");
    let f = graph.labeled_var(-2.0, "f");
    let e = (a * b).with_label("e");
    let d = (e + c).with_label("d");
    let loss = (d * f).with_label("L");

    loss.backward()?;

    report("L", loss, -8.0, 1.0);
    report("f", f, -2.0, 4.0);
    report("d", d, 4.0, -2.0);
    report("e", e, -6.0, -2.0);
    report("c", c, 10.0, -2.0);
    report("b", b, -3.0, -4.0);
    report("a", a, 2.0, 6.0);

    println!("\nGraph after backward:\n{:?}", graph);

    println!("--- o = tanh(x1*w1 + x2*w2 + b) ---");
    let neuron = Graph::<f64>::new();
    let x1 = neuron.labeled_var(2.0, "x1");
    let x2 = neuron.labeled_var(0.0, "x2");
    let w1 = neuron.labeled_var(-3.0, "w1");
    let w2 = neuron.labeled_var(1.0, "w2");
    let bias = neuron.labeled_var(6.881_373_587_019_543_2, "b");
    let o = (x1 * w1 + x2 * w2 + bias).tanh().with_label("o");

    let mut visited = Vec::new();
    neuron.backward_with_observer(o.id(), |id| visited.push(id))?;
    println!("backward visited {} nodes", visited.len());

    report("o", o, 0.7071, 1.0);
    report("x1", x1, 2.0, -1.5);
    report("w1", w1, -3.0, 1.0);
    report("x2", x2, 0.0, 0.5);
    report("w2", w2, 1.0, 0.0);

    Ok(())
}

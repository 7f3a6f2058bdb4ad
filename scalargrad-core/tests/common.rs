use scalargrad_core::{Graph, ScalarGradError, Var};

/// Leaves and intermediates of `L = (a*b + c) * f`.
#[allow(dead_code)]
pub(crate) struct Scenario<'g> {
    pub a: Var<'g>,
    pub b: Var<'g>,
    pub c: Var<'g>,
    pub f: Var<'g>,
    pub e: Var<'g>,
    pub d: Var<'g>,
    pub loss: Var<'g>,
}

// Used by several test crates; not every one calls every helper.
#[allow(dead_code)]
pub(crate) fn build_scenario(graph: &Graph) -> Scenario<'_> {
    let a = graph.labeled_var(2.0, "a");
    let b = graph.labeled_var(-3.0, "b");
    let c = graph.labeled_var(10.0, "c");
    let f = graph.labeled_var(-2.0, "f");
    let e = (a * b).with_label("e");
    let d = (e + c).with_label("d");
    let loss = (d * f).with_label("L");
    Scenario {
        a,
        b,
        c,
        f,
        e,
        d,
        loss,
    }
}

/// Initializes `env_logger` once so `RUST_LOG=trace cargo test` shows the graph logs.
#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn grads(vars: &[Var<'_>]) -> Result<Vec<f64>, ScalarGradError> {
    vars.iter().map(|v| v.graph().grad(v.id())).collect()
}

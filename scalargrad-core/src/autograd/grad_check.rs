use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;
use approx::relative_eq;
use num_traits::NumCast;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // Use f64 for precision
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Value {value:?} cannot be represented in the graph's scalar type")]
    UnrepresentableValue { value: f64 },

    #[error("Graph error during gradient check: {0}")]
    Graph(#[from] ScalarGradError),
}

/// Checks analytical gradients against numerical gradients using central finite
/// differences.
///
/// `func` builds an expression on the graph it is given, from the leaves created for
/// `inputs` (same order), and returns the root. It is called once on a fresh graph for
/// the analytical pass, then twice per input on fresh graphs with that input shifted by
/// `±epsilon`:
///
/// \\[ \text{numerical}_i = \frac{f(x_i + \epsilon) - f(x_i - \epsilon)}{2\epsilon} \\]
///
/// Values are compared in `f64` with `approx::relative_eq!`, using `tolerance` as both
/// the absolute and the relative bound.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: Scalar,
    F: Fn(&Graph<T>, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let graph = Graph::with_capacity(inputs.len());
    let leaves = inputs
        .iter()
        .map(|&x| graph.leaf(x))
        .collect::<Result<Vec<_>, _>>()?;
    let output = func(&graph, &leaves)?;
    graph.backward(output)?;

    let analytical_grads = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf).map(to_f64))
        .collect::<Result<Vec<_>, _>>()?;

    // --- 2. Numerical gradients, one input at a time ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let original = to_f64(inputs[i]);
        let loss_plus = evaluate_shifted(&func, inputs, i, original + epsilon)?;
        let loss_minus = evaluate_shifted(&func, inputs, i, original - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::debug!(
            "check_grad: input {} analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

/// Builds the expression on a fresh graph with input `index` replaced by `shifted`
/// and returns the root value.
fn evaluate_shifted<T, F>(
    func: &F,
    inputs: &[T],
    index: usize,
    shifted: f64,
) -> Result<f64, GradCheckError>
where
    T: Scalar,
    F: Fn(&Graph<T>, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let shifted_value = <T as NumCast>::from(shifted)
        .ok_or(GradCheckError::UnrepresentableValue { value: shifted })?;
    let graph = Graph::with_capacity(inputs.len());
    let mut leaves = Vec::with_capacity(inputs.len());
    for (j, &x) in inputs.iter().enumerate() {
        let value = if j == index { shifted_value } else { x };
        leaves.push(graph.leaf(value)?);
    }
    let output = func(&graph, &leaves)?;
    Ok(to_f64(graph.value(output)?))
}

fn to_f64<T: Scalar>(x: T) -> f64 {
    // Float -> f64 conversion is total for the float types Scalar covers.
    x.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;

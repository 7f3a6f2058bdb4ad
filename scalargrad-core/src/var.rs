// src/var.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A lightweight handle to one node of a [`Graph`].
///
/// `Var` is `Copy`: it is just a reference to the graph plus a [`NodeId`]. It lets an
/// expression be written with ordinary operators,
///
/// ```
/// use scalargrad_core::Graph;
///
/// let graph = Graph::<f64>::new();
/// let x = graph.labeled_var(3.0, "x");
/// let y = x * x + 2.0 * x;
/// y.backward().unwrap();
/// assert_eq!(x.grad(), 8.0);
/// ```
///
/// Each operator appends one or more nodes to the graph, exactly like the fallible
/// `Graph` methods and `*_op` functions it forwards to. Operators cannot return a
/// `Result`, so they panic if the underlying operation fails (for instance when the two
/// operands come from different graphs).
#[derive(Clone, Copy)]
pub struct Var<'g, T: Scalar = f64> {
    graph: &'g Graph<T>,
    id: NodeId,
}

impl<'g, T: Scalar> Var<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, id: NodeId) -> Self {
        Var { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    pub fn value(&self) -> T {
        self.read(self.graph.value(self.id), "value")
    }

    pub fn grad(&self) -> T {
        self.read(self.graph.grad(self.id), "grad")
    }

    pub fn label(&self) -> Option<String> {
        self.read(self.graph.label(self.id), "label")
    }

    pub fn op_tag(&self) -> String {
        self.read(self.graph.op_tag(self.id), "op_tag")
    }

    pub fn dependencies(&self) -> Vec<Var<'g, T>> {
        self.read(self.graph.dependencies(self.id), "dependencies")
            .into_iter()
            .map(|id| Var::new(self.graph, id))
            .collect()
    }

    /// Sets the label and returns the same handle, for chaining.
    pub fn with_label(self, label: &str) -> Self {
        self.read(self.graph.set_label(self.id, label), "with_label");
        self
    }

    pub fn pow(self, exponent: T) -> Var<'g, T> {
        self.lift(self.graph.pow(self, exponent), "pow")
    }

    pub fn exp(self) -> Var<'g, T> {
        self.lift(self.graph.exp(self), "exp")
    }

    pub fn tanh(self) -> Var<'g, T> {
        self.lift(self.graph.tanh(self), "tanh")
    }

    /// Runs the backward pass with this node as root. See [`Graph::backward`].
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.graph.backward(self.id)
    }

    fn lift(&self, result: Result<NodeId, ScalarGradError>, op_name: &str) -> Var<'g, T> {
        match result {
            Ok(id) => Var::new(self.graph, id),
            Err(e) => panic!("Var operation '{}' failed: {}", op_name, e),
        }
    }

    fn read<R>(&self, result: Result<R, ScalarGradError>, accessor: &str) -> R {
        result.unwrap_or_else(|e| panic!("Var::{} failed for node {}: {}", accessor, self.id, e))
    }
}

impl<'g, T: Scalar> fmt::Display for Var<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.node(self.id) {
            Ok(node) => {
                write!(f, "Value(data={}, grad={}", node.value(), node.grad())?;
                if let Some(label) = node.label() {
                    write!(f, ", label={}", label)?;
                }
                if !node.is_leaf() {
                    write!(f, ", op={}", node.op().tag())?;
                }
                write!(f, ")")
            }
            Err(e) => write!(f, "Value(<{}>)", e),
        }
    }
}

impl<'g, T: Scalar> fmt::Debug for Var<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var({}, {})", self.id, self)
    }
}

// --- Operator overloads ---

macro_rules! impl_var_binary_op {
    ($trait:ident, $method:ident, $graph_method:ident) => {
        impl<'g, T: Scalar> $trait for Var<'g, T> {
            type Output = Var<'g, T>;

            fn $method(self, rhs: Var<'g, T>) -> Self::Output {
                self.lift(self.graph.$graph_method(self, rhs), stringify!($method))
            }
        }
    };
}

// Raw-number operands on either side. The number becomes a fresh implicit leaf.
macro_rules! impl_var_scalar_op {
    ($trait:ident, $method:ident, $graph_method:ident, $($t:ty),+) => {
        $(
            impl<'g> $trait<$t> for Var<'g, $t> {
                type Output = Var<'g, $t>;

                fn $method(self, rhs: $t) -> Self::Output {
                    self.lift(self.graph.$graph_method(self, rhs), stringify!($method))
                }
            }

            impl<'g> $trait<Var<'g, $t>> for $t {
                type Output = Var<'g, $t>;

                fn $method(self, rhs: Var<'g, $t>) -> Self::Output {
                    rhs.lift(rhs.graph.$graph_method(self, rhs), stringify!($method))
                }
            }
        )+
    };
}

impl_var_binary_op!(Add, add, add);
impl_var_binary_op!(Sub, sub, sub);
impl_var_binary_op!(Mul, mul, mul);
impl_var_binary_op!(Div, div, div);

impl_var_scalar_op!(Add, add, add, f32, f64);
impl_var_scalar_op!(Sub, sub, sub, f32, f64);
impl_var_scalar_op!(Mul, mul, mul, f32, f64);
impl_var_scalar_op!(Div, div, div, f32, f64);

impl<'g, T: Scalar> Neg for Var<'g, T> {
    type Output = Var<'g, T>;

    fn neg(self) -> Self::Output {
        self.lift(self.graph.neg(self), "neg")
    }
}

#[cfg(test)]
#[path = "var_test.rs"]
mod tests;

//! # ScalarGrad Core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Expressions are built bottom-up on a [`Graph`]: leaves wrap raw numbers, and each
//! operation (`add`, `mul`, `sub`, `div`, `neg`, `pow`, `exp`, `tanh`) appends a node
//! recording its inputs and its local derivative rule. A single call to
//! [`Graph::backward`] then fills in d(root)/d(node) for every node the root depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::<f64>::new();
//! let a = graph.labeled_var(2.0, "a");
//! let b = graph.labeled_var(-3.0, "b");
//! let c = graph.labeled_var(10.0, "c");
//! let f = graph.labeled_var(-2.0, "f");
//!
//! let e = a * b;
//! let d = e + c;
//! let loss = d * f;
//! loss.backward().unwrap();
//!
//! assert_eq!(loss.value(), -8.0);
//! assert_eq!(a.grad(), 6.0);
//! assert_eq!(b.grad(), -4.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod types;
pub mod utils;
pub mod var;

pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{NodeData, NodeId};
pub use ops::Operand;
pub use types::Scalar;
pub use var::Var;
// Re-export traits required by public functions/structs
pub use num_traits;

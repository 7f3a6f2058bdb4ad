use num_traits::Float;
use std::fmt::{Debug, Display};

/// Element type a [`Graph`](crate::graph::Graph) can differentiate.
///
/// Any IEEE float from `num_traits` qualifies; in practice this means `f32` and `f64`.
/// The engine reads `zero`, `one`, `powf`, `exp` and `tanh` through [`Float`], so
/// the forward and backward math follow the host float semantics exactly.
pub trait Scalar: Float + Debug + Display + 'static {}

impl<T> Scalar for T where T: Float + Debug + Display + 'static {}

// Declare the exp module within math_elem
pub mod exp;

// Re-export the public function
pub use exp::exp_op;

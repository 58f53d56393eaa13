//! Term-rewriting simplifier for symbolic mathematical expressions.
//!
//! Expressions are represented as trees of [`Term`]s, which can be built directly or parsed from
//! source code:
//!
//! ```
//! use cas_simplify::{simplify, Term};
//!
//! let term = "x^2 + 3*x - 5*x + 2".parse::<Term>().unwrap();
//! assert_eq!(simplify(&term).to_string(), "x^2 - 2 * x + 2");
//! ```
//!
//! [`simplify_expression`] runs a single simplification pass and reports whether anything
//! changed, while [`simplify`](fn@simplify) repeats passes until the term no longer changes. The
//! [`derivative`](mod@derivative) module computes symbolic derivatives that can be simplified
//! the same way.

pub mod combine;
pub mod derivative;
pub mod order;
pub mod predicates;
pub mod simplify;
pub mod step_collector;
pub mod term;

pub use derivative::{derivative, nth_derivatives};
pub use simplify::{
    simplify,
    simplify_expression,
    simplify_with,
    simplify_with_steps,
    step::Step,
    SimplificationResult,
    SimplifyOptions,
    SimplifyOptionsBuilder,
};
pub use term::{Func, Term};

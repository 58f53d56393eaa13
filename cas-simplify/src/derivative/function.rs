//! Derivatives of the supported functions.

use std::f64::consts::LN_10;
use crate::term::{Func, Term};
use super::{derivative, div, mul};

/// Returns the derivative of `func` with respect to its argument, evaluated at `argument`.
fn outer_derivative(func: Func, argument: &Term) -> Term {
    let u = || argument.clone();
    let one = || Term::Constant(1.0);

    // `1 - u^2`, shared by the inverse sine and cosine
    let one_minus_square = || Term::difference(one(), u().pow(2.0));

    match func {
        Func::Sin => Term::call(Func::Cos, u()),
        Func::Cos => Term::product(Term::Constant(-1.0), Term::call(Func::Sin, u())),
        Func::Tan => div(one(), Term::call(Func::Cos, u()).pow(2.0)),
        Func::Ln => div(one(), u()),
        Func::Log => div(one(), Term::product(Term::Constant(LN_10), u())),
        Func::Exp => Term::call(Func::Exp, u()),
        Func::Sqrt => div(one(), Term::product(Term::Constant(2.0), Term::call(Func::Sqrt, u()))),
        Func::Arcsin => div(one(), Term::call(Func::Sqrt, one_minus_square())),
        Func::Arccos => div(Term::Constant(-1.0), Term::call(Func::Sqrt, one_minus_square())),
        Func::Arctan => div(one(), Term::sum(one(), u().pow(2.0))),
    }
}

/// Computes the derivative of a function application, applying the chain rule.
///
/// `f(u)' = f'(u) * u'`
pub(super) fn function_derivative(func: Func, argument: &Term, with: &str) -> Term {
    mul(outer_derivative(func, argument), derivative(argument, with))
}

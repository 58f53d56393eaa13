//! Symbolic differentiation of terms.
//!
//! [`derivative`] applies the differentiation rules mechanically, and only removes the obvious
//! zeros and ones it would otherwise introduce. The result is meant to be passed to the
//! simplifier, which [`nth_derivatives`] does after every order.

mod function;

use log::debug;
use crate::{simplify::{simplify_with, SimplifyOptions}, term::Term};

/// Returns `true` if the given [`Term`] is "clearly" zero. This is intended to clean up the
/// result and is not mathematically rigorous.
fn is_trivially_zero(term: &Term) -> bool {
    match term {
        Term::Constant(value) => *value == 0.0,
        Term::Sum(lhs, rhs) => is_trivially_zero(lhs) && is_trivially_zero(rhs),
        Term::Product(lhs, rhs) => is_trivially_zero(lhs) || is_trivially_zero(rhs),
        _ => false,
    }
}

/// Returns `true` if the given [`Term`] is "clearly" one. This is intended to clean up the result
/// and is not mathematically rigorous.
fn is_trivially_unity(term: &Term) -> bool {
    match term {
        Term::Constant(value) => *value == 1.0,
        Term::Product(lhs, rhs) => is_trivially_unity(lhs) && is_trivially_unity(rhs),
        Term::Power(base, _) => is_trivially_unity(base),
        _ => false,
    }
}

/// `a * b`, where either factor is dropped if it is one, and the product is zero if either factor
/// is zero.
fn mul(a: Term, b: Term) -> Term {
    if is_trivially_zero(&a) || is_trivially_zero(&b) {
        Term::Constant(0.0)
    } else if is_trivially_unity(&a) {
        b
    } else if is_trivially_unity(&b) {
        a
    } else {
        Term::product(a, b)
    }
}

/// `a + b`, where zero terms are dropped.
fn add(a: Term, b: Term) -> Term {
    if is_trivially_zero(&a) {
        b
    } else if is_trivially_zero(&b) {
        a
    } else {
        Term::sum(a, b)
    }
}

/// `a - b`, where a zero `b` is dropped and a zero `a` becomes a negation.
fn sub(a: Term, b: Term) -> Term {
    if is_trivially_zero(&b) {
        a
    } else if is_trivially_zero(&a) {
        -b
    } else {
        Term::difference(a, b)
    }
}

/// `a / b`, where the quotient is zero if `a` is zero, and a denominator of one is dropped.
fn div(a: Term, b: Term) -> Term {
    if is_trivially_zero(&a) {
        Term::Constant(0.0)
    } else if is_trivially_unity(&b) {
        a
    } else {
        Term::quotient(a, b)
    }
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(f: &Term, g: &Term, with: &str) -> Term {
    add(
        mul(derivative(f, with), g.clone()),
        mul(f.clone(), derivative(g, with)),
    )
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(f: &Term, g: &Term, with: &str) -> Term {
    div(
        sub(
            mul(derivative(f, with), g.clone()),
            mul(f.clone(), derivative(g, with)),
        ),
        g.clone().pow(2.0),
    )
}

/// `(u^n)' = n * u^(n-1) * u'`
fn power_rule(base: &Term, exponent: f64, with: &str) -> Term {
    mul(
        mul(Term::Constant(exponent), base.clone().pow(exponent - 1.0)),
        derivative(base, with),
    )
}

/// Computes the derivative of the given term with respect to the variable named `with`. Every
/// other variable is treated as a constant.
///
/// The result is not simplified.
pub fn derivative(f: &Term, with: &str) -> Term {
    match f {
        Term::Constant(_) => Term::Constant(0.0),
        Term::Variable(name) => Term::Constant(if name == with { 1.0 } else { 0.0 }),
        Term::Power(base, exponent) => power_rule(base, *exponent, with),
        Term::Function(func, argument) => function::function_derivative(*func, argument, with),
        Term::Sum(lhs, rhs) => add(derivative(lhs, with), derivative(rhs, with)),
        Term::Difference(lhs, rhs) => sub(derivative(lhs, with), derivative(rhs, with)),
        Term::Product(lhs, rhs) => product_rule(lhs, rhs, with),
        Term::Quotient(lhs, rhs) => quotient_rule(lhs, rhs, with),
    }
}

/// Computes the first `order` derivatives of the given term with respect to the variable named
/// `with`. Each derivative is simplified before the next one is computed from it.
///
/// The returned list starts with the first derivative. It is empty if `order` is zero.
pub fn nth_derivatives(f: &Term, with: &str, order: usize, options: SimplifyOptions) -> Vec<Term> {
    let mut derivatives = Vec::with_capacity(order);
    let mut current = f.clone();
    for n in 1..=order {
        current = simplify_with(&derivative(&current, with), options);
        debug!("derivative {} of `{}` with respect to `{}`: `{}`", n, f, with, current);
        derivatives.push(current.clone());
    }
    derivatives
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::simplify;
    use super::*;

    /// Approximates the derivative of the given term at `x` with a central difference.
    fn finite_difference(term: &Term, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        let eval_x = |x: f64| term.eval_at("x", x).unwrap();
        (eval_x(x + DX) - eval_x(x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &'static str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let term = function.parse::<Term>().unwrap();
        let symbolic = derivative(&term, "x");
        let simplified = simplify(&symbolic);

        for point in points.into_iter() {
            let numerically_computed = finite_difference(&term, point);
            for computed in [&symbolic, &simplified] {
                let symbolically_computed = computed.eval_at("x", point).unwrap();
                assert!(
                    (symbolically_computed - numerically_computed).abs() < TOL,
                    "For \"{function}\" at x={point}, symbolically computed derivative `{computed}` was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
                );
            }
        }
    }

    #[test]
    fn power_rule() {
        test_for_function("x^2 + x + 1", [0., 1., 2., 5., 8.]);
        test_for_function("x^(-2) - 3x^0.5", [0.5, 1., 4.]);
    }

    #[test]
    fn product_and_quotient_rules() {
        test_for_function("sin(x) * cos(x)", [0., 0.5, 2.]);
        test_for_function("x / (x^2 + 1)", [-2., 0., 0.5, 3.]);
        test_for_function("(2x + 1) / x^3", [0.5, 1., 2.]);
    }

    #[test]
    fn chain_rule() {
        test_for_function("ln(x^2)", [0.5, 1., 3.]);
        test_for_function("e^(2x)", [-1., 0., 1.]);
        test_for_function("sqrt(x^2 + 1)", [-1., 0., 2.]);
        test_for_function("tan(3x)", [0.1, 0.3]);
        test_for_function("log(x) + exp(ln(x))", [0.5, 2.]);
    }

    #[test]
    fn inverse_trigonometric() {
        test_for_function("arcsin(x / 2)", [-1., 0., 1.5]);
        test_for_function("arccos(x)", [-0.5, 0., 0.5]);
        test_for_function("arctan(x^2)", [-1., 0., 2.]);
    }

    #[test]
    fn shapes() {
        let x = || Term::var("x");
        assert_eq!(derivative(&Term::power(x(), 2.0), "x"), Term::product(Term::Constant(2.0), x()));
        assert_eq!(derivative(&Term::var("y"), "x"), Term::Constant(0.0));
        assert_eq!(derivative(&Term::product(Term::var("y"), x()), "x"), Term::var("y"));
    }

    #[test]
    fn repeated_derivatives() {
        let x = || Term::var("x");
        let derivatives = nth_derivatives(&Term::power(x(), 3.0), "x", 3, SimplifyOptions::default());
        assert_eq!(derivatives, vec![
            Term::product(Term::Constant(3.0), Term::power(x(), 2.0)),
            Term::product(Term::Constant(6.0), x()),
            Term::Constant(6.0),
        ]);
        assert!(nth_derivatives(&x(), "x", 0, SimplifyOptions::default()).is_empty());
    }
}

//! Simplification rules for specific shapes of fractions.

use crate::{
    simplify::{rules::do_quotient, step::Step},
    step_collector::StepCollector,
    term::Term,
};

/// Splits a product of constants and powers of a single variable into its coefficient, variable,
/// and degree.
///
/// - `x * (2 * x)` -> `(2, Some(x), 2)`
/// - `3` -> `(3, None, 0)`
/// - `x * y` -> [`None`]
fn monomial(term: &Term) -> Option<(f64, Option<&str>, f64)> {
    match term {
        Term::Constant(value) => Some((*value, None, 0.0)),
        Term::Variable(name) => Some((1.0, Some(name.as_str()), 1.0)),
        Term::Power(base, exponent) => Some((1.0, Some(base.as_variable()?), *exponent)),
        Term::Product(lhs, rhs) => {
            let (lhs_coeff, lhs_var, lhs_degree) = monomial(lhs)?;
            let (rhs_coeff, rhs_var, rhs_degree) = monomial(rhs)?;
            let variable = match (lhs_var, rhs_var) {
                (Some(a), Some(b)) if a != b => return None,
                (a, b) => a.or(b),
            };
            Some((lhs_coeff * rhs_coeff, variable, lhs_degree + rhs_degree))
        },
        _ => None,
    }
}

/// `a/(c*a) = 1/c`, where `a` is a variable
pub fn reciprocal_coefficient(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_quotient(term, |lhs, rhs| {
        lhs.as_variable()?;
        match rhs.coefficient() {
            (Some(c), rest) if rest == lhs && c != 0.0 => {
                Some(Term::quotient(Term::Constant(1.0), Term::Constant(c)))
            },
            _ => None,
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::ReciprocalCoefficient);
    Some(opt)
}

/// `(x^2+k - 2*x^2)/(x^2+k)^2 = (k - x^2)/(x^2+k)^2`
///
/// This is the shape produced by the quotient rule when differentiating `x/(x^2+k)`. The
/// subtracted term may be any product equivalent to `2*x^2`, such as `x*(2*x)`.
pub fn difference_over_square(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_quotient(term, |lhs, rhs| {
        let Term::Difference(shifted_square, subtrahend) = lhs else {
            return None;
        };
        let (denominator_base, denominator_exponent) = rhs.base_and_exponent();
        if denominator_exponent != 2.0 || &**shifted_square != denominator_base {
            return None;
        }

        let Term::Sum(square, shift) = &**shifted_square else {
            return None;
        };
        let k = shift.as_constant()?;
        let (square_coeff, variable, square_degree) = monomial(square)?;
        let (subtrahend_coeff, subtracted, subtrahend_degree) = monomial(subtrahend)?;
        if square_coeff != 1.0
            || square_degree != 2.0
            || subtrahend_coeff != 2.0
            || subtrahend_degree != 2.0
            || variable.is_none()
            || variable != subtracted
        {
            return None;
        }

        Some(Term::quotient(
            Term::difference(Term::Constant(k), (**square).clone()),
            rhs.clone(),
        ))
    })?;

    step_collector.push(Step::DifferenceOverSquare);
    Some(opt)
}

/// Applies all fraction rules.
pub fn simplify_fractions(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    reciprocal_coefficient(term, step_collector)
        .or_else(|| difference_over_square(term, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Term {
        Term::var("x")
    }

    fn c(value: f64) -> Term {
        Term::Constant(value)
    }

    #[test]
    fn reciprocal() {
        let term = Term::quotient(x(), Term::product(c(4.0), x()));
        assert_eq!(simplify_fractions(&term, &mut ()), Some(Term::quotient(c(1.0), c(4.0))));

        let term = Term::quotient(x(), Term::product(c(4.0), Term::var("y")));
        assert_eq!(simplify_fractions(&term, &mut ()), None);
    }

    #[test]
    fn quotient_rule_shape() {
        let shifted_square = Term::sum(Term::power(x(), 2.0), c(1.0));
        let term = Term::quotient(
            Term::difference(
                shifted_square.clone(),
                Term::product(x(), Term::product(c(2.0), x())),
            ),
            Term::power(shifted_square.clone(), 2.0),
        );

        let mut steps = Vec::new();
        assert_eq!(simplify_fractions(&term, &mut steps), Some(Term::quotient(
            Term::difference(c(1.0), Term::power(x(), 2.0)),
            Term::power(shifted_square, 2.0),
        )));
        assert_eq!(steps, vec![Step::DifferenceOverSquare]);
    }

    #[test]
    fn other_shift() {
        let shifted_square = Term::sum(Term::power(x(), 2.0), c(3.0));
        let term = Term::quotient(
            Term::difference(shifted_square.clone(), Term::product(c(2.0), Term::power(x(), 2.0))),
            Term::power(shifted_square.clone(), 2.0),
        );
        assert_eq!(simplify_fractions(&term, &mut ()), Some(Term::quotient(
            Term::difference(c(3.0), Term::power(x(), 2.0)),
            Term::power(shifted_square, 2.0),
        )));
    }

    #[test]
    fn wrong_subtrahend() {
        let shifted_square = Term::sum(Term::power(x(), 2.0), c(1.0));
        let term = Term::quotient(
            Term::difference(shifted_square.clone(), Term::product(c(3.0), Term::power(x(), 2.0))),
            Term::power(shifted_square, 2.0),
        );
        assert_eq!(simplify_fractions(&term, &mut ()), None);
    }
}

//! Predicates used to decide which terms can be merged and how terms are ordered.

use crate::term::{float_eq, Term};

/// Returns true if the two terms can be merged by addition or subtraction.
///
/// - Constants are similar to each other.
/// - Variables are similar if they have the same name.
/// - Powers are similar if they have the same exponent and equal bases.
/// - Function applications are similar if they apply the same function to equal arguments.
/// - If either term is a product, both are split into a coefficient and the remaining factor. If
///   neither has a coefficient, they are similar only if they are equal. Otherwise, they are
///   similar if neither remaining factor is a constant and the remaining factors are similar.
///
/// Terms of different kinds are never similar, and sums and quotients are not similar to
/// anything. The relation is symmetric.
pub fn are_similar_terms(a: &Term, b: &Term) -> bool {
    match (a, b) {
        (Term::Constant(_), Term::Constant(_)) => true,
        (Term::Variable(a), Term::Variable(b)) => a == b,
        (Term::Power(a, m), Term::Power(b, n)) => float_eq(*m, *n) && a == b,
        (Term::Function(f, a), Term::Function(g, b)) => f == g && a == b,
        (Term::Product(..), _) | (_, Term::Product(..)) => {
            let (a_coeff, a_rest) = a.coefficient();
            let (b_coeff, b_rest) = b.coefficient();
            if a_coeff.is_none() && b_coeff.is_none() {
                return a == b;
            }

            !a_rest.is_constant()
                && !b_rest.is_constant()
                && are_similar_terms(a_rest, b_rest)
        },
        _ => false,
    }
}

/// Returns the degree of the term, used to order the terms of a polynomial.
///
/// Constants have degree `0`, variables `1`, powers of a variable their exponent, and products
/// the sum of the degrees of their factors. Every other term has degree `0`.
pub fn get_term_exponent(term: &Term) -> f64 {
    match term {
        Term::Constant(_) => 0.0,
        Term::Variable(_) => 1.0,
        Term::Power(base, exponent) if matches!(**base, Term::Variable(_)) => *exponent,
        Term::Product(lhs, rhs) => get_term_exponent(lhs) + get_term_exponent(rhs),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::term::Func;

    fn x() -> Term {
        Term::var("x")
    }

    fn samples() -> Vec<Term> {
        vec![
            Term::Constant(2.0),
            Term::Constant(-1.5),
            x(),
            Term::var("y"),
            Term::power(x(), 2.0),
            Term::power(x(), 3.0),
            Term::product(Term::Constant(3.0), x()),
            Term::product(x(), Term::Constant(-2.0)),
            Term::product(Term::Constant(2.0), Term::power(x(), 2.0)),
            Term::product(x(), Term::var("y")),
            Term::call(Func::Sin, x()),
            Term::product(Term::Constant(4.0), Term::call(Func::Sin, x())),
            Term::sum(x(), Term::Constant(1.0)),
            Term::quotient(x(), Term::Constant(2.0)),
        ]
    }

    #[test]
    fn similar_pairs() {
        assert!(are_similar_terms(&Term::Constant(2.0), &Term::Constant(5.0)));
        assert!(are_similar_terms(&x(), &x()));
        assert!(are_similar_terms(&x(), &Term::product(Term::Constant(3.0), x())));
        assert!(are_similar_terms(
            &Term::product(Term::Constant(2.0), Term::power(x(), 2.0)),
            &Term::power(x(), 2.0),
        ));
        assert!(are_similar_terms(
            &Term::call(Func::Sin, x()),
            &Term::product(Term::Constant(4.0), Term::call(Func::Sin, x())),
        ));
        assert!(are_similar_terms(
            &Term::product(x(), Term::var("y")),
            &Term::product(x(), Term::var("y")),
        ));
    }

    #[test]
    fn dissimilar_pairs() {
        assert!(!are_similar_terms(&x(), &Term::var("y")));
        assert!(!are_similar_terms(&x(), &Term::power(x(), 2.0)));
        assert!(!are_similar_terms(&Term::power(x(), 2.0), &Term::power(x(), 3.0)));
        assert!(!are_similar_terms(&Term::call(Func::Sin, x()), &Term::call(Func::Cos, x())));
        assert!(!are_similar_terms(&Term::Constant(2.0), &Term::product(Term::Constant(2.0), x())));
        assert!(!are_similar_terms(
            &Term::sum(x(), Term::Constant(1.0)),
            &Term::sum(x(), Term::Constant(1.0)),
        ));
    }

    #[test]
    fn similarity_is_symmetric() {
        let samples = samples();
        for a in &samples {
            for b in &samples {
                assert_eq!(
                    are_similar_terms(a, b),
                    are_similar_terms(b, a),
                    "similarity of `{}` and `{}` is not symmetric", a, b,
                );
            }
        }
    }

    #[test]
    fn degrees() {
        assert_eq!(get_term_exponent(&Term::Constant(7.0)), 0.0);
        assert_eq!(get_term_exponent(&x()), 1.0);
        assert_eq!(get_term_exponent(&Term::power(x(), 3.0)), 3.0);
        assert_eq!(get_term_exponent(&Term::product(Term::Constant(-2.0), Term::power(x(), 2.0))), 2.0);
        assert_eq!(get_term_exponent(&Term::product(x(), Term::var("y"))), 2.0);
        assert_eq!(get_term_exponent(&Term::power(Term::call(Func::Sin, x()), 2.0)), 0.0);
    }
}

//! Canonical ordering of polynomial terms.

use crate::{
    combine::{build_sum, flatten_expression},
    predicates::get_term_exponent,
    simplify::step::Step,
    step_collector::StepCollector,
    term::Term,
};

/// Sorts the terms by descending degree (see [`get_term_exponent`]). Terms of equal degree keep
/// their relative order.
pub fn sort_terms_by_exponent(terms: &mut [Term]) {
    terms.sort_by(|a, b| get_term_exponent(b).total_cmp(&get_term_exponent(a)));
}

/// Rewrites a sum or difference into a left-associated sum of its terms, ordered by descending
/// degree.
///
/// `3 + x^2 - x` -> `x^2 + -1 * x + 3`
pub fn ensure_polynomial_order(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    if !matches!(term, Term::Sum(..) | Term::Difference(..)) {
        return None;
    }

    let mut terms = flatten_expression(term);
    sort_terms_by_exponent(&mut terms);
    let ordered = build_sum(terms);
    if &ordered == term {
        return None;
    }

    step_collector.push(Step::PolynomialOrder);
    Some(ordered)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Term {
        Term::var("x")
    }

    #[test]
    fn stable_descending_sort() {
        let mut terms = vec![
            Term::Constant(3.0),
            x(),
            Term::var("y"),
            Term::power(x(), 2.0),
        ];
        sort_terms_by_exponent(&mut terms);
        assert_eq!(terms, vec![Term::power(x(), 2.0), x(), Term::var("y"), Term::Constant(3.0)]);
    }

    #[test]
    fn reorders_polynomial() {
        let term = Term::difference(
            Term::sum(Term::Constant(3.0), Term::power(x(), 2.0)),
            x(),
        );
        let mut steps = Vec::new();
        let ordered = ensure_polynomial_order(&term, &mut steps).unwrap();
        assert_eq!(ordered, Term::sum(
            Term::sum(Term::power(x(), 2.0), Term::product(Term::Constant(-1.0), x())),
            Term::Constant(3.0),
        ));
        assert_eq!(steps, vec![Step::PolynomialOrder]);
    }

    #[test]
    fn ordered_sum_is_unchanged() {
        let term = Term::sum(Term::power(x(), 2.0), Term::Constant(1.0));
        assert_eq!(ensure_polynomial_order(&term, &mut ()), None);
        assert_eq!(ensure_polynomial_order(&x(), &mut ()), None);
    }
}

//! Combining like terms across a whole chain of sums and differences.

use crate::{
    combine::{build_sum, flatten_expression, simplify_terms_sum},
    simplify::step::Step,
    step_collector::StepCollector,
    term::Term,
};

/// Merges the similar terms of a sum or difference, no matter how deeply they are nested, and
/// rebuilds it as a left-associated sum ordered by descending degree.
///
/// `2*x + 3 + x - 1 = 3*x + 2`
pub fn combine_like_terms(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    if !matches!(term, Term::Sum(..) | Term::Difference(..)) {
        return None;
    }

    let terms = flatten_expression(term);
    let original_len = terms.len();
    let combined = simplify_terms_sum(terms);
    let combined_len = combined.len();
    let rebuilt = build_sum(combined);
    if &rebuilt == term {
        return None;
    }

    if combined_len < original_len {
        step_collector.push(Step::CombineLikeTerms);
    } else {
        step_collector.push(Step::PolynomialOrder);
    }
    Some(rebuilt)
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
    fn combines_across_chain() {
        let term = Term::difference(
            Term::sum(Term::sum(Term::product(c(2.0), x()), c(3.0)), x()),
            c(1.0),
        );
        let mut steps = Vec::new();
        assert_eq!(
            combine_like_terms(&term, &mut steps),
            Some(Term::sum(Term::product(c(3.0), x()), c(2.0))),
        );
        assert_eq!(steps, vec![Step::CombineLikeTerms]);
    }

    #[test]
    fn reorders_without_combining() {
        let term = Term::sum(x(), Term::power(x(), 2.0));
        let mut steps = Vec::new();
        assert_eq!(combine_like_terms(&term, &mut steps), Some(Term::sum(Term::power(x(), 2.0), x())));
        assert_eq!(steps, vec![Step::PolynomialOrder]);
    }

    #[test]
    fn everything_cancels() {
        let term = Term::difference(Term::sum(x(), c(2.0)), Term::sum(x(), c(2.0)));
        assert_eq!(combine_like_terms(&term, &mut ()), Some(c(0.0)));
    }

    #[test]
    fn canonical_sum_is_unchanged() {
        let term = Term::sum(Term::sum(Term::power(x(), 2.0), Term::product(c(-2.0), x())), c(2.0));
        assert_eq!(combine_like_terms(&term, &mut ()), None);
        assert_eq!(combine_like_terms(&x(), &mut ()), None);
    }
}

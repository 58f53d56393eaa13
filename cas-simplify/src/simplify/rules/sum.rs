//! Simplification rules for sums.

use crate::{
    combine::{build_sum, combine_similar_terms, flatten_expression, simplify_terms_sum},
    predicates::are_similar_terms,
    simplify::{rules::do_sum, step::Step},
    step_collector::StepCollector,
    term::Term,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_sum(term, |lhs, rhs| {
        if lhs.is_value(0.0) {
            Some(rhs.clone())
        } else if rhs.is_value(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `c1+c2 = c3`
pub fn fold_constants(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_sum(term, |lhs, rhs| {
        Some(Term::Constant(lhs.as_constant()? + rhs.as_constant()?))
    })?;

    step_collector.push(Step::FoldSum);
    Some(opt)
}

/// `a+a = 2*a`
/// `m*a + n*a = (m+n)*a`
pub fn combine_similar(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_sum(term, |lhs, rhs| {
        are_similar_terms(lhs, rhs).then(|| combine_similar_terms(lhs, rhs, true))
    })?;

    step_collector.push(Step::CombineSimilarTerms);
    Some(opt)
}

/// Flattens nested sums and differences into a single chain of sums, merging the similar terms
/// found along the way.
///
/// `(x + 2) + (3*x - 1) = 4*x + 1`
pub fn merge_nested_sums(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_sum(term, |lhs, rhs| {
        let is_nested = |term: &Term| matches!(term, Term::Sum(..) | Term::Difference(..));
        if !is_nested(lhs) && !is_nested(rhs) {
            return None;
        }

        let merged = build_sum(simplify_terms_sum(flatten_expression(term)));
        (&merged != term).then_some(merged)
    })?;

    step_collector.push(Step::MergeNestedSums);
    Some(opt)
}

/// Applies all rules.
pub fn all(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    add_zero(term, step_collector)
        .or_else(|| fold_constants(term, step_collector))
        .or_else(|| combine_similar(term, step_collector))
        .or_else(|| merge_nested_sums(term, step_collector))
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
    fn identities() {
        assert_eq!(all(&Term::sum(c(0.0), x()), &mut ()), Some(x()));
        assert_eq!(all(&Term::sum(x(), c(0.0)), &mut ()), Some(x()));
        assert_eq!(all(&Term::sum(c(1.5), c(2.0)), &mut ()), Some(c(3.5)));
    }

    #[test]
    fn similar_terms() {
        let mut steps = Vec::new();
        let term = Term::sum(Term::product(c(3.0), x()), Term::product(c(2.0), x()));
        assert_eq!(all(&term, &mut steps), Some(Term::product(c(5.0), x())));
        assert_eq!(steps, vec![Step::CombineSimilarTerms]);
    }

    #[test]
    fn nested() {
        let term = Term::sum(
            Term::sum(x(), c(2.0)),
            Term::difference(Term::product(c(3.0), x()), c(1.0)),
        );
        assert_eq!(all(&term, &mut ()), Some(Term::sum(Term::product(c(4.0), x()), c(1.0))));
    }

    #[test]
    fn ordered_chain_is_unchanged() {
        let term = Term::sum(Term::sum(Term::power(x(), 2.0), x()), c(1.0));
        assert_eq!(all(&term, &mut ()), None);
    }
}

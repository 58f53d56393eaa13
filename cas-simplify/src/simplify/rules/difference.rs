//! Simplification rules for differences.

use crate::{
    combine::combine_similar_terms,
    predicates::are_similar_terms,
    simplify::{rules::do_difference, step::Step},
    step_collector::StepCollector,
    term::Term,
};

/// `a-0 = a`
pub fn subtract_zero(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_difference(term, |lhs, rhs| rhs.is_value(0.0).then(|| lhs.clone()))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `c1-c2 = c3`
pub fn fold_constants(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_difference(term, |lhs, rhs| {
        Some(Term::Constant(lhs.as_constant()? - rhs.as_constant()?))
    })?;

    step_collector.push(Step::FoldDifference);
    Some(opt)
}

/// `a-a = 0`
pub fn subtract_self(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_difference(term, |lhs, rhs| (lhs == rhs).then(|| Term::Constant(0.0)))?;

    step_collector.push(Step::SubtractSelf);
    Some(opt)
}

/// `0-a = -a`
pub fn zero_minus(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_difference(term, |lhs, rhs| lhs.is_value(0.0).then(|| -rhs.clone()))?;

    step_collector.push(Step::ZeroMinus);
    Some(opt)
}

/// `a-a = 0`
/// `m*a - n*a = (m-n)*a`
pub fn combine_similar(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_difference(term, |lhs, rhs| {
        are_similar_terms(lhs, rhs).then(|| combine_similar_terms(lhs, rhs, false))
    })?;

    step_collector.push(Step::CombineSimilarTerms);
    Some(opt)
}

/// `a-(-c*b) = a+c*b`
/// `a-(-c) = a+c`
pub fn normalize_sign(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_difference(term, |lhs, rhs| {
        let negative = match rhs {
            Term::Constant(value) => *value < 0.0,
            _ => rhs.coefficient().0.map_or(false, |c| c < 0.0),
        };
        negative.then(|| Term::sum(lhs.clone(), -rhs.clone()))
    })?;

    step_collector.push(Step::NormalizeSign);
    Some(opt)
}

/// Applies all rules.
pub fn all(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    subtract_zero(term, step_collector)
        .or_else(|| fold_constants(term, step_collector))
        .or_else(|| subtract_self(term, step_collector))
        .or_else(|| zero_minus(term, step_collector))
        .or_else(|| combine_similar(term, step_collector))
        .or_else(|| normalize_sign(term, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::term::Func;

    fn x() -> Term {
        Term::var("x")
    }

    fn c(value: f64) -> Term {
        Term::Constant(value)
    }

    #[test]
    fn identities() {
        assert_eq!(all(&Term::difference(x(), c(0.0)), &mut ()), Some(x()));
        assert_eq!(all(&Term::difference(c(1.0), c(2.5)), &mut ()), Some(c(-1.5)));
        assert_eq!(all(&Term::difference(c(0.0), x()), &mut ()), Some(Term::product(c(-1.0), x())));
    }

    #[test]
    fn self_cancellation() {
        let sin = Term::call(Func::Sin, x());
        let mut steps = Vec::new();
        assert_eq!(all(&Term::difference(sin.clone(), sin), &mut steps), Some(c(0.0)));
        assert_eq!(steps, vec![Step::SubtractSelf]);
    }

    #[test]
    fn similar_terms() {
        let term = Term::difference(Term::product(c(3.0), x()), Term::product(c(5.0), x()));
        assert_eq!(all(&term, &mut ()), Some(Term::product(c(-2.0), x())));
    }

    #[test]
    fn sign() {
        let term = Term::difference(x(), Term::product(c(-2.0), Term::var("y")));
        assert_eq!(
            all(&term, &mut ()),
            Some(Term::sum(x(), Term::product(c(2.0), Term::var("y")))),
        );
        assert_eq!(all(&Term::difference(x(), c(-3.0)), &mut ()), Some(Term::sum(x(), c(3.0))));
        assert_eq!(all(&Term::difference(x(), Term::var("y")), &mut ()), None);
    }
}

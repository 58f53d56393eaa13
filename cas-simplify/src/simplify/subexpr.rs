//! Recursion into the children of a term.

use crate::{step_collector::StepCollector, term::Term};
use super::{inner_simplify, step::Step};

/// Simplifies both children of a binary node, rebuilding the node with `build` if either changed.
fn simplify_children(
    lhs: &Term,
    rhs: &Term,
    step_collector: &mut dyn StepCollector<Step>,
    build: fn(Term, Term) -> Term,
) -> Option<Term> {
    let new_lhs = inner_simplify(lhs, step_collector);
    let new_rhs = inner_simplify(rhs, step_collector);
    if new_lhs.is_none() && new_rhs.is_none() {
        return None;
    }

    Some(build(
        new_lhs.unwrap_or_else(|| lhs.clone()),
        new_rhs.unwrap_or_else(|| rhs.clone()),
    ))
}

/// Runs one simplification pass over every child of the term, in post-order.
///
/// Powers are also collapsed once their base is simplified:
///
/// `a^0 = 1`
/// `a^1 = a`
/// `(a^m)^n = a^(m*n)`
pub fn simplify_subexpressions(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    match term {
        Term::Constant(_) | Term::Variable(_) => None,
        Term::Power(base, exponent) => {
            let new_base = inner_simplify(base, step_collector);
            let changed = new_base.is_some();
            let base = new_base.unwrap_or_else(|| (**base).clone());

            if *exponent == 0.0 {
                step_collector.push(Step::PowerZero);
                Some(Term::Constant(1.0))
            } else if *exponent == 1.0 {
                step_collector.push(Step::PowerOne);
                Some(base)
            } else if let Term::Power(inner, inner_exponent) = base {
                step_collector.push(Step::PowerOfPower);
                Some((*inner).pow(inner_exponent * exponent))
            } else if changed {
                Some(Term::power(base, *exponent))
            } else {
                None
            }
        },
        Term::Function(func, argument) => {
            inner_simplify(argument, step_collector).map(|argument| Term::call(*func, argument))
        },
        Term::Sum(lhs, rhs) => simplify_children(lhs, rhs, step_collector, Term::sum),
        Term::Difference(lhs, rhs) => simplify_children(lhs, rhs, step_collector, Term::difference),
        Term::Product(lhs, rhs) => simplify_children(lhs, rhs, step_collector, Term::product),
        Term::Quotient(lhs, rhs) => simplify_children(lhs, rhs, step_collector, Term::quotient),
    }
}

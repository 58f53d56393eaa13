//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the term to simplify as an argument, and
//! returns `Some(term)` with the simplified term if the rule applies, or `None` if the rule does
//! not apply. Rules only look at the top-level node of the term; its children are simplified
//! beforehand by [`simplify_subexpressions`](super::subexpr::simplify_subexpressions).

pub mod difference;
pub mod fraction;
pub mod like_terms;
pub mod logarithm;
pub mod power;
pub mod product;
pub mod quotient;
pub mod sum;
pub mod trigonometry;

use crate::{step_collector::StepCollector, term::{Func, Term}};
use super::step::Step;

/// If the term is a sum, calls the given transformation function with both operands.
///
/// Returns `Some(term)` with the transformed term if a transformation was applied.
pub(crate) fn do_sum(term: &Term, f: impl Fn(&Term, &Term) -> Option<Term>) -> Option<Term> {
    if let Term::Sum(lhs, rhs) = term {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the term is a difference, calls the given transformation function with both operands.
///
/// Returns `Some(term)` with the transformed term if a transformation was applied.
pub(crate) fn do_difference(term: &Term, f: impl Fn(&Term, &Term) -> Option<Term>) -> Option<Term> {
    if let Term::Difference(lhs, rhs) = term {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the term is a product, calls the given transformation function with both factors.
///
/// Returns `Some(term)` with the transformed term if a transformation was applied.
pub(crate) fn do_product(term: &Term, f: impl Fn(&Term, &Term) -> Option<Term>) -> Option<Term> {
    if let Term::Product(lhs, rhs) = term {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the term is a quotient, calls the given transformation function with the numerator and
/// denominator.
///
/// Returns `Some(term)` with the transformed term if a transformation was applied.
pub(crate) fn do_quotient(term: &Term, f: impl Fn(&Term, &Term) -> Option<Term>) -> Option<Term> {
    if let Term::Quotient(lhs, rhs) = term {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the term is a power, calls the given transformation function with the base and exponent.
///
/// Returns `Some(term)` with the transformed term if a transformation was applied.
pub(crate) fn do_power(term: &Term, f: impl Fn(&Term, f64) -> Option<Term>) -> Option<Term> {
    if let Term::Power(base, exponent) = term {
        f(base, *exponent)
    } else {
        None
    }
}

/// If the term is an application of the given function, calls the given transformation function
/// with the argument.
///
/// Returns `Some(term)` with the transformed term if a transformation was applied.
pub(crate) fn do_call(term: &Term, func: Func, f: impl Fn(&Term) -> Option<Term>) -> Option<Term> {
    match term {
        Term::Function(target, argument) if *target == func => f(argument),
        _ => None,
    }
}

/// Applies the identity, folding, and cancellation rules for the kind of the top-level node.
pub fn simplify_basic_algebra(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    product::all(term, step_collector)
        .or_else(|| sum::all(term, step_collector))
        .or_else(|| difference::all(term, step_collector))
        .or_else(|| quotient::all(term, step_collector))
        .or_else(|| power::all(term, step_collector))
}

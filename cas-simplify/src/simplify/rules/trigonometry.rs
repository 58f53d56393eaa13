//! Simplification rules for trigonometric identities.

use crate::{
    simplify::{rules::{do_quotient, do_sum}, step::Step},
    step_collector::StepCollector,
    term::{Func, Term},
};

/// If the term is `sin(a)^2` or `cos(a)^2`, returns the function and `a`.
fn sin_or_cos_squared(term: &Term) -> Option<(Func, &Term)> {
    let (base, exponent) = term.base_and_exponent();
    if exponent != 2.0 || !matches!(term, Term::Power(..)) {
        return None;
    }

    match base {
        Term::Function(func @ (Func::Sin | Func::Cos), argument) => Some((*func, &**argument)),
        _ => None,
    }
}

/// `sin(a)^2 + cos(a)^2 = 1`
/// `cos(a)^2 + sin(a)^2 = 1`
pub fn pythagorean_identity(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_sum(term, |lhs, rhs| {
        let (lhs_func, lhs_arg) = sin_or_cos_squared(lhs)?;
        let (rhs_func, rhs_arg) = sin_or_cos_squared(rhs)?;
        (lhs_func != rhs_func && lhs_arg == rhs_arg).then(|| Term::Constant(1.0))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PythagoreanIdentity);
    Some(opt)
}

/// `sin(a)/cos(a) = tan(a)`
pub fn sin_over_cos(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_quotient(term, |lhs, rhs| {
        match (lhs, rhs) {
            (Term::Function(Func::Sin, a), Term::Function(Func::Cos, b)) if a == b => {
                Some(Term::call(Func::Tan, (**a).clone()))
            },
            _ => None,
        }
    })?;

    step_collector.push(Step::SinOverCos);
    Some(opt)
}

/// Applies all trigonometric rules.
pub fn simplify_trigonometric(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    pythagorean_identity(term, step_collector)
        .or_else(|| sin_over_cos(term, step_collector))
}

//! Simplification rules for powers.
//!
//! `a^0` and `a^1` are collapsed while simplifying subexpressions, since they are a consequence of
//! simplifying the base.

use crate::{
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
    term::Term,
};

/// `c1^c2 = c3`, if the result is finite
pub fn fold_constant_base(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_power(term, |base, exponent| {
        let value = base.as_constant()?.powf(exponent);
        value.is_finite().then_some(Term::Constant(value))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FoldPower);
    Some(opt)
}

/// Applies all rules.
pub fn all(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    fold_constant_base(term, step_collector)
}

//! Simplification rules for quotients.
//!
//! No rule in this module divides by a zero constant; quotients such as `4/0` are left as they
//! are.

use crate::{
    simplify::{rules::do_quotient, step::Step},
    step_collector::StepCollector,
    term::Term,
};

/// `a/1 = a`
pub fn divide_one(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_quotient(term, |lhs, rhs| rhs.is_value(1.0).then(|| lhs.clone()))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `0/a = 0`, where `a` is not `0`
pub fn divide_zero(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_quotient(term, |lhs, rhs| {
        (lhs.is_value(0.0) && !rhs.is_value(0.0)).then(|| Term::Constant(0.0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `c1/c2 = c3`, where `c2` is not `0`
pub fn fold_constants(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_quotient(term, |lhs, rhs| {
        let (lhs, rhs) = (lhs.as_constant()?, rhs.as_constant()?);
        (rhs != 0.0).then(|| Term::Constant(lhs / rhs))
    })?;

    step_collector.push(Step::FoldQuotient);
    Some(opt)
}

/// `a/a = 1`, where `a` is not `0`
pub fn divide_self(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_quotient(term, |lhs, rhs| {
        (lhs == rhs && !lhs.is_value(0.0)).then(|| Term::Constant(1.0))
    })?;

    step_collector.push(Step::DivideSelf);
    Some(opt)
}

/// Cancels the common base of `numerator` and `denominator`. Also returns whether the numerator
/// had a coefficient.
fn cancel_powers(numerator: &Term, denominator: &Term) -> Option<(Term, bool)> {
    let (coefficient, rest) = numerator.coefficient();
    let (base, m) = rest.base_and_exponent();
    let (denominator_base, n) = denominator.base_and_exponent();
    if base.is_constant() || base != denominator_base {
        return None;
    }

    // plain `a/a` is left to `divide_self`
    if coefficient.is_none() && !matches!(rest, Term::Power(..)) && !matches!(denominator, Term::Power(..)) {
        return None;
    }

    let c = coefficient.unwrap_or(1.0);
    let difference = m - n;
    let result = if difference > 0.0 {
        Term::with_coefficient(c, base.clone().pow(difference))
    } else if difference < 0.0 {
        Term::quotient(Term::Constant(c), base.clone().pow(-difference))
    } else {
        Term::Constant(c)
    };
    Some((result, coefficient.is_some()))
}

/// Cancels the common base of the numerator and denominator.
///
/// `(c*a^m)/a^n = c*a^(m-n)`, if `m > n`
/// `(c*a^m)/a^n = c/a^(n-m)`, if `m < n`
/// `(c*a^m)/a^m = c`
///
/// The coefficient `c` is optional, and either exponent can be `1`.
pub fn cancel_common_factor(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let Term::Quotient(numerator, denominator) = term else {
        return None;
    };
    let (result, has_coefficient) = cancel_powers(numerator, denominator)?;

    if has_coefficient {
        step_collector.push(Step::CancelCommonFactor);
    } else {
        step_collector.push(Step::QuotientOfPowers);
    }
    Some(result)
}

/// Applies all rules.
pub fn all(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    divide_one(term, step_collector)
        .or_else(|| divide_zero(term, step_collector))
        .or_else(|| fold_constants(term, step_collector))
        .or_else(|| divide_self(term, step_collector))
        .or_else(|| cancel_common_factor(term, step_collector))
}

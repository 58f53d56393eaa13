//! Simplification rules for logarithms and exponentials.
//!
//! The rules match on the argument of the function as it is, so they expect it to be simplified
//! already. Within a simplification pass, the subexpressions stage has done so by the time these
//! rules run, and the pass uses [`apply_logarithmic_rules`] directly. [`simplify_logarithmic`]
//! simplifies the argument itself first, so that rules such as `ln(x^n) = n*ln(x)` apply even when
//! the power only appears after simplification.

use crate::{
    simplify::{inner_simplify, rules::do_call, step::Step},
    step_collector::StepCollector,
    term::{Func, Term},
};

/// `f(a^n) = n*f(a)`, where `a` is a variable.
fn power_to_coefficient(func: Func, argument: &Term) -> Option<Term> {
    match argument {
        Term::Power(base, exponent) if base.as_variable().is_some() => {
            Some(Term::with_coefficient(*exponent, Term::call(func, (**base).clone())))
        },
        _ => None,
    }
}

/// `ln(a^n) = n*ln(a)`
/// `log(a^n) = n*log(a)`
pub fn log_of_power(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_call(term, Func::Ln, |argument| power_to_coefficient(Func::Ln, argument))
        .or_else(|| do_call(term, Func::Log, |argument| power_to_coefficient(Func::Log, argument)))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::LogOfPower);
    Some(opt)
}

/// `ln(exp(a)) = a`
pub fn ln_of_exp(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_call(term, Func::Ln, |argument| match argument {
        Term::Function(Func::Exp, inner) => Some((**inner).clone()),
        _ => None,
    })?;

    step_collector.push(Step::LnOfExp);
    Some(opt)
}

/// `exp(ln(a)) = a`
pub fn exp_of_ln(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_call(term, Func::Exp, |argument| match argument {
        Term::Function(Func::Ln, inner) => Some((**inner).clone()),
        _ => None,
    })?;

    step_collector.push(Step::ExpOfLn);
    Some(opt)
}

/// Applies all logarithm rules to a term whose argument is already simplified.
pub fn apply_logarithmic_rules(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    log_of_power(term, step_collector)
        .or_else(|| ln_of_exp(term, step_collector))
        .or_else(|| exp_of_ln(term, step_collector))
}

/// Applies all logarithm rules, after running one simplification pass over the argument of the
/// function. The argument is simplified once, and only for `ln`, `log` and `exp`.
///
/// Returns [`None`] if no rule applies, even if the argument could be simplified.
pub fn simplify_logarithmic(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let presimplified = match term {
        Term::Function(func @ (Func::Ln | Func::Log | Func::Exp), argument) => {
            inner_simplify(argument, &mut ()).map(|argument| Term::call(*func, argument))
        },
        _ => None,
    };

    apply_logarithmic_rules(presimplified.as_ref().unwrap_or(term), step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::simplify::{simplify_expression, SimplificationResult};
    use super::*;

    fn x() -> Term {
        Term::var("x")
    }

    #[test]
    fn power_inside_log() {
        let term = Term::call(Func::Ln, Term::power(x(), 3.0));
        assert_eq!(
            simplify_logarithmic(&term, &mut ()),
            Some(Term::product(Term::Constant(3.0), Term::call(Func::Ln, x()))),
        );

        let term = Term::call(Func::Log, Term::power(x(), -1.0));
        assert_eq!(
            simplify_logarithmic(&term, &mut ()),
            Some(Term::product(Term::Constant(-1.0), Term::call(Func::Log, x()))),
        );
    }

    #[test]
    fn power_after_presimplification() {
        // `x * x` only becomes `x^2` once the argument is simplified
        let term = Term::call(Func::Ln, Term::product(x(), x()));
        let mut steps = Vec::<Step>::new();
        assert_eq!(
            simplify_logarithmic(&term, &mut steps),
            Some(Term::product(Term::Constant(2.0), Term::call(Func::Ln, x()))),
        );
        assert_eq!(steps, vec![Step::LogOfPower]);
    }

    #[test]
    fn inverse_functions() {
        let term = Term::call(Func::Ln, Term::call(Func::Exp, x()));
        assert_eq!(simplify_logarithmic(&term, &mut ()), Some(x()));

        let term = Term::call(Func::Exp, Term::call(Func::Ln, x()));
        assert_eq!(simplify_logarithmic(&term, &mut ()), Some(x()));
    }

    #[test]
    fn rules_see_the_argument_as_given() {
        let term = Term::call(Func::Ln, Term::product(x(), x()));
        assert_eq!(apply_logarithmic_rules(&term, &mut ()), None);
    }

    /// Wraps the term in `depth` calls to `ln`.
    fn nested_ln(mut term: Term, depth: usize) -> Term {
        for _ in 0..depth {
            term = Term::call(Func::Ln, term);
        }
        term
    }

    #[test]
    fn deeply_nested_logarithms() {
        // a pass visits each level of the chain a fixed number of times, so this finishes
        // immediately even though every level is a logarithm
        let term = nested_ln(Term::power(x(), 2.0), 40);
        let two_ln_x = Term::product(Term::Constant(2.0), Term::call(Func::Ln, x()));
        assert_eq!(simplify_expression(&term), SimplificationResult {
            term: nested_ln(two_ln_x.clone(), 39),
            was_simplified: true,
        });

        // the argument is simplified once before `exp(ln(a)) = a` applies
        let mut steps = Vec::<Step>::new();
        assert_eq!(
            simplify_logarithmic(&Term::call(Func::Exp, term), &mut steps),
            Some(nested_ln(two_ln_x, 38)),
        );
        assert_eq!(steps, vec![Step::ExpOfLn]);
    }

    #[test]
    fn unrelated() {
        assert_eq!(simplify_logarithmic(&Term::call(Func::Ln, x()), &mut ()), None);
        assert_eq!(simplify_logarithmic(&Term::call(Func::Sin, Term::power(x(), 2.0)), &mut ()), None);
    }
}

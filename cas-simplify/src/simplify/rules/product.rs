//! Simplification rules for products.

use crate::{
    simplify::{rules::do_product, step::Step},
    step_collector::StepCollector,
    term::Term,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        (lhs.is_value(0.0) || rhs.is_value(0.0)).then(|| Term::Constant(0.0))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        if lhs.is_value(1.0) {
            Some(rhs.clone())
        } else if rhs.is_value(1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `-1*(c*a) = (-c)*a`
/// `a*-1 = -1*a`
pub fn negate(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        if lhs.is_value(-1.0) && !rhs.is_constant() {
            match rhs.coefficient() {
                (Some(c), rest) => Some(Term::with_coefficient(-c, rest.clone())),
                (None, _) => None,
            }
        } else if rhs.is_value(-1.0) && !lhs.is_constant() {
            Some(Term::product(Term::Constant(-1.0), lhs.clone()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::Negate);
    Some(opt)
}

/// `c1*c2 = c3`
pub fn fold_constants(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        Some(Term::Constant(lhs.as_constant()? * rhs.as_constant()?))
    })?;

    step_collector.push(Step::FoldProduct);
    Some(opt)
}

/// `a^m*a^n = a^(m+n)`
/// `a*a^n = a^(n+1)`
pub fn combine_like_factors(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        if !matches!(lhs, Term::Power(..)) && !matches!(rhs, Term::Power(..)) {
            return None;
        }

        let (lhs_base, m) = lhs.base_and_exponent();
        let (rhs_base, n) = rhs.base_and_exponent();
        if lhs_base.is_constant() || lhs_base != rhs_base {
            return None;
        }

        Some(lhs_base.clone().pow(m + n))
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// `sin(a)*sin(a) = sin(a)^2`
/// `cos(a)*cos(a) = cos(a)^2`
/// `tan(a)*tan(a) = tan(a)^2`
pub fn square_trig_function(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        match lhs {
            Term::Function(func, _) if func.is_trigonometric() && lhs == rhs => {
                Some(Term::power(lhs.clone(), 2.0))
            },
            _ => None,
        }
    })?;

    step_collector.push(Step::SquareFunction);
    Some(opt)
}

/// `a*a = a^2`
pub fn multiply_self(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        (lhs == rhs && !lhs.is_constant()).then(|| Term::power(lhs.clone(), 2.0))
    })?;

    step_collector.push(Step::MultiplySelf);
    Some(opt)
}

/// `c1*(c2*a) = (c1*c2)*a`
/// `(c1*a)*c2 = (c1*c2)*a`
/// `a*c = c*a`
pub fn reassociate_constants(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        match (lhs.as_constant(), rhs.as_constant()) {
            (Some(c1), None) => match rhs {
                Term::Product(a, b) => match (a.as_constant(), b.as_constant()) {
                    (Some(c2), _) => Some(Term::product(Term::Constant(c1 * c2), (**b).clone())),
                    (None, Some(c2)) => Some(Term::product(Term::Constant(c1 * c2), (**a).clone())),
                    (None, None) => None,
                },
                _ => None,
            },
            (None, Some(c2)) => match lhs {
                Term::Product(a, b) => match (a.as_constant(), b.as_constant()) {
                    (Some(c1), _) => Some(Term::product(Term::Constant(c1 * c2), (**b).clone())),
                    (None, Some(c1)) => Some(Term::product(Term::Constant(c1 * c2), (**a).clone())),
                    (None, None) => Some(Term::product(rhs.clone(), lhs.clone())),
                },
                _ => Some(Term::product(rhs.clone(), lhs.clone())),
            },
            _ => None,
        }
    })?;

    step_collector.push(Step::ReassociateConstants);
    Some(opt)
}

/// Moves the coefficients of both factors to the front of the product.
///
/// `a*(c*b) = c*(a*b)`
/// `(c*a)*b = c*(a*b)`
/// `(c1*a)*(c2*b) = (c1*c2)*(a*b)`
pub fn hoist_coefficient(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        if lhs.is_constant() || rhs.is_constant() {
            return None;
        }

        let (lhs_coeff, lhs_rest) = lhs.coefficient();
        let (rhs_coeff, rhs_rest) = rhs.coefficient();
        if lhs_coeff.is_none() && rhs_coeff.is_none() {
            return None;
        }

        Some(Term::with_coefficient(
            lhs_coeff.unwrap_or(1.0) * rhs_coeff.unwrap_or(1.0),
            Term::product(lhs_rest.clone(), rhs_rest.clone()),
        ))
    })?;

    step_collector.push(Step::HoistCoefficient);
    Some(opt)
}

/// Cancels the denominator of a quotient that is multiplied by the same term.
///
/// `(a/b)*b = a`
/// `(a/b)*(c*b) = c*a`
/// `(a/(c*b))*b = a/c`
fn cancel_with_factor(numerator: &Term, denominator: &Term, factor: &Term) -> Option<Term> {
    if denominator == factor {
        return Some(numerator.clone());
    }

    if let (Some(c), rest) = factor.coefficient() {
        if rest == denominator {
            return Some(Term::with_coefficient(c, numerator.clone()));
        }
    }

    if let (Some(c), rest) = denominator.coefficient() {
        if rest == factor && c != 0.0 {
            return Some(Term::quotient(numerator.clone(), Term::Constant(c)));
        }
    }

    None
}

/// `(a/b)*b = a`
/// `b*(a/b) = a`
pub fn cancel_quotient(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    let opt = do_product(term, |lhs, rhs| {
        match (lhs, rhs) {
            (Term::Quotient(numerator, denominator), factor)
                | (factor, Term::Quotient(numerator, denominator))
                if matches!(factor, Term::Variable(_) | Term::Product(..)) => {
                cancel_with_factor(numerator, denominator, factor)
            },
            _ => None,
        }
    })?;

    step_collector.push(Step::CancelQuotient);
    Some(opt)
}

/// Applies all rules.
pub fn all(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    multiply_zero(term, step_collector)
        .or_else(|| multiply_one(term, step_collector))
        .or_else(|| negate(term, step_collector))
        .or_else(|| fold_constants(term, step_collector))
        .or_else(|| combine_like_factors(term, step_collector))
        .or_else(|| square_trig_function(term, step_collector))
        .or_else(|| multiply_self(term, step_collector))
        .or_else(|| reassociate_constants(term, step_collector))
        .or_else(|| cancel_quotient(term, step_collector))
        .or_else(|| hoist_coefficient(term, step_collector))
}

//! Merging of similar terms, and conversion between sums and lists of terms.

use crate::{order::sort_terms_by_exponent, predicates::are_similar_terms, term::Term};

/// Adds or subtracts two similar terms (see [`are_similar_terms`]).
///
/// Two constants are folded into one. Otherwise, the coefficients of both terms (`1` if a term has
/// none) are added or subtracted, and the result is applied to the remaining factor of `a`:
///
/// - `x + x = 2 * x`
/// - `x - x = 0`
/// - `3 * x + x = 4 * x`
/// - `2 * sin(x) - 3 * sin(x) = -1 * sin(x)`
pub fn combine_similar_terms(a: &Term, b: &Term, is_addition: bool) -> Term {
    let op = |lhs: f64, rhs: f64| if is_addition { lhs + rhs } else { lhs - rhs };

    if let (Term::Constant(lhs), Term::Constant(rhs)) = (a, b) {
        return Term::Constant(op(*lhs, *rhs));
    }

    let (a_coeff, rest) = a.coefficient();
    let (b_coeff, _) = b.coefficient();
    Term::with_coefficient(op(a_coeff.unwrap_or(1.0), b_coeff.unwrap_or(1.0)), rest.clone())
}

/// Unrolls a tree of sums and differences into the list of terms that are added together. The
/// right-hand side of each difference is negated.
///
/// `x - (y + 2) + z` -> `[x, -1 * y, -2, z]`
pub fn flatten_expression(term: &Term) -> Vec<Term> {
    fn flatten_into(term: &Term, negate: bool, terms: &mut Vec<Term>) {
        match term {
            Term::Sum(lhs, rhs) => {
                flatten_into(lhs, negate, terms);
                flatten_into(rhs, negate, terms);
            },
            Term::Difference(lhs, rhs) => {
                flatten_into(lhs, negate, terms);
                flatten_into(rhs, !negate, terms);
            },
            term if negate => terms.push(-term.clone()),
            term => terms.push(term.clone()),
        }
    }

    let mut terms = Vec::new();
    flatten_into(term, false, &mut terms);
    terms
}

/// Combines the similar terms of a list of terms that are added together.
///
/// All constants are summed into a single constant, which is placed last if it is non-zero. Each
/// remaining term absorbs every later term similar to it; terms that cancel out are dropped. The
/// result is sorted by descending degree.
pub fn simplify_terms_sum(terms: Vec<Term>) -> Vec<Term> {
    let mut constant_total = 0.0;
    let mut others = Vec::with_capacity(terms.len());
    for term in terms {
        match term {
            Term::Constant(value) => constant_total += value,
            term => others.push(term),
        }
    }

    let mut used = vec![false; others.len()];
    let mut combined = Vec::with_capacity(others.len() + 1);
    for i in 0..others.len() {
        if used[i] {
            continue;
        }

        // `None` after the accumulated terms cancel out; later similar terms start over
        let mut current = Some(others[i].clone());
        for j in i + 1..others.len() {
            if used[j] || !are_similar_terms(&others[i], &others[j]) {
                continue;
            }

            used[j] = true;
            current = match current {
                Some(acc) => Some(combine_similar_terms(&acc, &others[j], true)),
                None => Some(others[j].clone()),
            }
            .filter(|term| !term.is_value(0.0));
        }

        combined.extend(current);
    }

    if constant_total != 0.0 {
        combined.push(Term::Constant(constant_total));
    }

    sort_terms_by_exponent(&mut combined);
    combined
}

/// Rebuilds a list of terms into a left-associated chain of sums. An empty list produces `0`.
pub fn build_sum(terms: Vec<Term>) -> Term {
    let mut terms = terms.into_iter();
    let Some(first) = terms.next() else {
        return Term::Constant(0.0);
    };
    terms.fold(first, Term::sum)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::term::Func;

    fn x() -> Term {
        Term::var("x")
    }

    #[test]
    fn combine_variables() {
        assert_eq!(combine_similar_terms(&x(), &x(), true), Term::product(Term::Constant(2.0), x()));
        assert_eq!(combine_similar_terms(&x(), &x(), false), Term::Constant(0.0));
        assert_eq!(combine_similar_terms(&Term::Constant(2.0), &Term::Constant(3.5), true), Term::Constant(5.5));
    }

    #[test]
    fn combine_coefficients() {
        let three_x = Term::product(Term::Constant(3.0), x());
        assert_eq!(combine_similar_terms(&three_x, &x(), true), Term::product(Term::Constant(4.0), x()));
        assert_eq!(combine_similar_terms(&three_x, &x(), false), Term::product(Term::Constant(2.0), x()));

        let two_x = Term::product(Term::Constant(2.0), x());
        assert_eq!(combine_similar_terms(&two_x, &x(), false), x());

        let sin = Term::call(Func::Sin, x());
        assert_eq!(combine_similar_terms(&sin, &sin, true), Term::product(Term::Constant(2.0), sin));
    }

    #[test]
    fn flatten() {
        let term = Term::sum(
            Term::difference(x(), Term::sum(Term::var("y"), Term::Constant(2.0))),
            Term::var("z"),
        );
        assert_eq!(flatten_expression(&term), vec![
            x(),
            Term::product(Term::Constant(-1.0), Term::var("y")),
            Term::Constant(-2.0),
            Term::var("z"),
        ]);
    }

    #[test]
    fn sum_of_terms() {
        let terms = vec![
            Term::Constant(1.0),
            Term::product(Term::Constant(3.0), x()),
            Term::power(x(), 2.0),
            Term::product(Term::Constant(-5.0), x()),
            Term::Constant(1.0),
        ];
        assert_eq!(simplify_terms_sum(terms), vec![
            Term::power(x(), 2.0),
            Term::product(Term::Constant(-2.0), x()),
            Term::Constant(2.0),
        ]);
    }

    #[test]
    fn cancelled_terms_are_dropped() {
        let terms = vec![
            x(),
            Term::Constant(3.0),
            Term::product(Term::Constant(-1.0), x()),
            Term::Constant(-3.0),
        ];
        assert_eq!(simplify_terms_sum(terms), Vec::<Term>::new());
        assert_eq!(build_sum(vec![]), Term::Constant(0.0));
    }

    #[test]
    fn left_associated() {
        assert_eq!(
            build_sum(vec![x(), Term::var("y"), Term::var("z")]),
            Term::sum(Term::sum(x(), Term::var("y")), Term::var("z")),
        );
    }
}

use cas_simplify::{
    derivative,
    order::ensure_polynomial_order,
    combine::flatten_expression,
    predicates::{are_similar_terms, get_term_exponent},
    simplify,
    simplify_expression,
    Func,
    SimplificationResult,
    Term,
};
use pretty_assertions::assert_eq;

fn x() -> Term {
    Term::var("x")
}

fn c(value: f64) -> Term {
    Term::Constant(value)
}

fn parse(source: &str) -> Term {
    source.parse().expect("Failed to parse")
}

/// The quotient rule applied to `x / (x^2 + 1)`, before simplification.
fn quotient_rule_derivative() -> Term {
    derivative(&parse("x / (x^2 + 1)"), "x")
}

fn samples() -> Vec<Term> {
    vec![
        parse("x^2 + 3*x - 5*x + 2"),
        parse("sin(x)^2 + cos(x)^2"),
        parse("x * x * x"),
        parse("(5x) / x"),
        parse("ln(x^3)"),
        parse("3x + 2x"),
        parse("x^2 * x^3"),
        quotient_rule_derivative(),
    ]
}

#[test]
fn quadratic() {
    let result = simplify_expression(&parse("x^2 + 3*x - 5*x + 2"));
    assert_eq!(result, SimplificationResult {
        term: Term::sum(
            Term::sum(Term::power(x(), 2.0), Term::product(c(-2.0), x())),
            c(2.0),
        ),
        was_simplified: true,
    });
    assert_eq!(result.term.to_string(), "x^2 - 2 * x + 2");

    let degrees = flatten_expression(&result.term)
        .iter()
        .map(get_term_exponent)
        .collect::<Vec<_>>();
    assert_eq!(degrees, vec![2.0, 1.0, 0.0]);
}

#[test]
fn same_base_power_product() {
    let term = Term::product(Term::power(x(), 2.0), Term::power(x(), 3.0));
    assert_eq!(simplify(&term), Term::power(x(), 5.0));
}

#[test]
fn division_cancellation() {
    let term = Term::quotient(Term::product(c(5.0), x()), x());
    assert_eq!(simplify(&term), c(5.0));
}

#[test]
fn log_of_power() {
    let term = Term::call(Func::Ln, Term::power(x(), 3.0));
    assert_eq!(simplify(&term), Term::product(c(3.0), Term::call(Func::Ln, x())));
}

#[test]
fn zero_denominator() {
    let term = Term::quotient(c(4.0), c(0.0));
    assert_eq!(simplify_expression(&term), SimplificationResult {
        term: term.clone(),
        was_simplified: false,
    });
    assert_eq!(simplify(&term), term);
}

#[test]
fn like_terms() {
    let term = Term::sum(Term::product(c(3.0), x()), Term::product(c(2.0), x()));
    assert_eq!(simplify(&term), Term::product(c(5.0), x()));
}

#[test]
fn pythagorean_identity() {
    let term = Term::sum(
        Term::power(Term::call(Func::Sin, x()), 2.0),
        Term::power(Term::call(Func::Cos, x()), 2.0),
    );
    assert_eq!(simplify(&term), c(1.0));
}

#[test]
fn polynomial_order() {
    let term = Term::sum(Term::sum(c(3.0), Term::power(x(), 2.0)), x());
    let ordered = ensure_polynomial_order(&term, &mut ()).unwrap();
    let degrees = flatten_expression(&ordered)
        .iter()
        .map(get_term_exponent)
        .collect::<Vec<_>>();
    assert_eq!(degrees, vec![2.0, 1.0, 0.0]);
}

#[test]
fn derivative_of_rational_function() {
    let simplified = simplify(&quotient_rule_derivative());
    let shifted_square = Term::sum(Term::power(x(), 2.0), c(1.0));
    assert_eq!(simplified, Term::quotient(
        Term::sum(Term::product(c(-1.0), Term::power(x(), 2.0)), c(1.0)),
        Term::power(shifted_square, 2.0),
    ));
    assert_eq!(simplified.to_string(), "(-x^2 + 1) / (x^2 + 1)^2");
}

#[test]
fn stable_after_two_passes() {
    for term in samples() {
        let first = simplify_expression(&term);
        let second = simplify_expression(&first.term);
        let third = simplify_expression(&second.term);
        assert!(!third.was_simplified, "`{}` still changed on the third pass", term);
        assert_eq!(third.term, simplify(&term));
    }
}

#[test]
fn constant_folding() {
    let values = [-3.5, -1.0, 0.0, 0.25, 1.0, 2.0, 7.0];
    for a in values {
        for b in values {
            assert_eq!(simplify(&Term::product(c(a), c(b))), c(a * b));
            assert_eq!(simplify(&Term::sum(c(a), c(b))), c(a + b));
            assert_eq!(simplify(&Term::difference(c(a), c(b))), c(a - b));
            if b != 0.0 {
                assert_eq!(simplify(&Term::quotient(c(a), c(b))), c(a / b));
            }
        }
    }
}

#[test]
fn identity_laws() {
    for term in samples() {
        let expected = simplify(&term);
        assert_eq!(simplify(&Term::product(c(1.0), term.clone())), expected);
        assert_eq!(simplify(&Term::sum(c(0.0), term.clone())), expected);
        assert_eq!(simplify(&Term::quotient(term.clone(), c(1.0))), expected);
    }
}

#[test]
fn equality_and_similarity() {
    let mut terms = samples();
    terms.push(Term::product(c(f64::NAN), x()));
    terms.push(c(2.0));
    terms.push(Term::product(c(4.0), Term::call(Func::Sin, x())));
    terms.push(Term::call(Func::Sin, x()));

    for a in &terms {
        assert_eq!(a, &a.clone());
        for b in &terms {
            assert_eq!(are_similar_terms(a, b), are_similar_terms(b, a));
        }
    }
}

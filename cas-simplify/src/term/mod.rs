//! The expression tree manipulated by the simplifier.
//!
//! A [`Term`] is a single node of a mathematical expression: a constant, a variable, a power with
//! a numeric exponent, a unary function application, or one of the four binary arithmetic
//! operations. Terms are immutable values; every rule of the simplifier builds a new [`Term`]
//! instead of modifying an existing one, and each node exclusively owns its children.
//!
//! # Equality and similarity
//!
//! Two relations between terms are used throughout the simplifier.
//!
//! **Equality** is the [`PartialEq`] implementation of [`Term`]: two terms are equal if they are
//! the same kind of node with equal values and equal children, recursively. It is purely
//! structural. `x + 1` and `1 + x` are **not** equal, and neither are `2 * x` and `x * 2`.
//! Constants are compared exactly, without any tolerance, except that `NaN` is considered equal to
//! itself so that every term is equal to itself.
//!
//! **Similarity** (see [`are_similar_terms`]) is a weaker relation used to decide whether two
//! terms can be merged by addition or subtraction. `x` and `2 * x` are similar, and so are
//! `3 * sin(x)` and `sin(x)`, but `x` and `x^2` are not.
//!
//! [`are_similar_terms`]: crate::predicates::are_similar_terms

mod convert;
pub mod error;
mod eval;
mod fmt;
mod iter;

pub use iter::TermIter;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary function that can be applied to a [`Term`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log,
    /// `e` raised to the argument.
    Exp,
    Sqrt,
    Arcsin,
    Arccos,
    Arctan,
}

impl Func {
    /// All supported functions.
    pub const ALL: [Func; 10] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Ln,
        Func::Log,
        Func::Exp,
        Func::Sqrt,
        Func::Arcsin,
        Func::Arccos,
        Func::Arctan,
    ];

    /// Returns the name of the function, as it is written in an expression.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Ln => "ln",
            Func::Log => "log",
            Func::Exp => "exp",
            Func::Sqrt => "sqrt",
            Func::Arcsin => "arcsin",
            Func::Arccos => "arccos",
            Func::Arctan => "arctan",
        }
    }

    /// Returns the function with the given name, if there is one.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns true if the function is `sin`, `cos`, or `tan`.
    pub fn is_trigonometric(self) -> bool {
        matches!(self, Func::Sin | Func::Cos | Func::Tan)
    }

    /// Evaluates the function at the given value.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Ln => x.ln(),
            Func::Log => x.log10(),
            Func::Exp => x.exp(),
            Func::Sqrt => x.sqrt(),
            Func::Arcsin => x.asin(),
            Func::Arccos => x.acos(),
            Func::Arctan => x.atan(),
        }
    }
}

/// A node of an expression tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// A numeric literal, such as `2` or `0.5`.
    Constant(f64),

    /// A named symbol, such as `x`.
    Variable(String),

    /// A term raised to a numeric exponent, such as `x^2`.
    Power(Box<Term>, f64),

    /// A unary function applied to a term, such as `sin(x)`.
    Function(Func, Box<Term>),

    /// `left + right`
    Sum(Box<Term>, Box<Term>),

    /// `left - right`
    Difference(Box<Term>, Box<Term>),

    /// `left * right`
    Product(Box<Term>, Box<Term>),

    /// `left / right`
    Quotient(Box<Term>, Box<Term>),
}

/// Exact float comparison, where `NaN` is equal to `NaN`.
pub(crate) fn float_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Structural equality. See the [module-level documentation](self) for more information.
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Constant(a), Term::Constant(b)) => float_eq(*a, *b),
            (Term::Variable(a), Term::Variable(b)) => a == b,
            (Term::Power(a, m), Term::Power(b, n)) => float_eq(*m, *n) && a == b,
            (Term::Function(f, a), Term::Function(g, b)) => f == g && a == b,
            (Term::Sum(a, b), Term::Sum(c, d))
                | (Term::Difference(a, b), Term::Difference(c, d))
                | (Term::Product(a, b), Term::Product(c, d))
                | (Term::Quotient(a, b), Term::Quotient(c, d)) => a == c && b == d,
            _ => false,
        }
    }
}

impl Term {
    /// Creates a [`Term::Variable`] with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    /// Creates a [`Term::Sum`].
    pub fn sum(left: Term, right: Term) -> Self {
        Term::Sum(Box::new(left), Box::new(right))
    }

    /// Creates a [`Term::Difference`].
    pub fn difference(left: Term, right: Term) -> Self {
        Term::Difference(Box::new(left), Box::new(right))
    }

    /// Creates a [`Term::Product`].
    pub fn product(left: Term, right: Term) -> Self {
        Term::Product(Box::new(left), Box::new(right))
    }

    /// Creates a [`Term::Quotient`].
    pub fn quotient(left: Term, right: Term) -> Self {
        Term::Quotient(Box::new(left), Box::new(right))
    }

    /// Creates a [`Term::Power`], without simplifying it.
    pub fn power(base: Term, exponent: f64) -> Self {
        Term::Power(Box::new(base), exponent)
    }

    /// Creates a [`Term::Function`].
    pub fn call(func: Func, argument: Term) -> Self {
        Term::Function(func, Box::new(argument))
    }

    /// Raises this term to the given exponent. Exponents of `0` and `1` produce `1` and the term
    /// itself, respectively.
    pub fn pow(self, exponent: f64) -> Self {
        if exponent == 0.0 {
            Term::Constant(1.0)
        } else if exponent == 1.0 {
            self
        } else {
            Term::power(self, exponent)
        }
    }

    /// Returns the value of the term if it is a [`Term::Constant`].
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Term::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the term is a [`Term::Constant`].
    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Constant(_))
    }

    /// Returns true if the term is a [`Term::Constant`] with the given value.
    pub fn is_value(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Returns the name of the variable if the term is a [`Term::Variable`].
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Splits the term into its numeric coefficient and the remaining factor.
    ///
    /// Only products with a constant on either side have a coefficient. Nested constant factors
    /// are multiplied together:
    ///
    /// - `2 * x` -> `(Some(2), x)`
    /// - `x * 2` -> `(Some(2), x)`
    /// - `2 * (3 * x)` -> `(Some(6), x)`
    /// - `x` -> `(None, x)`
    pub fn coefficient(&self) -> (Option<f64>, &Term) {
        match self {
            Term::Product(lhs, rhs) => match (lhs.as_constant(), rhs.as_constant()) {
                (Some(c), _) => {
                    let (inner, rest) = rhs.coefficient();
                    (Some(c * inner.unwrap_or(1.0)), rest)
                },
                (None, Some(c)) => {
                    let (inner, rest) = lhs.coefficient();
                    (Some(c * inner.unwrap_or(1.0)), rest)
                },
                (None, None) => (None, self),
            },
            _ => (None, self),
        }
    }

    /// Builds `coefficient * rest`, collapsing coefficients of `0` and `1`.
    pub fn with_coefficient(coefficient: f64, rest: Term) -> Self {
        if coefficient == 0.0 {
            Term::Constant(0.0)
        } else if coefficient == 1.0 {
            rest
        } else {
            Term::product(Term::Constant(coefficient), rest)
        }
    }

    /// Returns the base and exponent of the term. Terms that are not a [`Term::Power`] have an
    /// exponent of `1`.
    pub fn base_and_exponent(&self) -> (&Term, f64) {
        match self {
            Term::Power(base, exponent) => (base, *exponent),
            term => (term, 1.0),
        }
    }

    /// Returns an iterator that traverses the tree of terms in left-to-right post-order (i.e.
    /// depth-first).
    pub fn post_order_iter(&self) -> TermIter {
        TermIter::new(self)
    }

    /// Returns true if the variable with the given name appears anywhere in the term.
    pub fn contains_variable(&self, name: &str) -> bool {
        self.post_order_iter().any(|term| term.as_variable() == Some(name))
    }

    /// Returns the number of nodes in the term.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

/// Negates a term, folding the sign into a constant or an existing coefficient when possible.
///
/// - `-(3) = -3`
/// - `-(2 * x) = -2 * x`
/// - `-(-1 * x) = x`
/// - `-x = -1 * x`
impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Self::Output {
        if let Term::Constant(value) = self {
            return Term::Constant(-value);
        }

        let (coefficient, rest) = self.coefficient();
        match coefficient {
            Some(c) => Term::with_coefficient(-c, rest.clone()),
            None => Term::product(Term::Constant(-1.0), self),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Term::sum(Term::var("x"), Term::Constant(1.0));
        let b = Term::sum(Term::Constant(1.0), Term::var("x"));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_ne!(Term::power(Term::var("x"), 2.0), Term::power(Term::var("x"), 3.0));
        assert_ne!(Term::call(Func::Sin, Term::var("x")), Term::call(Func::Cos, Term::var("x")));
    }

    #[test]
    fn equality_is_reflexive_for_nan() {
        let nan = Term::product(Term::Constant(f64::NAN), Term::power(Term::var("x"), f64::NAN));
        assert_eq!(nan, nan.clone());
    }

    #[test]
    fn nested_coefficient() {
        let term = Term::product(
            Term::Constant(2.0),
            Term::product(Term::var("x"), Term::Constant(3.0)),
        );
        assert_eq!(term.coefficient(), (Some(6.0), &Term::var("x")));
        assert_eq!(Term::var("x").coefficient(), (None, &Term::var("x")));
    }

    #[test]
    fn negation() {
        assert_eq!(-Term::Constant(3.0), Term::Constant(-3.0));
        assert_eq!(
            -Term::product(Term::Constant(2.0), Term::var("x")),
            Term::product(Term::Constant(-2.0), Term::var("x")),
        );
        assert_eq!(-Term::product(Term::Constant(-1.0), Term::var("x")), Term::var("x"));
        assert_eq!(-Term::var("x"), Term::product(Term::Constant(-1.0), Term::var("x")));
    }

    #[test]
    fn pow_collapses_trivial_exponents() {
        assert_eq!(Term::var("x").pow(0.0), Term::Constant(1.0));
        assert_eq!(Term::var("x").pow(1.0), Term::var("x"));
        assert_eq!(Term::var("x").pow(2.0), Term::power(Term::var("x"), 2.0));
    }

    #[test]
    fn analysis() {
        let term = Term::sum(
            Term::power(Term::var("x"), 2.0),
            Term::call(Func::Sin, Term::var("y")),
        );
        assert!(term.contains_variable("y"));
        assert!(!term.contains_variable("z"));
        assert_eq!(term.node_count(), 5);
    }

    #[test]
    fn function_names() {
        for func in Func::ALL {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
        assert_eq!(Func::from_name("sinh"), None);
    }
}

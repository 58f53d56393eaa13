use super::Term;

impl Term {
    /// Numerically evaluates the term, looking up the value of each variable with the given
    /// function.
    ///
    /// Returns [`None`] if a variable has no value. Arithmetic follows IEEE 754, so dividing by
    /// zero or taking the logarithm of a negative number produces an infinite or `NaN` result
    /// rather than an error.
    pub fn eval(&self, lookup: &dyn Fn(&str) -> Option<f64>) -> Option<f64> {
        Some(match self {
            Term::Constant(value) => *value,
            Term::Variable(name) => lookup(name)?,
            Term::Power(base, exponent) => base.eval(lookup)?.powf(*exponent),
            Term::Function(func, argument) => func.apply(argument.eval(lookup)?),
            Term::Sum(lhs, rhs) => lhs.eval(lookup)? + rhs.eval(lookup)?,
            Term::Difference(lhs, rhs) => lhs.eval(lookup)? - rhs.eval(lookup)?,
            Term::Product(lhs, rhs) => lhs.eval(lookup)? * rhs.eval(lookup)?,
            Term::Quotient(lhs, rhs) => lhs.eval(lookup)? / rhs.eval(lookup)?,
        })
    }

    /// Numerically evaluates a term in a single variable at the given value.
    pub fn eval_at(&self, variable: &str, value: f64) -> Option<f64> {
        self.eval(&|name| (name == variable).then_some(value))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use super::*;
    use crate::term::Func;

    #[test]
    fn polynomial() {
        let term = Term::sum(
            Term::power(Term::var("x"), 2.0),
            Term::product(Term::Constant(3.0), Term::var("x")),
        );
        assert_float_relative_eq!(term.eval_at("x", 2.0).unwrap(), 10.0);
    }

    #[test]
    fn functions() {
        let term = Term::sum(
            Term::power(Term::call(Func::Sin, Term::var("t")), 2.0),
            Term::power(Term::call(Func::Cos, Term::var("t")), 2.0),
        );
        assert_float_relative_eq!(term.eval_at("t", 0.7).unwrap(), 1.0);
    }

    #[test]
    fn missing_variable() {
        let term = Term::sum(Term::var("x"), Term::var("y"));
        assert_eq!(term.eval_at("x", 1.0), None);
    }
}

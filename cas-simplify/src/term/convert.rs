use cas_error::Error;
use cas_parser::parser::{
    ast::{BinOpKind, Call, Expr as AstExpr, Literal, UnaryOpKind},
    Parser,
};
use std::{f64::consts, str::FromStr};
use super::{error, Func, Term};

/// Maximum edit distance between an unknown function name and a supported one for the supported
/// one to be suggested.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Returns the supported function whose name is closest to the given name, if it is close enough.
fn suggest_function(name: &str) -> Option<&'static str> {
    Func::ALL
        .iter()
        .map(|func| (func.name(), levenshtein::levenshtein(name, func.name())))
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

/// Parses the value of a numeric literal.
fn convert_number(literal: &str, span: std::ops::Range<usize>) -> Result<Term, Error> {
    literal
        .parse::<f64>()
        .map(Term::Constant)
        .map_err(|_| Error::new(vec![span], error::InvalidNumber { literal: literal.to_owned() }))
}

/// Converts a function call into a [`Term::Function`].
fn convert_call(call: &Call) -> Result<Term, Error> {
    let Some(func) = Func::from_name(&call.name.name) else {
        return Err(Error::new(vec![call.name.span.clone()], error::UnknownFunction {
            name: call.name.name.clone(),
            suggestion: suggest_function(&call.name.name),
        }));
    };

    match call.args.as_slice() {
        [arg] => Ok(Term::call(func, convert(arg)?)),
        args => Err(Error::new(call.outer_span().to_vec(), error::WrongArgumentCount {
            name: func.name(),
            given: args.len(),
        })),
    }
}

/// Converts `lhs^rhs` into a [`Term`]. The exponent must evaluate to a finite number, unless the
/// base is `e`.
fn convert_power(lhs: &AstExpr, rhs: &AstExpr) -> Result<Term, Error> {
    if let AstExpr::Literal(Literal::Symbol(sym)) = lhs.innermost() {
        if sym.name == "e" {
            return Ok(Term::call(Func::Exp, convert(rhs)?));
        }
    }

    let base = convert(lhs)?;
    let exponent = convert(rhs)?
        .eval(&|_| None)
        .filter(|exponent| exponent.is_finite())
        .ok_or_else(|| Error::new(vec![rhs.span()], error::NonNumericExponent))?;
    Ok(Term::power(base, exponent))
}

/// Converts a parsed expression into a [`Term`].
fn convert(expr: &AstExpr) -> Result<Term, Error> {
    match expr {
        AstExpr::Literal(Literal::Integer(int)) => convert_number(&int.value, int.span.clone()),
        AstExpr::Literal(Literal::Float(float)) => convert_number(&float.value, float.span.clone()),
        AstExpr::Literal(Literal::Symbol(sym)) => Ok(match sym.name.as_str() {
            "pi" => Term::Constant(consts::PI),
            "e" => Term::Constant(consts::E),
            name => Term::var(name),
        }),
        AstExpr::Paren(paren) => convert(paren.innermost()),
        AstExpr::Call(call) => convert_call(call),
        AstExpr::Unary(unary) => match unary.op.kind {
            UnaryOpKind::Neg => Ok(match convert(&unary.operand)? {
                Term::Constant(value) => Term::Constant(-value),
                operand => Term::product(Term::Constant(-1.0), operand),
            }),
        },
        AstExpr::Binary(binary) => match binary.op.kind {
            BinOpKind::Exp => convert_power(&binary.lhs, &binary.rhs),
            BinOpKind::Add => Ok(Term::sum(convert(&binary.lhs)?, convert(&binary.rhs)?)),
            BinOpKind::Sub => Ok(Term::difference(convert(&binary.lhs)?, convert(&binary.rhs)?)),
            BinOpKind::Mul => Ok(Term::product(convert(&binary.lhs)?, convert(&binary.rhs)?)),
            BinOpKind::Div => Ok(Term::quotient(convert(&binary.lhs)?, convert(&binary.rhs)?)),
        },
    }
}

/// Converts a parsed expression into a [`Term`].
///
/// - `pi` and `e` are converted into constants, and `e^u` into `exp(u)`.
/// - Function calls must name one of the supported [`Func`]s and have exactly one argument.
/// - Exponents must evaluate to a finite number, so `x^(1/2)` is accepted but `x^y` is not.
impl TryFrom<AstExpr> for Term {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        convert(&expr)
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr = Parser::new(s).try_parse_full::<AstExpr>()?;
        Term::try_from(expr)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses the given source into a [`Term`], panicking on failure.
    fn parse_term(source: &str) -> Term {
        source.parse().unwrap()
    }

    /// Returns the error produced when converting the given source.
    fn parse_error(source: &str) -> Error {
        source.parse::<Term>().unwrap_err()
    }

    #[test]
    fn polynomial() {
        assert_eq!(parse_term("x^2 + 3*x - 5"), Term::difference(
            Term::sum(
                Term::power(Term::var("x"), 2.0),
                Term::product(Term::Constant(3.0), Term::var("x")),
            ),
            Term::Constant(5.0),
        ));
    }

    #[test]
    fn negation() {
        assert_eq!(parse_term("-3"), Term::Constant(-3.0));
        assert_eq!(parse_term("-x"), Term::product(Term::Constant(-1.0), Term::var("x")));
    }

    #[test]
    fn constants_and_exp() {
        assert_eq!(parse_term("pi"), Term::Constant(consts::PI));
        assert_eq!(parse_term("e^(2x)"), Term::call(Func::Exp, Term::product(Term::Constant(2.0), Term::var("x"))));
        assert_eq!(parse_term("ln(e)"), Term::call(Func::Ln, Term::Constant(consts::E)));
    }

    #[test]
    fn evaluated_exponent() {
        assert_eq!(parse_term("x^(1/2)"), Term::power(Term::var("x"), 0.5));
        assert_eq!(parse_term("x^-2"), Term::power(Term::var("x"), -2.0));
    }

    #[test]
    fn symbolic_exponent() {
        let err = parse_error("2^x");
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn unknown_function() {
        let err = parse_error("sinn(x)");
        assert_eq!(err.spans, vec![0..4]);
        assert_eq!(format!("{:?}", err.kind), format!("{:?}", error::UnknownFunction {
            name: "sinn".to_string(),
            suggestion: Some("sin"),
        }));
    }

    #[test]
    fn no_suggestion() {
        assert_eq!(suggest_function("foobar"), None);
        assert_eq!(suggest_function("arctn"), Some("arctan"));
    }

    #[test]
    fn wrong_argument_count() {
        let err = parse_error("ln(x, 2)");
        assert_eq!(err.spans, vec![0..3, 7..8]);
    }
}

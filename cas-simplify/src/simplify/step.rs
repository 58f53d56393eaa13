use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite that was applied while simplifying a term.
///
/// The law each step applies is shown in its documentation, where `c` stands for a constant and
/// `f` for a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `(a^m)^n = a^(m*n)`
    PowerOfPower,

    /// `c1^c2 = c3`
    FoldPower,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// `-1*(c*a) = (-c)*a`
    /// `a*-1 = -1*a`
    Negate,

    /// `c1*c2 = c3`
    FoldProduct,

    /// `a^m*a^n = a^(m+n)`
    CombineLikeFactors,

    /// `f(a)*f(a) = f(a)^2`, for trigonometric `f`
    SquareFunction,

    /// `a*a = a^2`
    MultiplySelf,

    /// `c1*(c2*a) = (c1*c2)*a`
    /// `a*c = c*a`
    ReassociateConstants,

    /// `a*(c*b) = c*(a*b)`
    HoistCoefficient,

    /// `(a/b)*b = a`
    CancelQuotient,

    /// `0+a = a`
    AddZero,

    /// `c1+c2 = c3`
    FoldSum,

    /// `m*a + n*a = (m+n)*a`
    /// `m*a - n*a = (m-n)*a`
    CombineSimilarTerms,

    /// `(a + b) + c = a + b + c`, merging similar terms
    MergeNestedSums,

    /// `a-0 = a`
    SubtractZero,

    /// `c1-c2 = c3`
    FoldDifference,

    /// `a-a = 0`
    SubtractSelf,

    /// `0-a = -a`
    ZeroMinus,

    /// `a-(c*b) = a+(-c*b)`, for negative `c`
    NormalizeSign,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    DivideZero,

    /// `c1/c2 = c3`
    FoldQuotient,

    /// `a/a = 1`
    DivideSelf,

    /// `(c*a^m)/a^n = c*a^(m-n)`
    CancelCommonFactor,

    /// `a^m/a^n = a^(m-n)`
    QuotientOfPowers,

    /// `2*x + 3 + x = 3*x + 3`
    CombineLikeTerms,

    /// `3 + x^2 - x = x^2 - x + 3`
    PolynomialOrder,

    /// `a/(c*a) = 1/c`
    ReciprocalCoefficient,

    /// `(a^2+k - 2*a^2)/(a^2+k)^2 = (k - a^2)/(a^2+k)^2`
    DifferenceOverSquare,

    /// `sin(a)^2 + cos(a)^2 = 1`
    PythagoreanIdentity,

    /// `sin(a)/cos(a) = tan(a)`
    SinOverCos,

    /// `ln(a^n) = n*ln(a)`
    LogOfPower,

    /// `ln(exp(a)) = a`
    LnOfExp,

    /// `exp(ln(a)) = a`
    ExpOfLn,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let law = match self {
            Step::PowerZero => "a^0 = 1",
            Step::PowerOne => "a^1 = a",
            Step::PowerOfPower => "(a^m)^n = a^(m*n)",
            Step::FoldPower => "evaluate constant power",
            Step::MultiplyZero => "0 * a = 0",
            Step::MultiplyOne => "1 * a = a",
            Step::Negate => "move sign into coefficient",
            Step::FoldProduct => "evaluate constant product",
            Step::CombineLikeFactors => "a^m * a^n = a^(m+n)",
            Step::SquareFunction => "f(a) * f(a) = f(a)^2",
            Step::MultiplySelf => "a * a = a^2",
            Step::ReassociateConstants => "group constant factors",
            Step::HoistCoefficient => "a * (c * b) = c * (a * b)",
            Step::CancelQuotient => "(a / b) * b = a",
            Step::AddZero => "0 + a = a",
            Step::FoldSum => "evaluate constant sum",
            Step::CombineSimilarTerms => "m * a + n * a = (m + n) * a",
            Step::MergeNestedSums => "merge nested sums",
            Step::SubtractZero => "a - 0 = a",
            Step::FoldDifference => "evaluate constant difference",
            Step::SubtractSelf => "a - a = 0",
            Step::ZeroMinus => "0 - a = -a",
            Step::NormalizeSign => "a - (-c * b) = a + c * b",
            Step::DivideOne => "a / 1 = a",
            Step::DivideZero => "0 / a = 0",
            Step::FoldQuotient => "evaluate constant quotient",
            Step::DivideSelf => "a / a = 1",
            Step::CancelCommonFactor => "(c * a^m) / a^n = c * a^(m-n)",
            Step::QuotientOfPowers => "a^m / a^n = a^(m-n)",
            Step::CombineLikeTerms => "combine like terms",
            Step::PolynomialOrder => "order terms by degree",
            Step::ReciprocalCoefficient => "a / (c * a) = 1 / c",
            Step::DifferenceOverSquare => "(a^2 + k - 2 * a^2) / (a^2 + k)^2 = (k - a^2) / (a^2 + k)^2",
            Step::PythagoreanIdentity => "sin(a)^2 + cos(a)^2 = 1",
            Step::SinOverCos => "sin(a) / cos(a) = tan(a)",
            Step::LogOfPower => "ln(a^n) = n * ln(a)",
            Step::LnOfExp => "ln(exp(a)) = a",
            Step::ExpOfLn => "exp(ln(a)) = a",
        };
        f.write_str(law)
    }
}

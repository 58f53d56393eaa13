//! Simplification of terms.
//!
//! A single simplification pass runs a fixed pipeline of stages over a term, each stage rewriting
//! the output of the previous one:
//!
//! 1. [`simplify_subexpressions`]: simplifies the children of the term first.
//! 2. [`simplify_basic_algebra`]: identities and constant folding of the top-level node.
//! 3. [`combine_like_terms`]: merges similar terms of a sum.
//! 4. [`simplify_fractions`]
//! 5. [`simplify_trigonometric`]
//! 6. [`apply_logarithmic_rules`]: logarithm rules, on the argument simplified by stage 1.
//! 7. [`ensure_polynomial_order`]: orders the terms of a sum by degree.
//!
//! [`simplify_expression`] runs exactly one pass. Because the rules of one pass can enable rules
//! that already ran, [`simplify`] and its variants repeat passes until the term stops changing.
//!
//! [`ensure_polynomial_order`]: crate::order::ensure_polynomial_order

pub mod rules;
pub mod step;
pub mod subexpr;

use log::{debug, trace, warn};
use crate::{order::ensure_polynomial_order, step_collector::StepCollector, term::Term};
use rules::{
    fraction::simplify_fractions,
    like_terms::combine_like_terms,
    logarithm::apply_logarithmic_rules,
    simplify_basic_algebra,
    trigonometry::simplify_trigonometric,
};
use step::Step;
use subexpr::simplify_subexpressions;

/// A stage of the simplification pipeline.
type Stage = fn(&Term, &mut dyn StepCollector<Step>) -> Option<Term>;

/// The stages of a simplification pass, in the order they run.
const PIPELINE: [(&str, Stage); 7] = [
    ("subexpressions", simplify_subexpressions),
    ("basic algebra", simplify_basic_algebra),
    ("like terms", combine_like_terms),
    ("fractions", simplify_fractions),
    ("trigonometry", simplify_trigonometric),
    ("logarithms", apply_logarithmic_rules),
    ("polynomial order", ensure_polynomial_order),
];

/// Runs the given stages over the term in order. Returns [`Some`] with the new term if it changed.
///
/// Steps are only passed on to the step collector if the term changed, so a pass whose stages
/// cancel each other out reports no steps.
fn run_pass(
    stages: &[(&str, Stage)],
    term: &Term,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Term> {
    let mut steps = Vec::<Step>::new();
    let mut current: Option<Term> = None;
    for (name, stage) in stages {
        let input = current.as_ref().unwrap_or(term);
        if let Some(output) = stage(input, &mut steps) {
            trace!("{}: `{}` -> `{}`", name, input, output);
            current = Some(output);
        }
    }

    let output = current.filter(|output| output != term)?;
    for step in steps {
        step_collector.push(step);
    }
    Some(output)
}

/// Runs a single simplification pass over the term. Returns [`Some`] with the new term if it
/// changed.
pub(crate) fn inner_simplify(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
    run_pass(&PIPELINE, term, step_collector)
}

/// The result of a single simplification pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplificationResult {
    /// The simplified term, or a copy of the input if nothing changed.
    pub term: Term,

    /// Whether any stage rewrote the term into a different one.
    pub was_simplified: bool,
}

/// Runs a single simplification pass over the term.
///
/// The pass never fails: a rule that would need to divide by zero simply does not apply.
pub fn simplify_expression(term: &Term) -> SimplificationResult {
    match inner_simplify(term, &mut ()) {
        Some(term) => SimplificationResult { term, was_simplified: true },
        None => SimplificationResult { term: term.clone(), was_simplified: false },
    }
}

/// Options that control how [`simplify_with`] repeats simplification passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// The maximum number of passes to run before giving up on reaching a term that no longer
    /// changes. The last term produced is returned either way.
    ///
    /// The default is `16`.
    pub max_passes: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self { max_passes: 16 }
    }
}

impl SimplifyOptions {
    /// Wraps the given [`SimplifyOptions`] into a builder for further customization.
    pub fn into_builder(self) -> SimplifyOptionsBuilder {
        SimplifyOptionsBuilder(self)
    }
}

/// A builder for [`SimplifyOptions`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplifyOptionsBuilder(SimplifyOptions);

impl SimplifyOptionsBuilder {
    /// Sets the maximum number of passes.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.0.max_passes = max_passes;
        self
    }

    /// Builds the [`SimplifyOptions`].
    pub fn build(self) -> SimplifyOptions {
        self.0
    }
}

/// Repeats simplification passes until the term stops changing.
fn simplify_to_fixed_point(
    term: &Term,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Term {
    let mut term = term.clone();
    for pass in 1..=options.max_passes {
        match inner_simplify(&term, step_collector) {
            Some(next) => {
                debug!("pass {}: `{}`", pass, next);
                term = next;
            },
            None => return term,
        }
    }

    warn!("simplification did not settle after {} passes, stopping at `{}`", options.max_passes, term);
    term
}

/// Simplifies the term as much as possible, using the default [`SimplifyOptions`].
pub fn simplify(term: &Term) -> Term {
    simplify_with(term, SimplifyOptions::default())
}

/// Simplifies the term as much as possible.
pub fn simplify_with(term: &Term, options: SimplifyOptions) -> Term {
    simplify_to_fixed_point(term, options, &mut ())
}

/// Simplifies the term as much as possible, returning the simplified term along with every step
/// that was applied, in order.
pub fn simplify_with_steps(term: &Term, options: SimplifyOptions) -> (Term, Vec<Step>) {
    let mut steps = Vec::new();
    let term = simplify_to_fixed_point(term, options, &mut steps);
    (term, steps)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Term {
        Term::var("x")
    }

    #[test]
    fn single_pass() {
        let term = Term::product(Term::Constant(1.0), Term::sum(x(), Term::Constant(0.0)));
        let result = simplify_expression(&term);
        assert_eq!(result, SimplificationResult { term: x(), was_simplified: true });

        let again = simplify_expression(&result.term);
        assert_eq!(again, SimplificationResult { term: x(), was_simplified: false });
    }

    #[test]
    fn pass_limit() {
        let term = Term::product(Term::product(x(), x()), x());
        let options = SimplifyOptions::default().into_builder().max_passes(0).build();
        assert_eq!(simplify_with(&term, options), term);
        assert_eq!(simplify(&term), Term::power(x(), 3.0));
    }

    /// `x -> y`, recording a step.
    fn rename_x(term: &Term, step_collector: &mut dyn StepCollector<Step>) -> Option<Term> {
        (term == &x()).then(|| {
            step_collector.push(Step::AddZero);
            Term::var("y")
        })
    }

    /// `y -> x`, without recording a step.
    fn rename_y(term: &Term, _: &mut dyn StepCollector<Step>) -> Option<Term> {
        (term == &Term::var("y")).then(x)
    }

    #[test]
    fn undone_pass_reports_no_steps() {
        let mut steps = Vec::<Step>::new();
        assert_eq!(run_pass(&[("x", rename_x), ("y", rename_y)], &x(), &mut steps), None);
        assert!(steps.is_empty());

        assert_eq!(run_pass(&[("x", rename_x)], &x(), &mut steps), Some(Term::var("y")));
        assert_eq!(steps, vec![Step::AddZero]);
    }

    #[test]
    fn steps_in_order() {
        let term = Term::sum(Term::product(x(), x()), Term::Constant(0.0));
        let (simplified, steps) = simplify_with_steps(&term, SimplifyOptions::default());
        assert_eq!(simplified, Term::power(x(), 2.0));
        assert_eq!(steps, vec![Step::MultiplySelf, Step::AddZero]);
    }
}

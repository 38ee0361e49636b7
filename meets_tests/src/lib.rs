//! Shared helpers for the integration tests: small builders over
//! [InputBundle] so each test reads as the scenario it exercises rather than
//! as bookkeeping.

use meets_core::{
    input::InputBundle,
    procedures::search::check,
    reports::Model,
    structures::{case::Case, clause::Clause, formula::Formula},
};

/// Builds an [InputBundle] from facts and clauses, leaving the label table at
/// its default (unused by the core itself, only by a printer).
pub fn bundle(facts: Vec<Formula>, clauses: Vec<Clause>) -> InputBundle {
    let mut input = InputBundle::new();
    input.facts = facts;
    input.clauses = clauses;
    input
}

/// Runs the default-config search for `case` over `facts`/`clauses` and
/// returns the resulting model.
pub fn run(case: Case, facts: Vec<Formula>, clauses: Vec<Clause>) -> Model {
    check(&bundle(facts, clauses), Some(case))
}

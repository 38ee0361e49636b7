/*!
A library for deciding satisfiability of Horn-fragment formulas in a
propositional interval temporal logic with the modal operators `[A]`
("at every strict-future interval meeting here") and `[P]` ("at every
strict-past interval meeting here").

Given a finite conjunction of universally-quantified Horn clauses and
interval-local facts, and a choice of temporal domain ([case::Case]),
the library decides whether there is an interval structure of some
length `d`, and a starting interval `(x, y)` within it, that satisfies
every clause at every subinterval and every fact at `(x, y)`.

# Orientation

The library is built around a single entry point, [procedures::search::check],
which drives a family of [saturation attempts](procedures::saturate::saturate)
over increasing structure sizes and candidate starting intervals.

Internally, and at a high level, an attempt is viewed in terms of two
triangular containers addressed by [interval](generic::interval_map::IntervalMap):
- `hi`, the to-prove worklist of each interval ([structures::formula::Formula]s
  pending derivation).
- `lo`, the proved set of each interval (the deductive closure, and the model
  on success).

Useful starting points:
- [procedures::search] for the outer search loop.
- [procedures::saturate] for the per-attempt fixpoint.
- [procedures::extend] for the case-specific closure rules.
- [structures] for the formula algebra and input bundle.
- [reports] for the shape of a result.
*/

#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod generic;
pub mod input;
pub mod misc;
pub mod preprocessing;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

/*!
The saturation engine: builds and fixpoint-closes a single `(d, x, y)`
attempt.

`hi` is a worklist of derivations pending at a cell; `lo` is its deductive
closure. `BoxA(p)` applied at `(z, t)` propagates the unary consequence `p` to
every strict-future meeting cell `(t, r)`; `BoxP` propagates to every
strict-past meeting cell `(r, z)`. A clause fires exactly when all of its body
literals are present, and deposits its head back into the worklist, so that
if the head is itself modal its propagation is triggered by the ordinary
drain rule.
*/

use std::collections::HashSet;

use crate::{
    generic::interval_map::IntervalMap,
    misc::log::targets,
    preprocessing::State,
    reports::Model,
    structures::{
        clause,
        formula::{Formula, FALSEHOOD, TRUTH},
    },
};

use super::extend::{extend, ExtendOutcome};

/// The result of draining one cell's worklist for one pass.
enum SweepOutcome {
    Unchanged,
    Changed,
    Contradiction,
}

/// Builds and fixpoint-closes the `hi`/`lo` pair for a single attempt of
/// structure length `d` with starting interval `(x, y)`.
///
/// Returns a satisfied [Model] if the attempt closes without ever deriving
/// `Letter(FALSEHOOD)` in some cell, or [Model::unsat] if it does.
///
/// # Panics (debug only)
/// Panics if `x >= y` or `y >= d`; candidate starting intervals are expected
/// to already be validated by [search](crate::procedures::search::check).
pub fn saturate(d: usize, x: usize, y: usize, state: &State) -> Model {
    debug_assert!(x < y && y < d, "invalid starting interval ({x}, {y}) for d={d}");

    let clause_count = state.input.clauses.len();

    let mut lo: IntervalMap<HashSet<Formula>> = IntervalMap::new_with(d, |_, _| {
        let mut cell = HashSet::new();
        cell.insert(Formula::TRUTH);
        cell
    });

    let mut hi: IntervalMap<Vec<Formula>> = IntervalMap::new_with(d, |_, _| {
        (0..clause_count).map(Formula::clause_ref).collect()
    });

    hi.get_mut(x, y).extend(state.input.facts.iter().copied());

    log::trace!(
        target: targets::SATURATE,
        "attempt d={d} start=({x},{y}) clauses={clause_count}"
    );

    loop {
        let mut changed = false;

        for z in 0..d.saturating_sub(1) {
            for t in (z + 1)..d {
                match sweep_cell(d, z, t, &mut hi, &mut lo, state) {
                    SweepOutcome::Contradiction => {
                        log::trace!(target: targets::SATURATE, "contradiction at ({z},{t})");
                        return Model::unsat();
                    }
                    SweepOutcome::Changed => changed = true,
                    SweepOutcome::Unchanged => {}
                }
            }
        }

        match extend(d, &mut hi, &mut lo, state) {
            ExtendOutcome::Contradiction => {
                log::trace!(target: targets::SATURATE, "contradiction during extend");
                return Model::unsat();
            }
            ExtendOutcome::Changed => changed = true,
            ExtendOutcome::Unchanged => {}
        }

        if !changed {
            break;
        }
    }

    log::trace!(target: targets::SATURATE, "attempt d={d} start=({x},{y}) closed");

    Model {
        lo,
        start: (x, y),
        satisfied: true,
    }
}

/// Drains the worklist of a single cell, applying the per-cell rewrite rules
/// until every entry has either been consumed or is an un-fireable clause
/// reference left for a later pass.
fn sweep_cell(
    d: usize,
    z: usize,
    t: usize,
    hi: &mut IntervalMap<Vec<Formula>>,
    lo: &mut IntervalMap<HashSet<Formula>>,
    state: &State,
) -> SweepOutcome {
    let mut queue = std::mem::take(hi.get_mut(z, t));
    let mut changed = false;

    let mut i = 0;
    while i < queue.len() {
        let f = queue[i];

        match f {
            Formula::Letter(id) if id == TRUTH => {
                queue.swap_remove(i);
            }

            Formula::Letter(id) if id == FALSEHOOD => {
                lo.get_mut(z, t).insert(f);
                return SweepOutcome::Contradiction;
            }

            Formula::Letter(_) => {
                queue.swap_remove(i);
                if lo.get_mut(z, t).insert(f) {
                    changed = true;
                }
            }

            Formula::BoxA(p) => {
                queue.swap_remove(i);
                if lo.get_mut(z, t).insert(f) {
                    changed = true;
                }
                for r in (t + 1)..d {
                    if lo.get_mut(t, r).insert(Formula::letter(p)) {
                        changed = true;
                    }
                    if p == FALSEHOOD {
                        return SweepOutcome::Contradiction;
                    }
                }
            }

            Formula::BoxP(p) => {
                queue.swap_remove(i);
                if lo.get_mut(z, t).insert(f) {
                    changed = true;
                }
                for r in 0..z {
                    if lo.get_mut(r, z).insert(Formula::letter(p)) {
                        changed = true;
                    }
                    if p == FALSEHOOD {
                        return SweepOutcome::Contradiction;
                    }
                }
            }

            Formula::ClauseRef(index) => {
                let (body, head) = clause::split(&state.input.clauses[index]);
                let fireable = {
                    let lozt = lo.get(z, t);
                    body.iter().all(|literal| lozt.contains(literal))
                };

                if fireable {
                    queue.swap_remove(i);
                    lo.get_mut(z, t).insert(f);
                    queue.push(head);
                    changed = true;
                } else {
                    i += 1;
                }
            }
        }
    }

    *hi.get_mut(z, t) = queue;

    if changed {
        SweepOutcome::Changed
    } else {
        SweepOutcome::Unchanged
    }
}

/*!
The extend step: case-specific temporal closure that propagates information
across cells, beyond what the per-cell rewrite rules of
[saturate](crate::procedures::saturate) can see on their own.

`(A)`/`(C)` encode that in an unbounded-to-the-right (or two-sided, or
one-sided) linear order, a "last witnessed" cell must behave like any other
cell, so its literal content copies rightward (or leftward). `(B)`/`(D)` make
that frontier cell modally self-consistent. `(E)` is the converse modal rule:
if a letter is universally true to the future of `z`, any cell ending at `z`
has witnessed a `[A]p`; symmetrically for the past.
*/

use std::collections::HashSet;

use crate::{
    generic::interval_map::IntervalMap,
    misc::log::targets,
    preprocessing::State,
    structures::{case::Case, formula::{Formula, FALSEHOOD}},
};

/// The result of a single call to [extend].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtendOutcome {
    /// No cell changed.
    Unchanged,

    /// At least one cell changed, but no contradiction was found.
    Changed,

    /// A modal self-completion step derived `⊥` inside a boundary cell.
    Contradiction,
}

/// Enforces the case-specific temporal closure on `hi`/`lo`, for a structure
/// of length `d`.
pub fn extend(
    d: usize,
    hi: &mut IntervalMap<Vec<Formula>>,
    lo: &mut IntervalMap<HashSet<Formula>>,
    state: &State,
) -> ExtendOutcome {
    let mut changed = false;

    let (min, max) = match state.case {
        Case::Finite => (0, d),

        Case::Natural => {
            let (min, max) = (0, d - 2);
            changed |= right_boundary_duplication(min, max, hi, lo);
            match right_boundary_self_completion(max, lo) {
                ExtendOutcome::Contradiction => return ExtendOutcome::Contradiction,
                ExtendOutcome::Changed => changed = true,
                ExtendOutcome::Unchanged => {}
            }
            (min, max)
        }

        Case::Discrete => {
            let (min, max) = (0, d - 2);
            changed |= right_boundary_duplication(min, max, hi, lo);
            match right_boundary_self_completion(max, lo) {
                ExtendOutcome::Contradiction => return ExtendOutcome::Contradiction,
                ExtendOutcome::Changed => changed = true,
                ExtendOutcome::Unchanged => {}
            }

            let (min, max) = (1, d - 1);
            changed |= left_boundary_duplication(min, max, hi, lo);
            match left_boundary_self_completion(lo) {
                ExtendOutcome::Contradiction => return ExtendOutcome::Contradiction,
                ExtendOutcome::Changed => changed = true,
                ExtendOutcome::Unchanged => {}
            }
            (min, max)
        }
    };

    changed |= global_modal_introduction(d, min, max, lo, state);

    if changed {
        log::trace!(target: targets::EXTEND, "extend changed for case {:?}", state.case);
        ExtendOutcome::Changed
    } else {
        ExtendOutcome::Unchanged
    }
}

/// (A) For every `z` in `[min, max)`, copies every non-`ClauseRef` formula
/// from `hi[z, max]` into `hi[z, max+1]`, and from `lo[z, max]` into
/// `lo[z, max+1]`.
fn right_boundary_duplication(
    min: usize,
    max: usize,
    hi: &mut IntervalMap<Vec<Formula>>,
    lo: &mut IntervalMap<HashSet<Formula>>,
) -> bool {
    let mut changed = false;
    for z in min..max {
        let to_push: Vec<Formula> = hi
            .get(z, max)
            .iter()
            .copied()
            .filter(|f| !f.is_clause_ref())
            .collect();
        if !to_push.is_empty() {
            hi.get_mut(z, max + 1).extend(to_push);
            changed = true;
        }

        let to_insert: Vec<Formula> = lo
            .get(z, max)
            .iter()
            .copied()
            .filter(|f| !f.is_clause_ref())
            .collect();
        for f in to_insert {
            if lo.get_mut(z, max + 1).insert(f) {
                changed = true;
            }
        }
    }
    changed
}

/// (B) Builds the modal self-completion of `lo[max, max+1]` and merges it in.
fn right_boundary_self_completion(max: usize, lo: &mut IntervalMap<HashSet<Formula>>) -> ExtendOutcome {
    modal_self_completion(lo, max, max + 1, Formula::box_a)
}

/// (C) For every `z` in `(min, max]`, copies every non-`ClauseRef` formula
/// from `hi[1, z]` into `hi[0, z]`, and from `lo[1, z]` into `lo[0, z]`.
fn left_boundary_duplication(
    min: usize,
    max: usize,
    hi: &mut IntervalMap<Vec<Formula>>,
    lo: &mut IntervalMap<HashSet<Formula>>,
) -> bool {
    let mut changed = false;
    for z in (min + 1)..=max {
        let to_push: Vec<Formula> = hi
            .get(1, z)
            .iter()
            .copied()
            .filter(|f| !f.is_clause_ref())
            .collect();
        if !to_push.is_empty() {
            hi.get_mut(0, z).extend(to_push);
            changed = true;
        }

        let to_insert: Vec<Formula> = lo
            .get(1, z)
            .iter()
            .copied()
            .filter(|f| !f.is_clause_ref())
            .collect();
        for f in to_insert {
            if lo.get_mut(0, z).insert(f) {
                changed = true;
            }
        }
    }
    changed
}

/// (D) Builds the modal self-completion of `lo[0, 1]` and merges it in.
fn left_boundary_self_completion(lo: &mut IntervalMap<HashSet<Formula>>) -> ExtendOutcome {
    modal_self_completion(lo, 0, 1, Formula::box_p)
}

/// Shared logic of (B) and (D): for each letter in the target cell, derive
/// the modality named by `from_letter`; for each modality (`BoxA`/`BoxP`) in
/// the cell, derive the inner letter (a falsehood inner letter is a
/// contradiction). The derived formulas are merged back into the same cell.
fn modal_self_completion(
    lo: &mut IntervalMap<HashSet<Formula>>,
    z: usize,
    t: usize,
    from_letter: fn(u32) -> Formula,
) -> ExtendOutcome {
    let cell: Vec<Formula> = lo.get(z, t).iter().copied().collect();
    let mut buffer = Vec::with_capacity(cell.len());

    for f in cell {
        match f {
            Formula::Letter(p) => buffer.push(from_letter(p)),
            Formula::BoxA(p) | Formula::BoxP(p) => {
                if p == FALSEHOOD {
                    return ExtendOutcome::Contradiction;
                }
                buffer.push(Formula::letter(p));
            }
            Formula::ClauseRef(_) => {}
        }
    }

    let mut changed = false;
    let target = lo.get_mut(z, t);
    for f in buffer {
        if target.insert(f) {
            changed = true;
        }
    }

    if changed {
        ExtendOutcome::Changed
    } else {
        ExtendOutcome::Unchanged
    }
}

/// (E) The converse modal rule, scanning the currently-active `[min, max)`.
fn global_modal_introduction(
    d: usize,
    min: usize,
    max: usize,
    lo: &mut IntervalMap<HashSet<Formula>>,
    state: &State,
) -> bool {
    let mut changed = false;

    for witness in &state.box_a_witnesses {
        let p = witness.inner_id().expect("BoxA witnesses carry a letter id");
        let letter = Formula::letter(p);
        for z in min..max {
            let universally_true = ((z + 1)..d).all(|t| lo.get(z, t).contains(&letter));
            if universally_true {
                for r in 0..z {
                    if lo.get_mut(r, z).insert(*witness) {
                        changed = true;
                    }
                }
            }
        }
    }

    for witness in &state.box_p_witnesses {
        let p = witness.inner_id().expect("BoxP witnesses carry a letter id");
        let letter = Formula::letter(p);
        for z in min..max {
            let universally_true = (0..z).all(|r| lo.get(r, z).contains(&letter));
            if universally_true {
                for t in (z + 1)..d {
                    if lo.get_mut(z, t).insert(*witness) {
                        changed = true;
                    }
                }
            }
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{input::InputBundle, procedures::saturate::saturate};

    #[test]
    fn discrete_case_propagates_past_witness_leftward() {
        let mut input = InputBundle::new();
        input.facts.push(Formula::box_p(2));
        let state = State::build(input, Case::Discrete);

        let model = saturate(4, 1, 2, &state);
        assert!(model.satisfied);
        for r in 0..1 {
            assert!(model.lo.get(r, 1).contains(&Formula::letter(2)));
        }
    }

    #[test]
    fn finite_case_skips_boundary_substeps() {
        // FINITE never reads past index d, so this must not panic even at the
        // smallest legal d.
        let input = InputBundle::new();
        let state = State::build(input, Case::Finite);
        let model = saturate(2, 0, 1, &state);
        assert!(model.satisfied);
    }
}

/*!
Builds the derived, read-only [State] a saturation attempt is run against.
*/

use crate::{
    input::InputBundle,
    structures::{case::Case, formula::Formula},
};

/// The derived state shared by every saturation attempt for a given input and
/// case: the case itself, the input bundle, and the `[A]`/`[P]` witness lists
/// [extend](crate::procedures::extend) uses for global modal introduction.
#[derive(Clone, Debug)]
pub struct State {
    /// The temporal domain being searched.
    pub case: Case,

    /// The problem statement.
    pub input: InputBundle,

    /// Every `BoxA` formula mentioned in a fact or clause, deduplicated.
    pub box_a_witnesses: Vec<Formula>,

    /// Every `BoxP` formula mentioned in a fact or clause, deduplicated.
    pub box_p_witnesses: Vec<Formula>,
}

impl State {
    /// Builds a [State] from an input bundle and a case, by unioning the facts
    /// with the flattened formulas of every clause and retaining (and
    /// deduplicating) those of `BoxA`/`BoxP` shape.
    pub fn build(input: InputBundle, case: Case) -> State {
        let mut box_a_witnesses: Vec<Formula> = Vec::new();
        let mut box_p_witnesses: Vec<Formula> = Vec::new();

        let mut note = |f: &Formula| {
            if f.is_box_a() && !box_a_witnesses.contains(f) {
                box_a_witnesses.push(*f);
            } else if f.is_box_p() && !box_p_witnesses.contains(f) {
                box_p_witnesses.push(*f);
            }
        };

        for fact in &input.facts {
            note(fact);
        }
        for clause in &input.clauses {
            for formula in clause {
                note(formula);
            }
        }

        log::trace!(
            target: crate::misc::log::targets::PREPROCESS,
            "collected {} [A]-witnesses and {} [P]-witnesses",
            box_a_witnesses.len(),
            box_p_witnesses.len()
        );

        State {
            case,
            input,
            box_a_witnesses,
            box_p_witnesses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn witnesses_are_collected_from_facts_and_clauses_and_deduplicated() {
        let mut input = InputBundle::new();
        input.facts.push(Formula::box_a(2));
        input.facts.push(Formula::box_a(2));
        input.clauses.push(vec![Formula::box_p(3), Formula::letter(2)]);

        let state = State::build(input, Case::Finite);
        assert_eq!(state.box_a_witnesses, vec![Formula::box_a(2)]);
        assert_eq!(state.box_p_witnesses, vec![Formula::box_p(3)]);
    }

    #[test]
    fn plain_letters_and_clause_refs_are_not_witnesses() {
        let mut input = InputBundle::new();
        input.facts.push(Formula::letter(2));
        input.clauses.push(vec![Formula::letter(2), Formula::letter(3)]);

        let state = State::build(input, Case::Natural);
        assert!(state.box_a_witnesses.is_empty());
        assert!(state.box_p_witnesses.is_empty());
    }
}

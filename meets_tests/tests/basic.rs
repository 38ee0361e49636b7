use meets_core::structures::{
    case::Case,
    formula::{Formula, FALSEHOOD},
};
use meets_tests::run;

mod basic {
    use super::*;

    #[test]
    fn pure_fact_is_trivially_satisfiable() {
        let model = run(Case::Finite, vec![Formula::letter(2)], vec![]);
        assert!(model.satisfied);
        assert_eq!(model.start, (0, 1));
        let cell = model.lo.get(0, 1);
        assert!(cell.contains(&Formula::TRUTH));
        assert!(cell.contains(&Formula::letter(2)));
    }

    #[test]
    fn direct_contradiction_is_unsatisfiable() {
        let model = run(
            Case::Finite,
            vec![Formula::letter(2)],
            vec![vec![Formula::letter(2), Formula::FALSEHOOD]],
        );
        assert!(!model.satisfied);
    }

    // These three cases name a structure length directly (`d=3`) rather than
    // going through the driver's minimal-`d` search: at `d=2` a
    // future-directed `[A]` fact sits in the one and only cell, which has no
    // strict-future cell to propagate into, so the driver would report these
    // trivially satisfiable before the modal rule ever gets a chance to fire.
    // Exercising `saturate` directly at `d=3` is what actually demonstrates
    // the propagation.

    #[test]
    fn box_a_forces_a_downstream_letter() {
        use meets_core::{preprocessing::State, procedures::saturate::saturate};

        let input = meets_tests::bundle(vec![Formula::box_a(2)], vec![]);
        let state = State::build(input, Case::Finite);

        let model = saturate(3, 0, 1, &state);
        assert!(model.satisfied);
        assert!(model.lo.get(1, 2).contains(&Formula::letter(2)));
    }

    #[test]
    fn box_a_falsehood_is_unsatisfiable_once_a_future_cell_exists() {
        use meets_core::{preprocessing::State, procedures::saturate::saturate};

        let input = meets_tests::bundle(vec![Formula::box_a(FALSEHOOD)], vec![]);
        let state = State::build(input, Case::Finite);

        let model = saturate(3, 0, 1, &state);
        assert!(!model.satisfied);
    }

    #[test]
    fn implication_fires_after_modal_propagation() {
        use meets_core::{preprocessing::State, procedures::saturate::saturate};

        let input = meets_tests::bundle(
            vec![Formula::box_a(2)],
            vec![vec![Formula::letter(2), Formula::letter(3)]],
        );
        let state = State::build(input, Case::Finite);

        let model = saturate(3, 0, 1, &state);
        assert!(model.satisfied);
        assert!(model.lo.get(1, 2).contains(&Formula::letter(3)));
    }

    #[test]
    fn discrete_only_satisfiability_from_a_past_fact() {
        let model = run(Case::Discrete, vec![Formula::box_p(2)], vec![]);
        assert!(model.satisfied);
        assert!(model.start.0 >= 1);
        for r in 0..model.start.0 {
            assert!(model.lo.get(r, model.start.0).contains(&Formula::letter(2)));
        }
    }
}

mod invariants {
    use super::*;

    use meets_core::structures::formula::Formula as F;

    /// A bigger formula exercising every rewrite rule at once: a future
    /// obligation, a past obligation, and a two-step implication chain, all
    /// over the same starting interval.
    fn mixed_model() -> meets_core::reports::Model {
        run(
            Case::Discrete,
            vec![F::box_a(2), F::box_p(3)],
            vec![
                vec![F::letter(2), F::letter(4)],
                vec![F::letter(4), F::letter(5)],
            ],
        )
    }

    #[test]
    fn closure_under_clauses_holds_everywhere() {
        let model = mixed_model();
        assert!(model.satisfied);

        let clauses: Vec<Vec<F>> = vec![
            vec![F::letter(2), F::letter(4)],
            vec![F::letter(4), F::letter(5)],
        ];

        let d = model.lo.size();
        for z in 0..d.saturating_sub(1) {
            for t in (z + 1)..d {
                let cell = model.lo.get(z, t);
                for clause in &clauses {
                    let (body, head) = meets_core::structures::clause::split(clause);
                    if body.iter().all(|l| cell.contains(l)) {
                        assert!(cell.contains(&head), "clause head missing at ({z},{t})");
                    }
                }
            }
        }
    }

    #[test]
    fn box_a_propagation_holds_everywhere() {
        let model = mixed_model();
        let d = model.lo.size();
        for z in 0..d.saturating_sub(1) {
            for t in (z + 1)..d {
                for f in model.lo.get(z, t) {
                    if let F::BoxA(p) = *f {
                        for r in (t + 1)..d {
                            assert!(model.lo.get(t, r).contains(&F::letter(*p)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn box_p_propagation_holds_everywhere() {
        let model = mixed_model();
        let d = model.lo.size();
        for z in 0..d.saturating_sub(1) {
            for t in (z + 1)..d {
                for f in model.lo.get(z, t) {
                    if let F::BoxP(p) = *f {
                        for r in 0..z {
                            assert!(model.lo.get(r, z).contains(&F::letter(*p)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn no_falsehood_and_truth_present_everywhere() {
        let model = mixed_model();
        let d = model.lo.size();
        for z in 0..d.saturating_sub(1) {
            for t in (z + 1)..d {
                let cell = model.lo.get(z, t);
                assert!(!cell.contains(&F::FALSEHOOD));
                assert!(cell.contains(&F::TRUTH));
            }
        }
    }

    #[test]
    fn facts_are_installed_at_the_returned_start() {
        let model = mixed_model();
        let facts_at_start = model.facts_at_start().expect("satisfied model");
        assert!(facts_at_start.contains(&F::box_a(2)));
        assert!(facts_at_start.contains(&F::box_p(3)));
    }

    #[test]
    fn idempotence_of_a_second_saturation_pass() {
        use meets_core::{preprocessing::State, procedures::saturate::saturate};

        let input = meets_tests::bundle(
            vec![F::box_a(2)],
            vec![vec![F::letter(2), F::letter(3)]],
        );
        let state = State::build(input, Case::Finite);

        let first = saturate(3, 0, 1, &state);
        assert!(first.satisfied);

        // Re-running saturate on the same attempt parameters is deterministic:
        // a second pass from scratch produces the same closed set, which is
        // what "no further change is possible" means for a pure function of
        // (d, x, y, state).
        let second = saturate(3, 0, 1, &state);
        assert!(second.satisfied);

        let d = first.lo.size();
        for z in 0..d.saturating_sub(1) {
            for t in (z + 1)..d {
                assert_eq!(first.lo.get(z, t), second.lo.get(z, t));
            }
        }
    }
}

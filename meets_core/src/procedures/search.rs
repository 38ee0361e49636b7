/*!
The outer search loop: walks the structure length `d` upward from a
case-dependent minimum, and at each `d` enumerates candidate starting
intervals `(x, y)` in lexicographic order, returning the first satisfying
model.
*/

use crate::{
    config::Config,
    input::InputBundle,
    misc::log::targets,
    preprocessing::State,
    procedures::saturate::saturate,
    reports::Model,
    structures::case::Case,
};

/// Decides satisfiability of `input` in the temporal domain named by `case`,
/// using the default [Config] (in particular, `max_d_multiplier = 6`).
///
/// Returns the first satisfying [Model] found by the sweep over `(d, x, y)`
/// in increasing `d` and, for a given `d`, lexicographic `(x, y)`; or the
/// unsat sentinel if the sweep is exhausted without success.
///
/// `case: None` models an unrecognised case selector at the external
/// boundary: this is the one soft error in the core, and it is signalled by
/// returning the unsat model directly rather than an `Err`.
pub fn check(input: &InputBundle, case: Option<Case>) -> Model {
    check_with_config(input, case, &Config::default())
}

/// As [check], but with an explicit [Config] rather than the default.
pub fn check_with_config(input: &InputBundle, case: Option<Case>, config: &Config) -> Model {
    let Some(case) = case else {
        log::debug!(target: targets::SEARCH, "unrecognised case selector");
        return Model::unsat();
    };

    let min_d = case.min_d();
    let max_d = min_d + config.max_d_multiplier * input.clauses.len();
    let x_min = case.x_min();

    let state = State::build(input.clone(), case);

    for d in min_d..=max_d {
        let y_max = case.y_max(d);

        log::debug!(target: targets::SEARCH, "case {case} checking d={d}");

        for x in x_min..(y_max - 1) {
            for y in (x + 1)..y_max {
                let model = saturate(d, x, y, &state);
                if model.satisfied {
                    log::debug!(
                        target: targets::SEARCH,
                        "case {case} satisfiable at d={d} start=({x},{y})"
                    );
                    return model;
                }
            }
        }
    }

    log::debug!(target: targets::SEARCH, "case {case} unsatisfiable up to d={max_d}");
    Model::unsat()
}

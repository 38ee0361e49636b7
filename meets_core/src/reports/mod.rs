/*!
The shape of a result: [Model] (the full output of a saturation attempt) and
[Report] (a coarse satisfiable/unsatisfiable summary).
*/

use std::collections::HashSet;

use crate::{generic::interval_map::IntervalMap, structures::formula::Formula};

/// The output of a saturation attempt (or of the search driver).
///
/// `satisfied = false` is always paired with an empty `lo` and a `start` of
/// `(0, 0)` --- see [Model::unsat].
pub struct Model {
    /// The proved set of every cell, closed under the per-cell and global
    /// closure rules, on success. Empty on failure.
    pub lo: IntervalMap<HashSet<Formula>>,

    /// The starting interval the model was built around.
    pub start: (usize, usize),

    /// Whether a satisfying structure was found.
    pub satisfied: bool,
}

impl Model {
    /// The sentinel unsatisfiable model.
    pub fn unsat() -> Model {
        Model {
            lo: IntervalMap::new(0),
            start: (0, 0),
            satisfied: false,
        }
    }

    /// The proved set at the starting interval, if satisfied.
    pub fn facts_at_start(&self) -> Option<&HashSet<Formula>> {
        if self.satisfied {
            Some(self.lo.get(self.start.0, self.start.1))
        } else {
            None
        }
    }
}

/// A coarse summary of a [Model].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// A satisfying structure was found.
    Satisfiable,

    /// No satisfying structure was found within the search bound.
    Unsatisfiable,
}

impl From<&Model> for Report {
    fn from(model: &Model) -> Self {
        if model.satisfied {
            Report::Satisfiable
        } else {
            Report::Unsatisfiable
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Satisfiable => write!(f, "Satisfiable"),
            Report::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsat_sentinel_has_no_facts_at_start() {
        let model = Model::unsat();
        assert!(!model.satisfied);
        assert!(model.facts_at_start().is_none());
    }

    #[test]
    fn report_mirrors_satisfied_flag() {
        let model = Model::unsat();
        assert_eq!(Report::from(&model), Report::Unsatisfiable);
    }
}

/*!
The input bundle: the read-only problem statement a search is performed
over.
*/

use crate::structures::{clause::Clause, formula::Formula};

/// The problem statement passed to [check](crate::procedures::search::check):
/// an ordered list of clauses, a list of facts, and a label table used only
/// for diagnostics.
///
/// Treated as read-only by the core once built; clauses are identified by
/// their index into `clauses`, so the order of `clauses` is significant.
#[derive(Clone, Debug, Default)]
pub struct InputBundle {
    /// The universally-quantified Horn clauses of the formula.
    pub clauses: Vec<Clause>,

    /// Interval-local facts, seeded into the starting interval of each attempt.
    pub facts: Vec<Formula>,

    /// Display names for letter ids, indexed by id. `labels[0] == "F"` and
    /// `labels[1] == "T"` are reserved.
    pub labels: Vec<String>,
}

impl InputBundle {
    /// An input bundle with the two reserved labels and nothing else.
    pub fn new() -> Self {
        InputBundle {
            clauses: Vec::new(),
            facts: Vec::new(),
            labels: vec!["F".to_string(), "T".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bundle_reserves_falsehood_and_truth_labels() {
        let input = InputBundle::new();
        assert_eq!(input.labels[0], "F");
        assert_eq!(input.labels[1], "T");
        assert!(input.clauses.is_empty());
        assert!(input.facts.is_empty());
    }
}

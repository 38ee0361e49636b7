/*!
Configuration of a search.

All tunable parameters of [check](crate::procedures::search::check) are
collected here, following the same shape as the rest of the library's
configuration: a plain struct of named fields with a `Default` impl, rather
than a builder.
*/

use crate::structures::case::Case;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The case to search in, when a caller has not been given one explicitly
    /// (e.g. a CLI default). [check](crate::procedures::search::check) always
    /// takes its own explicit case argument regardless of this value.
    pub case: Case,

    /// The multiplier on the number of clauses used to bound the outer search:
    /// `max_d = min_d + max_d_multiplier * clauses.len()`.
    ///
    /// This is a stated small-model bound for the decision procedure (see
    /// the search driver's documentation); an implementation lacking its own
    /// proof should keep the default rather than guess a different constant.
    pub max_d_multiplier: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            case: Case::Discrete,
            max_d_multiplier: 6,
        }
    }
}

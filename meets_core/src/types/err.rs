/*!
Error kinds visible at the core boundary.

There are no partial results and (with one exception, noted below) no
propagated `Err`s: a [Model](crate::reports::Model) either carries a
complete `lo` closed under all rules, or is the unsat sentinel. These kinds
exist for callers who want to distinguish *why* an unsat [Model](crate::reports::Model)
was returned.
*/

/// A union of the error kinds a caller of the core may want to distinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The case selector did not name one of `FINITE`/`NATURAL`/`DISCRETE`.
    ///
    /// This is the only "soft error" described: [check](crate::procedures::search::check)
    /// does not return a `Result`, it returns an unsat [Model](crate::reports::Model)
    /// directly, exactly as it would for genuine unsatisfiability. This kind
    /// is provided only so a caller who cares can reconstruct the distinction
    /// from the `Option<Case>` it passed in.
    UnknownCase,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::UnknownCase => write!(f, "unrecognised case selector"),
        }
    }
}

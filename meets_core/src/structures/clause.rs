/*!
Clauses: ordered, non-empty sequences of [Formula] read as an implication.
*/

use crate::structures::formula::Formula;

/// An ordered non-empty sequence of formulas `l_1, ..., l_{k-1}, head`, read
/// as `l_1 & ... & l_{k-1} -> head`.
///
/// A unit clause (length 1) is a standalone fact; the parser collaborator is
/// expected to lift these into [InputBundle](crate::input::InputBundle)'s
/// `facts` rather than leaving them as clauses, but nothing in the core
/// depends on that being done.
pub type Clause = Vec<Formula>;

/// Splits a clause into its premises (the body) and its head.
///
/// # Panics
/// Panics if `clause` is empty; clauses are non-empty by construction.
pub fn split(clause: &Clause) -> (&[Formula], Formula) {
    let (head, body) = clause
        .split_last()
        .expect("a clause is an ordered non-empty sequence of formulas");
    (body, *head)
}

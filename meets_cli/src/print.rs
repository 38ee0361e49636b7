/*!
Pretty-printing of formulas, clauses, and a closed model, for the terminal.
*/

use std::fmt::Write as _;

use meets_core::{
    input::InputBundle,
    reports::Model,
    structures::{clause::Clause, formula::Formula},
};

/// Renders a single formula using `input`'s label table, resolving a
/// `ClauseRef` back into its defining clause rather than printing a bare
/// index.
pub fn format_formula(input: &InputBundle, f: Formula) -> String {
    match f {
        Formula::Letter(id) => input.labels[id as usize].clone(),
        Formula::BoxA(id) => format!("[A]{}", input.labels[id as usize]),
        Formula::BoxP(id) => format!("[P]{}", input.labels[id as usize]),
        Formula::ClauseRef(index) => format_clause(input, &input.clauses[index]),
    }
}

/// Renders a clause as `body1 & body2 & ... -> head`.
pub fn format_clause(input: &InputBundle, clause: &Clause) -> String {
    let (body, head) = meets_core::structures::clause::split(clause);
    let mut out = body
        .iter()
        .map(|f| format_formula(input, *f))
        .collect::<Vec<_>>()
        .join(" & ");
    let _ = write!(out, " -> {}", format_formula(input, head));
    out
}

/// Lists every rule and fact in `input`, in the style of the original
/// problem-statement dump.
pub fn print_input(input: &InputBundle) {
    println!("---- Rules ----");
    for clause in &input.clauses {
        println!("[U] {}", format_clause(input, clause));
    }
    println!("---- Facts ----");
    for fact in &input.facts {
        println!("{}", format_formula(input, *fact));
    }
    println!("---------------");
}

/// Dumps every non-empty cell of a satisfied [Model], in increasing
/// `(z, t)` order.
pub fn print_model(input: &InputBundle, model: &Model) {
    if !model.satisfied {
        println!("(no model)");
        return;
    }

    let d = model.lo.size();
    println!("start = ({}, {})", model.start.0, model.start.1);

    for z in 0..d.saturating_sub(1) {
        for t in (z + 1)..d {
            let cell = model.lo.get(z, t);
            if cell.is_empty() {
                continue;
            }
            println!("[{z}, {t}]:");
            for f in cell {
                println!("\t{}", format_formula(input, *f));
            }
        }
    }
}

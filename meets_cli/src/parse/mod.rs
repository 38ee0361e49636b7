/*!
The line-oriented parser: reads a `.horn` source file into a
[`meets_core::input::InputBundle`], and is responsible for the one class of
error the core never sees (syntactic errors in the source text).
*/

pub mod cli;
mod tokenizer;

use std::path::Path;

use meets_core::{input::InputBundle, structures::formula::Formula};

use tokenizer::{next_token, Token};

/// A syntax error in a `.horn` source file, reported to the user and never
/// passed down into the core.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A modal operator or `[U]` marker with no following atom.
    MissingFormula { line: usize },

    /// A token that is neither a recognised modal operator nor alphanumeric.
    InvalidFormula { line: usize, token: String },
}

enum LineItem {
    Fact(Formula),
    Rule(Vec<Formula>),
}

/// Parses the whole of `source` into an [InputBundle].
///
/// Blank lines (and lines that are otherwise all whitespace) are skipped.
/// A `[U]` prefix marks a rule; everything else on the line is read as a
/// single fact formula. A rule whose body collapses to a single formula (no
/// `&`-joined literals before the final `->` target) is lifted into a fact,
/// per the "length-1 clause" convention of the external grammar.
pub fn parse_source(source: &str) -> Result<InputBundle, ParseError> {
    let mut input = InputBundle::new();

    for (line_no, line) in source.lines().enumerate() {
        let Some(item) = parse_line(line, &mut input.labels, line_no + 1)? else {
            continue;
        };

        match item {
            LineItem::Fact(formula) => input.facts.push(formula),
            LineItem::Rule(clause) if clause.len() == 1 => {
                input.facts.push(clause.into_iter().next().unwrap())
            }
            LineItem::Rule(clause) => input.clauses.push(clause),
        }
    }

    Ok(input)
}

/// As [parse_source], but reads `path` first.
pub fn parse_file(path: &Path) -> std::io::Result<Result<InputBundle, ParseError>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_source(&text))
}

fn parse_line(
    line: &str,
    labels: &mut Vec<String>,
    line_no: usize,
) -> Result<Option<LineItem>, ParseError> {
    let Some(first) = next_token(line, 0) else {
        return Ok(None);
    };

    if first.text(line) != "[U]" {
        let (formula, _) = parse_formula(line, first, labels, line_no)?;
        return Ok(Some(LineItem::Fact(formula)));
    }

    let mut clause = Vec::new();
    let mut cursor = first.end;
    loop {
        let tok = next_token(line, cursor).ok_or(ParseError::MissingFormula { line: line_no })?;
        let (formula, end) = parse_formula(line, tok, labels, line_no)?;
        clause.push(formula);
        cursor = end;

        match next_token(line, cursor) {
            Some(separator) => cursor = separator.end,
            None => break,
        }
    }

    Ok(Some(LineItem::Rule(clause)))
}

/// Reads a single formula starting at `tok`: a bare atom is a letter, while
/// `[A]`/`[P]` consume one further token for the atom they scope.
fn parse_formula(
    line: &str,
    tok: Token,
    labels: &mut Vec<String>,
    line_no: usize,
) -> Result<(Formula, usize), ParseError> {
    #[derive(Clone, Copy)]
    enum Kind {
        Letter,
        BoxA,
        BoxP,
    }

    let kind = match tok.text(line) {
        "[A]" => Kind::BoxA,
        "[P]" => Kind::BoxP,
        _ => Kind::Letter,
    };

    let atom = match kind {
        Kind::Letter => tok,
        Kind::BoxA | Kind::BoxP => {
            next_token(line, tok.end).ok_or(ParseError::MissingFormula { line: line_no })?
        }
    };

    let atom_text = atom.text(line);
    if atom_text.is_empty() || !atom_text.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ParseError::InvalidFormula {
            line: line_no,
            token: atom_text.to_string(),
        });
    }

    let id = label_id(labels, atom_text);
    let formula = match kind {
        Kind::Letter => Formula::letter(id),
        Kind::BoxA => Formula::box_a(id),
        Kind::BoxP => Formula::box_p(id),
    };

    Ok((formula, atom.end))
}

/// Looks up `text` in the label table, interning a fresh id if it is new.
fn label_id(labels: &mut Vec<String>, text: &str) -> u32 {
    if let Some(pos) = labels.iter().position(|label| label == text) {
        pos as u32
    } else {
        labels.push(text.to_string());
        (labels.len() - 1) as u32
    }
}

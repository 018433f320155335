//! Symbol resolution: turns a clean source line stream into one that is
//! free of labels and symbolic references.

use crate::error::{AsmError, Result};
use crate::symbols::{SymbolTable, VARIABLE_BASE};

/// Resolve all symbols in `lines`, returning a stream of numeric-only
/// A-instructions and untouched C-instructions. Label declarations are
/// removed; every other line survives in order.
pub fn resolve<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    let mut table = SymbolTable::new();
    let instructions = strip_labels(lines, &mut table);
    collect_variables(&instructions, &mut table);
    substitute(&instructions, &table)
}

/// Extract `(NAME)` declarations in one forward pass. A label's address is
/// the count of real instructions seen so far, i.e. the index the next
/// surviving instruction will occupy once all declarations are gone. This
/// keeps consecutive labels (and labels at end of program) pointing at the
/// same target.
fn strip_labels<'a, S: AsRef<str>>(lines: &'a [S], table: &mut SymbolTable) -> Vec<&'a str> {
    let mut instructions = Vec::with_capacity(lines.len());

    for line in lines.iter().map(AsRef::as_ref) {
        match label_name(line) {
            Some(name) => table.define_label(name, instructions.len() as u16),
            None => instructions.push(line),
        }
    }

    instructions
}

/// `(NAME)` with a nonempty, whitespace-free name. Anything else is not a
/// declaration and stays in the instruction stream.
fn label_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix('(')?.strip_suffix(')')?;
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some(name)
}

/// Allocate RAM addresses for user variables: every `@name` whose name is
/// not a literal and not yet known gets the next address, in first-seen
/// document order starting at 16.
fn collect_variables<S: AsRef<str>>(instructions: &[S], table: &mut SymbolTable) {
    let mut next_address = VARIABLE_BASE;

    for line in instructions.iter().map(AsRef::as_ref) {
        for word in line.split_whitespace() {
            let Some(name) = word.strip_prefix('@') else {
                continue;
            };
            if name.is_empty() || is_numeric_literal(name) || table.contains(name) {
                continue;
            }
            table.define_variable(name, next_address);
            next_address += 1;
        }
    }
}

/// Replace each symbolic `@name` word with `@<address>`. Literals and
/// `@`-free lines pass through untouched.
fn substitute<S: AsRef<str>>(instructions: &[S], table: &SymbolTable) -> Result<Vec<String>> {
    let mut resolved = Vec::with_capacity(instructions.len());

    for line in instructions.iter().map(AsRef::as_ref) {
        if !line.contains('@') {
            resolved.push(line.to_string());
            continue;
        }

        let words = line
            .split_whitespace()
            .map(|word| substitute_word(word, table))
            .collect::<Result<Vec<String>>>()?;
        resolved.push(words.join(" "));
    }

    Ok(resolved)
}

fn substitute_word(word: &str, table: &SymbolTable) -> Result<String> {
    match word.strip_prefix('@') {
        Some(name) if !is_numeric_literal(name) => match table.get(name) {
            Some(address) => Ok(format!("@{address}")),
            None => Err(AsmError::UnresolvedSymbol {
                symbol: name.to_string(),
            }),
        },
        _ => Ok(word.to_string()),
    }
}

/// Strict decimal round-trip: the name is a literal only if formatting its
/// value reproduces it exactly. Leading zeros, signs, and non-digit forms
/// are symbols.
fn is_numeric_literal(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_digit())
        && !(name.len() > 1 && name.starts_with('0'))
}

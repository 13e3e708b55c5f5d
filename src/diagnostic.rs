use thiserror::Error;

use crate::syntax::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("Illegal character {character:?} on line {line}")]
    IllegalCharacter { character: char, line: usize },
    #[error("Integer value too large: {literal} on line {line}")]
    IntegerTooLarge { literal: String, line: usize },
    #[error("Syntax Error:{}", describe(.found))]
    SyntaxError { found: Option<Token> },
}

/// The value is left out when the input ended early.
fn describe(found: &Option<Token>) -> String {
    match found {
        Some(token) => format!(" {token}"),
        None => String::new(),
    }
}

/// Receives diagnostics at the moment they are raised.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Everything reported during a translation that produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_lines(.0))]
pub struct Diagnostics(pub Vec<Diagnostic>);

fn join_lines(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

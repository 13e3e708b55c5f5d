pub mod lexer;
pub mod token;

pub use lexer::{Lexer, Spanned};
pub use token::{Token, TokenKind, TokenValue};

use crate::diagnostic::Diagnostic;

/// Runs the lexer to the end of `source`, collecting tokens and diagnostics.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token(&mut diagnostics) {
        tokens.push(token);
    }
    (tokens, diagnostics)
}

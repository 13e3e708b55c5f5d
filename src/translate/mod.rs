use std::sync::OnceLock;

use lalrpop_util::{lalrpop_mod, ParseError};
use log::debug;

use crate::{
    diagnostic::{Diagnostic, Diagnostics, Reporter},
    syntax::{Lexer, Token},
};

pub mod template;

lalrpop_mod!(grammar, "/translate/grammar.rs");

/// Syntax-directed translator from the toy language to C++ text.
///
/// The generated parser tables are static; every call owns its own lexer and
/// parse stacks, so one translator can serve any number of threads.
pub struct Translator {
    parser: grammar::ProgramParser,
}

static SHARED: OnceLock<Translator> = OnceLock::new();

impl Translator {
    pub fn new() -> Self {
        Self {
            parser: grammar::ProgramParser::new(),
        }
    }

    /// The process-wide translator.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::new)
    }

    /// Translates `source`, handing each diagnostic to `reporter` as it is raised.
    /// Returns `None` after a syntax error.
    pub fn translate_with<R: Reporter + ?Sized>(
        &self,
        source: &str,
        reporter: &mut R,
    ) -> Option<String> {
        debug!("translating {} bytes", source.len());
        let result = self.parser.parse(Lexer::new(source).spanned(reporter));
        match result {
            Ok(program) => {
                debug!("translation succeeded");
                Some(program)
            }
            Err(error) => {
                debug!("translation failed");
                reporter.report(Diagnostic::SyntaxError {
                    found: offending_token(error),
                });
                None
            }
        }
    }

    pub fn translate(&self, source: &str) -> Result<String, Diagnostics> {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        self.translate_with(source, &mut diagnostics)
            .ok_or(Diagnostics(diagnostics))
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// The token a syntax error names; `None` when the input ended early.
fn offending_token(error: ParseError<usize, Token, std::convert::Infallible>) -> Option<Token> {
    match error {
        ParseError::UnrecognizedToken {
            token: (_, token, _),
            ..
        }
        | ParseError::ExtraToken {
            token: (_, token, _),
        } => Some(token),
        ParseError::UnrecognizedEof { .. } => None,
        ParseError::InvalidToken { .. } => {
            unreachable!("tokens come from `Lexer`, never from a generated lexer")
        }
        ParseError::User { error } => match error {},
    }
}

pub fn translate(source: &str) -> Result<String, Diagnostics> {
    Translator::shared().translate(source)
}

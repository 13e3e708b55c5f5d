use std::convert::Infallible;

use log::trace;
use winnow::{error::ContextError, stream::Stream, token::any, Located, Parser};

use crate::diagnostic::{Diagnostic, Reporter};

use super::token::{parse_scan, Lexeme, Scan, Token, TokenKind, TokenValue};

/// Cursor over one source text.
///
/// Tokens are produced on demand. Blanks, newlines and illegal characters never
/// reach the caller; illegal characters are reported and skipped one at a time.
pub struct Lexer<'s> {
    input: Located<&'s str>,
    line: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            input: Located::new(source),
            line: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Adapts the lexer into the `(start, token, end)` stream the parser pulls from.
    pub fn spanned<'r, R: Reporter + ?Sized>(self, reporter: &'r mut R) -> Spanned<'s, 'r, R> {
        Spanned {
            lexer: self,
            reporter,
        }
    }

    pub fn next_token<R: Reporter + ?Sized>(&mut self, reporter: &mut R) -> Option<Token> {
        loop {
            if self.input.eof_offset() == 0 {
                return None;
            }
            let checkpoint = self.input.checkpoint();
            match parse_scan.parse_next(&mut self.input) {
                Ok(Scan::Blank) => {}
                Ok(Scan::Newlines(count)) => self.line += count,
                Ok(Scan::Lexeme(lexeme)) => return Some(self.finish(lexeme, reporter)),
                Err(_) => {
                    self.input.reset(&checkpoint);
                    let character = any::<_, ContextError>.parse_next(&mut self.input).ok()?;
                    reporter.report(Diagnostic::IllegalCharacter {
                        character,
                        line: self.line,
                    });
                }
            }
        }
    }

    fn finish<R: Reporter + ?Sized>(&self, lexeme: Lexeme<'s>, reporter: &mut R) -> Token {
        let value = match lexeme.kind {
            TokenKind::Number => match lexeme.content.parse::<i64>() {
                Ok(value) => TokenValue::Integer(value),
                Err(_) => {
                    reporter.report(Diagnostic::IntegerTooLarge {
                        literal: lexeme.content.to_owned(),
                        line: self.line,
                    });
                    TokenValue::Integer(0)
                }
            },
            _ => TokenValue::Spelling,
        };
        trace!("line {}: {} {:?}", self.line, lexeme.kind, lexeme.content);
        Token {
            kind: lexeme.kind,
            content: lexeme.content.to_owned(),
            value,
            line: self.line,
            span: lexeme.span,
        }
    }
}

pub struct Spanned<'s, 'r, R: ?Sized> {
    lexer: Lexer<'s>,
    reporter: &'r mut R,
}

impl<R: Reporter + ?Sized> Iterator for Spanned<'_, '_, R> {
    type Item = Result<(usize, Token, usize), Infallible>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next_token(self.reporter)?;
        let (start, end) = (token.span.start, token.span.end);
        Some(Ok((start, token, end)))
    }
}

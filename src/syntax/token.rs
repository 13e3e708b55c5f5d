use std::{fmt, ops::Range};

use winnow::{
    ascii::{digit1, space1},
    combinator::alt,
    token::{literal, one_of, take_while},
    Located, PResult, Parser,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    pub value: TokenValue,
    pub line: usize,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Number,
    Identifier,
    PunctEqualsSign,
    PunctSemicolon,
    PunctPlusSign,
    PunctHyphenMinus,
    KeywordBegin,
    KeywordEnd,
    KeywordPrint,
    KeywordRepeat,
}

/// The value a token contributes to diagnostics.
///
/// Only numbers carry more than their spelling. A digit run that does not fit
/// in an `i64` is recorded as `Integer(0)`; its spelling is kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue {
    Spelling,
    Integer(i64),
}

pub const KEYWORDS: [(&str, TokenKind); 4] = [
    ("begin", TokenKind::KeywordBegin),
    ("end", TokenKind::KeywordEnd),
    ("print", TokenKind::KeywordPrint),
    ("repeat", TokenKind::KeywordRepeat),
];

pub fn keyword(spelling: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == spelling)
        .map(|(_, kind)| *kind)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::PunctEqualsSign => "EQUAL",
            TokenKind::PunctSemicolon => "SEMICOLON",
            TokenKind::PunctPlusSign => "PLUS",
            TokenKind::PunctHyphenMinus => "MINUS",
            TokenKind::KeywordBegin => "BEGIN",
            TokenKind::KeywordEnd => "END",
            TokenKind::KeywordPrint => "PRINT",
            TokenKind::KeywordRepeat => "REPEAT",
        })
    }
}

/// Renders the token the way syntax errors name it: numbers by value, everything
/// else by its quoted spelling.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TokenValue::Integer(value) => write!(f, "{value}"),
            TokenValue::Spelling => write!(f, "'{}'", self.content),
        }
    }
}

/// A recognized token before the lexer attaches its line and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'s> {
    pub kind: TokenKind,
    pub content: &'s str,
    pub span: Range<usize>,
}

/// One step of the scanner: either a lexeme or input that produces no token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan<'s> {
    Blank,
    Newlines(usize),
    Lexeme(Lexeme<'s>),
}

fn lexeme<'s>(kind: TokenKind) -> impl Fn((&'s str, Range<usize>)) -> Lexeme<'s> {
    move |(content, span)| Lexeme {
        kind,
        content,
        span,
    }
}

pub fn parse_scan<'s>(s: &mut Located<&'s str>) -> PResult<Scan<'s>> {
    alt((
        parse_white.value(Scan::Blank),
        parse_newlines.map(|newlines: &str| Scan::Newlines(newlines.len())),
        parse_token.map(Scan::Lexeme),
    ))
    .parse_next(s)
}

pub fn parse_token<'s>(s: &mut Located<&'s str>) -> PResult<Lexeme<'s>> {
    alt((parse_number, parse_word, parse_punct)).parse_next(s)
}

pub fn parse_punct<'s>(s: &mut Located<&'s str>) -> PResult<Lexeme<'s>> {
    alt([
        literal("=")
            .with_span()
            .map(lexeme(TokenKind::PunctEqualsSign)),
        literal(";")
            .with_span()
            .map(lexeme(TokenKind::PunctSemicolon)),
        literal("+")
            .with_span()
            .map(lexeme(TokenKind::PunctPlusSign)),
        literal("-")
            .with_span()
            .map(lexeme(TokenKind::PunctHyphenMinus)),
    ])
    .parse_next(s)
}

pub fn parse_number<'s>(s: &mut Located<&'s str>) -> PResult<Lexeme<'s>> {
    digit1
        .with_span()
        .map(lexeme(TokenKind::Number))
        .parse_next(s)
}

/// Identifiers and reserved words share one pattern; the keyword table decides
/// which kind the spelling gets.
pub fn parse_word<'s>(s: &mut Located<&'s str>) -> PResult<Lexeme<'s>> {
    (
        one_of(|c| matches!(c, '_' | 'A'..='Z' | 'a'..='z')),
        take_while(0.., |c| matches!(c, '_' | '0'..='9' | 'A'..='Z' | 'a'..='z')),
    )
        .recognize()
        .with_span()
        .map(|(content, span): (&'s str, Range<usize>)| Lexeme {
            kind: keyword(content).unwrap_or(TokenKind::Identifier),
            content,
            span,
        })
        .parse_next(s)
}

pub fn parse_white<'s>(s: &mut Located<&'s str>) -> PResult<&'s str> {
    space1.parse_next(s)
}

pub fn parse_newlines<'s>(s: &mut Located<&'s str>) -> PResult<&'s str> {
    take_while(1.., '\n').parse_next(s)
}

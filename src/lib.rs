pub mod diagnostic;
pub mod syntax;
pub mod translate;

pub use diagnostic::{Diagnostic, Diagnostics, Reporter};
pub use syntax::{tokenize, Lexer, Token, TokenKind, TokenValue};
pub use translate::{translate, Translator};

/// Program translated by `--demo`.
pub const SAMPLE_PROGRAM: &str = "begin
    x = 10;
    y = 20;
    repeat 100 begin
        a = x + 10;
        b = y + x + 100;
        print a;
    end;
        print x;
end";

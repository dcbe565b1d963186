pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
///
/// Words are produced one character at a time as [`TokenKind::WordChar`]; use
/// [`tokenize_complete`] to get whole words.
pub fn tokenize(input: &str) -> Lexer<'_, TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the non-whitespace tokens produced by the tokenizer,
/// with adjacent word characters merged into single [`TokenKind::Word`] tokens.
///
/// Whitespace separates tokens but is otherwise discarded.
pub fn tokenize_complete(input: &str) -> Box<[Token<'_>]> {
    let mut lexer = tokenize(input);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = result.unwrap_or(TokenKind::Symbol);
        if kind.is_whitespace() {
            continue;
        }

        if kind == TokenKind::WordChar {
            if let Some(last) = tokens.last_mut() {
                if last.kind == TokenKind::Word && last.span.end == span.start {
                    last.span.end = span.end;
                    last.lexeme = &input[last.span.clone()];
                    continue;
                }
            }
        }

        tokens.push(Token {
            kind: if kind == TokenKind::WordChar { TokenKind::Word } else { kind },
            lexeme: &input[span.clone()],
            span,
        });
    }

    tokens.into_boxed_slice()
}

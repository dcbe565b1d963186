use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Reserved operators and function names are matched longest-first, so `==` is never split into
/// two `=`, and `asin` is never read as `a` followed by `sin`. Reserved names are also recognized
/// inside longer words: `sinx` is the `sin` token followed by the word `x`.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("=")]
    Equation,

    #[token("==")]
    Eq,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEq,

    #[token(">")]
    Greater,

    #[token(">=")]
    GreaterEq,

    #[token("|")]
    Or,

    #[token("&")]
    And,

    #[token("!")]
    Not,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("%")]
    Mod,

    #[token("^")]
    Exp,

    #[token("sin")]
    Sin,

    #[token("cos")]
    Cos,

    #[token("tan")]
    Tan,

    #[token("csc")]
    Csc,

    #[token("sec")]
    Sec,

    #[token("cot")]
    Cot,

    #[token("asin")]
    Asin,

    #[token("acos")]
    Acos,

    #[token("atan")]
    Atan,

    #[token("ln")]
    Ln,

    #[token("exp")]
    ExpFn,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A single character of a word (a number, identifier, or boolean). Consecutive word
    /// characters are merged into one [`TokenKind::Word`] by [`super::tokenize_complete`].
    #[regex(r"[a-zA-Z0-9_.]")]
    WordChar,

    /// A run of word characters. This kind is never produced by the lexer directly.
    Word,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}

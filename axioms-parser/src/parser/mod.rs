pub mod ast;
pub mod error;
pub mod fmt;
pub mod literal;
pub mod token;

use ast::node::Node;
use error::{
    AmbiguousPrecedence,
    EmptyExpression,
    EmptyParenthesis,
    Error,
    InvalidCharacter,
    MissingOperand,
    MissingOperator,
    UnclosedParenthesis,
    UnexpectedComma,
};
use literal::coerce;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use token::op::{BinOpKind, OpKind, PRIORITY};

/// An element of the flat list that the parser splits into a tree.
#[derive(Debug, Clone)]
enum Item {
    /// A literal or identifier.
    Leaf(Node, Range<usize>),

    /// An operator.
    Op(OpKind, Range<usize>),

    /// A comma, only meaningful in the argument list of a function call.
    Comma(Range<usize>),

    /// A parenthesized group of items. The span includes both parentheses.
    Group(Vec<Item>, Range<usize>),
}

impl Item {
    /// Returns the span of source code this item covers.
    fn span(&self) -> Range<usize> {
        match self {
            Self::Leaf(_, span) | Self::Op(_, span) | Self::Comma(span) | Self::Group(_, span) => {
                span.clone()
            },
        }
    }

    /// Returns the binary operator this item represents, if any.
    fn binary_op(&self) -> Option<BinOpKind> {
        match self {
            Self::Op(OpKind::Binary(op), _) => Some(*op),
            _ => None,
        }
    }
}

/// A parser that turns a single statement into an expression tree.
///
/// Precedence is decided entirely by [`PRIORITY`]: a list of items is split at the leftmost
/// occurrence of the first operator in the table that appears in the list, and both halves are
/// parsed recursively. As a consequence, chains of the same operator nest to the right, e.g.
/// `a-b-c` is parsed as `a-(b-c)`.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being parsed.
    source: &'source str,

    /// The tokens of the source code, without whitespace.
    tokens: Box<[Token<'source>]>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: tokenize_complete(source),
        }
    }

    /// Parses the full source code into an expression tree.
    pub fn try_parse_full(&self) -> Result<Node, Error> {
        self.check_parentheses()?;
        let items = self.group_items()?;
        if items.is_empty() {
            return Err(Error::spanless(EmptyExpression));
        }

        self.build(items)
    }

    /// Reports the first parenthesis without a partner, if there is one.
    fn check_parentheses(&self) -> Result<(), Error> {
        let mut open = Vec::new();
        for token in self.tokens.iter() {
            match token.kind {
                TokenKind::OpenParen => open.push(token.span.clone()),
                TokenKind::CloseParen => {
                    if open.pop().is_none() {
                        return Err(Error::new(
                            vec![token.span.clone()],
                            UnclosedParenthesis { opening: false },
                        ));
                    }
                },
                _ => (),
            }
        }

        match open.pop() {
            Some(span) => Err(Error::new(vec![span], UnclosedParenthesis { opening: true })),
            None => Ok(()),
        }
    }

    /// Converts the tokens into items, replacing every parenthesized run with a single group.
    ///
    /// Parentheses must already be balanced.
    fn group_items(&self) -> Result<Vec<Item>, Error> {
        let mut outer: Vec<(Vec<Item>, usize)> = Vec::new();
        let mut current = Vec::new();

        for token in self.tokens.iter() {
            let span = token.span.clone();
            match token.kind {
                TokenKind::OpenParen => outer.push((std::mem::take(&mut current), span.start)),
                TokenKind::CloseParen => {
                    if let Some((mut items, start)) = outer.pop() {
                        items.push(Item::Group(std::mem::take(&mut current), start..span.end));
                        current = items;
                    }
                },
                TokenKind::Word => current.push(Item::Leaf(coerce(token.lexeme, span.clone())?, span)),
                TokenKind::Comma => current.push(Item::Comma(span)),
                kind => match OpKind::from_token(kind) {
                    Some(op) => current.push(Item::Op(op, span)),
                    None => return Err(Error::new(
                        vec![span],
                        InvalidCharacter { symbol: token.lexeme.to_string() },
                    )),
                },
            }
        }

        Ok(current)
    }

    /// Rewrites a leading `-` sign. A negative number literal is folded into the literal, unless
    /// the literal is the base of a power (so `-2^2` is `-(2^2)`). Anything else becomes a
    /// multiplication by `-1`.
    fn rewrite_leading_minus(&self, mut items: Vec<Item>, minus: Range<usize>) -> Result<Vec<Item>, Error> {
        let folded = match (items.get(1), items.get(2)) {
            (None, _) => return Err(Error::new(vec![minus], MissingOperand { op: "-".to_string() })),
            (Some(Item::Leaf(Node::Literal(lit), span)), next)
                if next.and_then(Item::binary_op) != Some(BinOpKind::Exp) =>
            {
                lit.negate().map(|neg| Item::Leaf(neg.into(), minus.start..span.end))
            },
            _ => None,
        };

        match folded {
            Some(leaf) => {
                items.drain(0..2);
                items.insert(0, leaf);
            },
            None => {
                items[0] = Item::Leaf(Node::int(-1), minus.clone());
                items.insert(1, Item::Op(OpKind::Binary(BinOpKind::Mul), minus));
            },
        }

        Ok(items)
    }

    /// Returns the arguments of a function call, given the span of its parenthesized group.
    fn call_args(&self, group: Range<usize>) -> Vec<String> {
        let inner = self.source[group.start + 1..group.end - 1]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();

        if inner.is_empty() {
            Vec::new()
        } else {
            inner.split(',').map(String::from).collect()
        }
    }

    /// Builds a tree from a non-empty list of items.
    fn build(&self, mut items: Vec<Item>) -> Result<Node, Error> {
        let leading_minus = match items.first() {
            Some(Item::Op(OpKind::Binary(BinOpKind::Sub), span)) => Some(span.clone()),
            _ => None,
        };
        if let Some(minus) = leading_minus {
            items = self.rewrite_leading_minus(items, minus)?;
        }

        match items.as_slice() {
            [] => return Err(Error::spanless(EmptyExpression)),
            [Item::Leaf(node, _)] => return Ok(node.clone()),
            [Item::Group(inner, span)] => {
                if inner.is_empty() {
                    return Err(Error::new(vec![span.clone()], EmptyParenthesis));
                }
                return self.build(inner.clone());
            },
            [Item::Leaf(Node::Symbol(name), _), Item::Group(_, span)] => {
                return Ok(Node::Call(name.clone(), self.call_args(span.clone())));
            },
            _ => (),
        }

        let split = PRIORITY.iter()
            .filter_map(|op| match op {
                OpKind::Binary(op) => Some(*op),
                OpKind::Unary(_) => None,
            })
            .find_map(|op| {
                items.iter()
                    .position(|item| item.binary_op() == Some(op))
                    .map(|idx| (op, idx))
            });

        if let Some((op, idx)) = split {
            let op_span = items[idx].span();
            if let Some(Item::Op(OpKind::Binary(prev), prev_span)) = idx.checked_sub(1).map(|i| &items[i]) {
                return Err(Error::new(
                    vec![prev_span.start..op_span.end],
                    AmbiguousPrecedence { first: prev.to_string(), second: op.to_string() },
                ));
            }

            let rhs = items.split_off(idx + 1);
            items.truncate(idx);
            if items.is_empty() || rhs.is_empty() {
                return Err(Error::new(vec![op_span], MissingOperand { op: op.to_string() }));
            }

            return Ok(Node::binary(op, self.build(items)?, self.build(rhs)?));
        }

        if let Some((Item::Op(OpKind::Unary(op), span), rest)) = items.split_first() {
            if rest.is_empty() {
                return Err(Error::new(vec![span.clone()], MissingOperand { op: op.to_string() }));
            }
            return Ok(Node::unary(*op, self.build(rest.to_vec())?));
        }

        if let Some(comma) = items.iter().find(|item| matches!(item, Item::Comma(_))) {
            return Err(Error::new(vec![comma.span()], UnexpectedComma));
        }

        // two or more operands with nothing joining them
        let span = items.get(1).map_or_else(|| items[0].span(), Item::span);
        Err(Error::new(vec![span], MissingOperator))
    }
}

/// Parses a single statement into an expression tree.
pub fn parse(source: &str) -> Result<Node, Error> {
    Parser::new(source).try_parse_full()
}

//! Conversion of raw words into literal or identifier leaves.

use crate::parser::{
    ast::{literal::Literal, node::Node},
    error::{Error, InvalidIdentifier, MalformedNumber},
};
use num_complex::Complex64;
use std::ops::Range;

/// Returns true if the string is non-empty and made only of ASCII digits.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Applies the imaginary unit to a real literal if the word was marked as complex.
fn imaginary(real: f64, complex: bool) -> Option<Literal> {
    complex.then(|| Literal::Complex(Complex64::new(0.0, real)))
}

/// Converts a word into a leaf node.
///
/// - `True` and `False` become booleans.
/// - A trailing `j` (on anything but the bare word `j`) marks the number as imaginary.
/// - A run of digits becomes an integer; integers too large for an [`i64`] become floats.
/// - Digits on both sides of a single `.` become a float. Any other use of `.` is an error.
/// - Anything else becomes an identifier, unless it starts with a digit.
pub fn coerce(word: &str, span: Range<usize>) -> Result<Node, Error> {
    match word {
        "True" => return Ok(Literal::Boolean(true).into()),
        "False" => return Ok(Literal::Boolean(false).into()),
        _ => (),
    }

    let (body, complex) = match word.strip_suffix('j') {
        Some(body) if !body.is_empty() => (body, true),
        _ => (word, false),
    };

    if is_digits(body) {
        let lit = match body.parse::<i64>() {
            Ok(n) => imaginary(n as f64, complex).unwrap_or(Literal::Integer(n)),
            // only reachable on overflow, since the body is all digits
            Err(_) => {
                let n = body.parse::<f64>().unwrap_or(f64::INFINITY);
                imaginary(n, complex).unwrap_or(Literal::Float(n))
            },
        };
        return Ok(lit.into());
    }

    if body.contains('.') {
        return match body.split_once('.') {
            Some((int, frac)) if is_digits(int) && is_digits(frac) => {
                let n = body.parse::<f64>()
                    .map_err(|_| Error::new(vec![span], MalformedNumber { lexeme: word.to_string() }))?;
                Ok(imaginary(n, complex).unwrap_or(Literal::Float(n)).into())
            },
            _ => Err(Error::new(vec![span], MalformedNumber { lexeme: word.to_string() })),
        };
    }

    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(Error::new(vec![span], InvalidIdentifier { name: word.to_string() }));
    }

    Ok(Node::Symbol(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lit(word: &str) -> Node {
        coerce(word, 0..word.len()).unwrap()
    }

    #[test]
    fn numbers() {
        assert_eq!(lit("42"), Node::int(42));
        assert_eq!(lit("0.5"), Node::float(0.5));
        assert_eq!(lit("3j"), Literal::Complex(Complex64::new(0.0, 3.0)).into());
        assert_eq!(lit("1.5j"), Literal::Complex(Complex64::new(0.0, 1.5)).into());
        assert_eq!(lit("99999999999999999999"), Node::float(1e20));
    }

    #[test]
    fn booleans() {
        assert_eq!(lit("True"), Literal::Boolean(true).into());
        assert_eq!(lit("False"), Literal::Boolean(false).into());
    }

    #[test]
    fn identifiers() {
        assert_eq!(lit("x"), Node::symbol("x"));
        assert_eq!(lit("j"), Node::symbol("j"));
        assert_eq!(lit("xj"), Node::symbol("xj"));
        assert_eq!(lit("rate_2"), Node::symbol("rate_2"));
    }

    #[test]
    fn malformed() {
        for word in ["1.2.3", "5.", ".5", "a.b", "1.xj"] {
            let err = coerce(word, 0..word.len()).unwrap_err();
            assert!(err.is::<MalformedNumber>(), "{word}");
        }

        let err = coerce("2x", 0..2).unwrap_err();
        assert!(err.is::<InvalidIdentifier>());
        assert_eq!(err.spans, vec![0..2]);
    }
}

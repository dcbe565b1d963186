//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

extern crate self as axioms_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that the concrete kind can be inspected.
    fn as_any(&self) -> &dyn Any;

    /// Returns the message displayed at the top of the error report.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors that do not originate from source code (such as errors raised while transforming an
/// already-parsed expression) have no spans; their reports only contain the message and help text.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that is not associated with any region of source code.
    pub fn spanless(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the kind of this error if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the regions of `input` it originated from.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use axioms_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "unexpected end of expression",
        labels = [format!("add another {} here", "operand".fg(EXPR))],
        help = "every operator needs two operands",
    )]
    struct MissingThing;

    #[derive(Debug, ErrorKind)]
    #[error(message = format!("`{}` is not defined", name))]
    struct Undefined {
        name: String,
    }

    /// Renders the report of an error to a string without ANSI color codes.
    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn report_with_span() {
        let err = Error::new(vec![2..3], MissingThing);
        let report = render(&err, "a+");

        assert!(report.contains("unexpected end of expression"));
        assert!(report.contains("add another operand here"));
        assert!(report.contains("every operator needs two operands"));
    }

    #[test]
    fn report_without_span() {
        let err = Error::spanless(Undefined { name: "y".to_string() });
        let report = render(&err, "x + 1");

        assert!(report.contains("`y` is not defined"));
        assert_eq!(err.to_string(), "`y` is not defined");
    }

    #[test]
    fn inspect_kind() {
        let err = Error::spanless(Undefined { name: "y".to_string() });

        assert!(err.is::<Undefined>());
        assert!(!err.is::<MissingThing>());
        assert_eq!(err.downcast_ref::<Undefined>().map(|u| u.name.as_str()), Some("y"));
    }
}

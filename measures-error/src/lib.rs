//! Contains the common [`ErrorKind`] trait used by front-end errors to display user-facing error
//! messages, pointing at the parts of the input that caused them.
//!
//! Error kinds are usually not implemented by hand; derive them with `measures_attrs::ErrorKind`
//! instead.

extern crate self as measures_error;

pub use ariadne;

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The color to use to highlight unit symbols and quantity names.
pub const UNIT: Color = Color::RGB(235, 191, 52);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    ///
    /// Each span is paired with one label, in order. Extra spans or labels are ignored.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
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

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, rendering the given input as the
    /// source the spans refer to.
    pub fn write_report(&self, input: &str, w: impl io::Write) -> io::Result<()> {
        self.build_report("input").write(("input", Source::from(input)), w)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) -> io::Result<()> {
        self.build_report("input").eprint(("input", Source::from(input)))
    }
}

//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Each crate in the workspace defines its own error enums (parse errors, differentiation errors,
//! evaluation errors) and derives [`ErrorKind`] for them with `exptree-attrs`. The command layer
//! erases them into a single [`Error`] so that every failure is reported the same way.

use ariadne::{Color, Report};
use std::{fmt::Debug, ops::Range};

// lets the derive macro refer to this crate by name in this crate's own tests
extern crate self as exptree_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    ///
    /// The `i`th label of the error is attached to `spans[i]`. Labels without a matching span are
    /// dropped.
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

    /// Shifts every span of this error by `offset` bytes.
    ///
    /// Used when the erroneous text was cut out of a larger line of input, so that the report
    /// points into the original line.
    pub fn offset(mut self, offset: usize) -> Self {
        for span in self.spans.iter_mut() {
            *span = span.start + offset..span.end + offset;
        }
        self
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

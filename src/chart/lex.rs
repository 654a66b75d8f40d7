//! Lexical analyzer of the chart format.
//!
//! Raw [String] == [`ChartLines`] ==> [`Section`] == [entry] ==> [`TrackObjectEntry`] / [`ChartEntry`]
//!
//! The whole source is materialized once into [`ChartLines`], and every reader extracts its own
//! section from it, so the same buffer can be shared by concurrent readers.

pub mod entry;
pub mod lines;

use thiserror::Error;

use crate::chart::command::mixin::SourceLineMixin;

pub use self::{
    entry::{ChartEntry, NoteData, TrackObjectEntry},
    lines::{ChartLines, Section},
};

/// What was wrong in a malformed line.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// The line has no `=` between its key and value.
    #[error("expected `=` separator")]
    MissingSeparator,
    /// The tick position is not an unsigned integer.
    #[error("invalid tick position: {0}")]
    InvalidPosition(std::num::ParseIntError),
    /// A field was expected to be an integer.
    #[error("invalid integer in {field}: {source}")]
    InvalidInteger {
        /// The name of the field.
        field: &'static str,
        /// The reason.
        source: std::num::ParseIntError,
    },
    /// A field was expected to be a floating point number.
    #[error("invalid number in {field}: {source}")]
    InvalidFloat {
        /// The name of the field.
        field: &'static str,
        /// The reason.
        source: std::num::ParseFloatError,
    },
    /// The data has an unexpected number of whitespace-separated tokens.
    #[error("expected {expected} tokens, but found {found}")]
    UnexpectedTokenCount {
        /// How many tokens are required.
        expected: &'static str,
        /// How many tokens were found.
        found: usize,
    },
    /// The denominator exponent of a time signature is too large.
    #[error("time signature denominator 2^{0} is out of range")]
    InvalidTimeSignature(u8),
    /// The note index is not defined for the instrument family.
    #[error("note index {index} is not defined for {family}")]
    UnknownNoteIndex {
        /// The chord family.
        family: &'static str,
        /// The note index.
        index: u8,
    },
}

/// A line of the chart could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} in `{text}`")]
pub struct FormatError {
    /// The offending line.
    pub text: String,
    /// The specific failure.
    pub kind: FormatErrorKind,
}

impl FormatError {
    /// Creates a new error for `text`.
    pub fn new(text: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A format error with the line number it occurred.
pub type FormatErrorWithLine = SourceLineMixin<FormatError>;

/// type alias of `core::result::Result<T, FormatError>`
pub(crate) type Result<T> = core::result::Result<T, FormatError>;

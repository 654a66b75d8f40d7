//! The reader and the writer of the chart(.chart) file.
//!
//! This module consists of three phases: lexical analyzing, section parsing and unparsing.
//!
//! `lex` module materializes the source into [`lex::ChartLines`], extracts sections from it and decodes each line into an entry.
//!
//! `parse` module assembles the entries of each section into the models of [`model`], and [`parse_song`] coordinates them into a whole [`Song`].
//!
//! `unparse` module writes the models back into the chart format.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `String` to input). A leading byte order mark is skipped.
//! - A missing section is not an error, and the corresponding part of the model is absent.
//! - A malformed line is an error with its line number, and no partial song is returned.
//! - Unknown metadata headers and unknown event types are kept to be written back.

pub mod command;
pub mod config;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod unparse;

use std::path::Path;

use thiserror::Error;

use self::{
    command::UndefinedEnumValue,
    config::ReadConfig,
    lex::{ChartLines, FormatErrorWithLine},
    model::Song,
};

/// An error occurred when reading the chart file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ChartError {
    /// A line could not be decoded.
    #[error("format: {0}")]
    Format(#[from] FormatErrorWithLine),
    /// The lines ended before the closing `}` of the section.
    #[error("section [{section}] starting at line {line} is not terminated")]
    UnterminatedSection {
        /// The name of the section.
        section: String,
        /// The 1-based line number of the section name.
        line: usize,
    },
    /// A selector did not belong to the requested family.
    #[error(transparent)]
    UndefinedEnumValue(#[from] UndefinedEnumValue),
    /// The file could not be read or written.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Returns the 1-based line number the error points at, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format(error) => Some(error.line()),
            Self::UnterminatedSection { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// type alias of `core::result::Result<T, ChartError>`
pub type Result<T> = core::result::Result<T, ChartError>;

/// Parse a chart from source text.
///
/// # Example
///
/// ```
/// use chart_rs::chart::{config::default_config, parse_song};
///
/// let source = "[Song]\n{\n  Name = \"Test Song\"\n  Resolution = 192\n}\n[ExpertSingle]\n{\n  0 = N 0 0\n}\n";
/// let song = parse_song(source, &default_config()).expect("a valid chart");
/// let metadata = song.metadata.as_ref().expect("has the Song section");
/// assert_eq!(metadata.title.as_deref(), Some("Test Song"));
/// ```
///
/// # Errors
///
/// Returns the first error of the sections, in order of metadata, global events, sync track and instruments.
pub fn parse_song(source: &str, config: &ReadConfig) -> Result<Song> {
    Song::from_lines(&ChartLines::new(source), config)
}

/// Reads a chart file at `path`.
///
/// # Errors
///
/// Returns [`ChartError::Io`] if the file could not be read, or an error of [`parse_song`].
pub fn read_song(path: impl AsRef<Path>, config: &ReadConfig) -> Result<Song> {
    let source = std::fs::read_to_string(path)?;
    parse_song(&source, config)
}

/// Writes the song into a chart file at `path`, replacing its contents.
///
/// # Errors
///
/// Returns [`ChartError::Io`] if the file could not be written.
pub fn write_song(path: impl AsRef<Path>, song: &Song) -> Result<()> {
    std::fs::write(path, song.unparse())?;
    Ok(())
}

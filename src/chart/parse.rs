//! Parsing the models from [`ChartLines`](crate::chart::lex::ChartLines).
//!
//! Raw [String] == [lex](crate::chart::lex) ==> [`ChartLines`](crate::chart::lex::ChartLines) == parse ==> [Song](crate::chart::model::Song)
//!
//! Every reader extracts its own section from the shared [`ChartLines`](crate::chart::lex::ChartLines), and returns `Ok(None)` if
//! the section is missing. [`song`] coordinates all of them.

pub mod events;
pub mod metadata;
pub mod note_table;
pub mod song;
pub mod sync_track;
pub mod track;

use crate::chart::{
    command::mixin::SourceLineMixinExt,
    lex::FormatError,
};

pub use self::{
    note_table::{NoteFamily, NoteOutcome, NoteTable},
    track::{
        read_drums, read_drums_track, read_ghl_instrument, read_ghl_track, read_instrument,
        read_standard_instrument, read_standard_track, read_track,
    },
};

/// Attaches the line number to the format error of the line.
pub(crate) trait WithLine<T> {
    fn at_line(self, line: usize) -> crate::chart::Result<T>;
}

impl<T> WithLine<T> for Result<T, FormatError> {
    fn at_line(self, line: usize) -> crate::chart::Result<T> {
        self.map_err(|error| error.into_wrapper_line(line).into())
    }
}

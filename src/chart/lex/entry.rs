//! Decoders of a single line into an entry.
//!
//! - `Position = Type Data` lines in track, event and sync sections become [`TrackObjectEntry`].
//! - `Header = Value` lines in the `Song` section become [`ChartEntry`].

use std::{num::ParseIntError, str::FromStr};

use super::{FormatError, FormatErrorKind, Result};
use crate::chart::command::time::TickPosition;

/// Trims one pair of surrounding double quotes, if both exist.
#[must_use]
pub fn trim_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

/// A decoded `Header = Value` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartEntry<'a> {
    /// The key of the line.
    pub header: &'a str,
    /// The value of the line, surrounding quotes trimmed.
    pub data: &'a str,
    /// Whether the value was quoted.
    pub quoted: bool,
    /// The whole line.
    pub text: &'a str,
}

impl<'a> ChartEntry<'a> {
    /// Decodes the `Header = Value` line.
    ///
    /// # Errors
    ///
    /// Returns [`FormatErrorKind::MissingSeparator`] if the line has no `=`.
    pub fn parse(text: &'a str) -> Result<Self> {
        let (header, value) = text
            .split_once('=')
            .ok_or_else(|| FormatError::new(text, FormatErrorKind::MissingSeparator))?;
        let value = value.trim();
        let data = trim_quotes(value);
        Ok(Self {
            header: header.trim(),
            data,
            quoted: data.len() != value.len(),
            text,
        })
    }

    /// Makes an error about this line.
    #[must_use]
    pub fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(self.text, kind)
    }

    /// Parses the value as a floating point number.
    ///
    /// # Errors
    ///
    /// Returns [`FormatErrorKind::InvalidFloat`] if the value is not a number.
    pub fn float(&self) -> Result<f64> {
        self.data.parse().map_err(|source| {
            self.error(FormatErrorKind::InvalidFloat {
                field: "value",
                source,
            })
        })
    }

    /// Parses the value as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`FormatErrorKind::InvalidInteger`] if the value is not an integer of `T`.
    pub fn integer<T: FromStr<Err = ParseIntError>>(&self) -> Result<T> {
        self.data.parse().map_err(|source| {
            self.error(FormatErrorKind::InvalidInteger {
                field: "value",
                source,
            })
        })
    }
}

/// A decoded `Position = Type Data` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackObjectEntry<'a> {
    /// Where the object is placed.
    pub position: TickPosition,
    /// The type tag, such as `N`, `S`, `E`, `B`, `A` or `TS`.
    pub entry_type: &'a str,
    /// The rest of the line after the type tag.
    pub data: &'a str,
    /// The whole line.
    pub text: &'a str,
}

impl<'a> TrackObjectEntry<'a> {
    /// Decodes the `Position = Type Data` line.
    ///
    /// # Errors
    ///
    /// - [`FormatErrorKind::MissingSeparator`] if the line has no `=`.
    /// - [`FormatErrorKind::InvalidPosition`] if the position is not an unsigned integer.
    /// - [`FormatErrorKind::UnexpectedTokenCount`] if the type tag is missing.
    pub fn parse(text: &'a str) -> Result<Self> {
        let (position, rest) = text
            .split_once('=')
            .ok_or_else(|| FormatError::new(text, FormatErrorKind::MissingSeparator))?;
        let position = position
            .trim()
            .parse()
            .map_err(|err| FormatError::new(text, FormatErrorKind::InvalidPosition(err)))?;
        let rest = rest.trim();
        let (entry_type, data) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(entry_type, data)| (entry_type, data.trim()));
        if entry_type.is_empty() {
            return Err(FormatError::new(
                text,
                FormatErrorKind::UnexpectedTokenCount {
                    expected: "at least 1",
                    found: 0,
                },
            ));
        }
        Ok(Self {
            position,
            entry_type,
            data,
            text,
        })
    }

    /// Makes an error about this line.
    #[must_use]
    pub fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(self.text, kind)
    }

    /// Splits the data into whitespace-separated fields.
    pub fn fields(&self) -> std::str::SplitWhitespace<'a> {
        self.data.split_whitespace()
    }

    /// Parses `token` as an integer, naming it `field` in the error.
    ///
    /// # Errors
    ///
    /// Returns [`FormatErrorKind::InvalidInteger`] if the token is not an integer of `T`.
    pub fn integer<T: FromStr<Err = ParseIntError>>(
        &self,
        field: &'static str,
        token: &str,
    ) -> Result<T> {
        token
            .parse()
            .map_err(|source| self.error(FormatErrorKind::InvalidInteger { field, source }))
    }

    /// Parses the data as exactly two integers, such as `<type> <length>` of a star power phrase.
    ///
    /// # Errors
    ///
    /// Returns [`FormatErrorKind::UnexpectedTokenCount`] if the data does not have two fields, or
    /// [`FormatErrorKind::InvalidInteger`] if one of them is not an integer.
    pub fn integer_pair<A, B>(&self, fields: (&'static str, &'static str)) -> Result<(A, B)>
    where
        A: FromStr<Err = ParseIntError>,
        B: FromStr<Err = ParseIntError>,
    {
        let tokens: Vec<_> = self.fields().collect();
        let [first, second] = tokens.as_slice() else {
            return Err(self.error(FormatErrorKind::UnexpectedTokenCount {
                expected: "2",
                found: tokens.len(),
            }));
        };
        Ok((
            self.integer(fields.0, first)?,
            self.integer(fields.1, second)?,
        ))
    }

    /// Parses the data of an `N` entry.
    ///
    /// # Errors
    ///
    /// See [`TrackObjectEntry::integer_pair`].
    pub fn note_data(&self) -> Result<NoteData> {
        let (index, sustain) = self.integer_pair(("note index", "sustain length"))?;
        Ok(NoteData { index, sustain })
    }
}

/// The data of an `N` entry, `<note index> <sustain length>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteData {
    /// The family specific note index.
    pub index: u8,
    /// The sustain length in ticks.
    pub sustain: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_object_entry() {
        let entry = TrackObjectEntry::parse("768 = N 0 0").expect("must be decoded");
        assert_eq!(entry.position, TickPosition(768));
        assert_eq!(entry.entry_type, "N");
        assert_eq!(entry.data, "0 0");
        assert_eq!(
            entry.note_data(),
            Ok(NoteData {
                index: 0,
                sustain: 0
            })
        );

        let entry = TrackObjectEntry::parse("0 = E \"section Intro\"").expect("must be decoded");
        assert_eq!(entry.entry_type, "E");
        assert_eq!(entry.data, "\"section Intro\"");

        let entry = TrackObjectEntry::parse("0=TS 4").expect("must be decoded");
        assert_eq!(entry.entry_type, "TS");
        assert_eq!(entry.data, "4");
    }

    #[test]
    fn bad_position() {
        let err = TrackObjectEntry::parse("abc = N 0 0").expect_err("position is not a number");
        assert_eq!(err.text, "abc = N 0 0");
        assert!(matches!(err.kind, FormatErrorKind::InvalidPosition(_)));

        let err = TrackObjectEntry::parse("-1 = N 0 0").expect_err("position is negative");
        assert!(matches!(err.kind, FormatErrorKind::InvalidPosition(_)));

        let err = TrackObjectEntry::parse("0 N 0 0").expect_err("no separator");
        assert_eq!(err.kind, FormatErrorKind::MissingSeparator);

        let err = TrackObjectEntry::parse("0 = ").expect_err("no type");
        assert!(matches!(
            err.kind,
            FormatErrorKind::UnexpectedTokenCount { found: 0, .. }
        ));
    }

    #[test]
    fn bad_note_data() {
        let entry = TrackObjectEntry::parse("0 = N 0").expect("must be decoded");
        assert!(matches!(
            entry.note_data().map_err(|err| err.kind),
            Err(FormatErrorKind::UnexpectedTokenCount { found: 1, .. })
        ));

        let entry = TrackObjectEntry::parse("0 = N x 0").expect("must be decoded");
        assert!(matches!(
            entry.note_data().map_err(|err| err.kind),
            Err(FormatErrorKind::InvalidInteger {
                field: "note index",
                ..
            })
        ));
    }

    #[test]
    fn chart_entry() {
        let entry = ChartEntry::parse("Name = \"Song Title\"").expect("must be decoded");
        assert_eq!(entry.header, "Name");
        assert_eq!(entry.data, "Song Title");
        assert!(entry.quoted);

        let entry = ChartEntry::parse("Resolution = 192").expect("must be decoded");
        assert_eq!(entry.header, "Resolution");
        assert_eq!(entry.integer::<u32>(), Ok(192));
        assert!(!entry.quoted);

        let entry = ChartEntry::parse("Offset = abc").expect("must be decoded");
        assert!(matches!(
            entry.float().map_err(|err| err.kind),
            Err(FormatErrorKind::InvalidFloat { .. })
        ));
    }

    #[test]
    fn quotes() {
        assert_eq!(trim_quotes("\"a b\""), "a b");
        assert_eq!(trim_quotes("\"a"), "\"a");
        assert_eq!(trim_quotes("\""), "\"");
        assert_eq!(trim_quotes("ab"), "ab");
    }
}

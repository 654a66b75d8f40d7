//! Parsing [`SyncTrack`] from the `SyncTrack` section.

use super::WithLine;
use crate::chart::{
    Result,
    lex::{ChartLines, FormatErrorKind, TrackObjectEntry},
    model::sync_track::{SyncTrack, TimeSignature},
};

/// The name of the section.
pub const SECTION_NAME: &str = "SyncTrack";

/// Tempo and anchor values are written as integers of the true value times this.
pub const MILLI_SCALE: f64 = 1000.0;

/// The largest denominator exponent, `2^7 = 128`.
pub const MAX_DENOMINATOR_EXPONENT: u8 = 7;

/// The denominator exponent assumed when omitted, `2^2 = 4`.
pub const DEFAULT_DENOMINATOR_EXPONENT: u8 = 2;

impl SyncTrack {
    /// Reads the `SyncTrack` section.
    ///
    /// `B` and `A` entries at the same position are merged into one [`Tempo`](crate::chart::model::sync_track::Tempo)
    /// in either order. Returns `Ok(None)` also when the section has no markers.
    ///
    /// # Errors
    ///
    /// - [`ChartError::UnterminatedSection`](crate::chart::ChartError::UnterminatedSection) if the section is not closed.
    /// - [`ChartError::Format`](crate::chart::ChartError::Format) if a marker is malformed.
    pub fn from_lines(lines: &ChartLines<'_>) -> Result<Option<Self>> {
        let Some(section) = lines.section(SECTION_NAME)? else {
            return Ok(None);
        };
        let mut sync_track = Self::default();
        for (line, text) in section.lines() {
            let entry = TrackObjectEntry::parse(text).at_line(line)?;
            sync_track.apply(&entry).at_line(line)?;
        }
        Ok((!sync_track.is_empty()).then_some(sync_track))
    }

    fn apply(&mut self, entry: &TrackObjectEntry<'_>) -> crate::chart::lex::Result<()> {
        match entry.entry_type {
            "TS" => {
                let time_signature = time_signature(entry)?;
                self.time_signatures.push(time_signature);
            }
            "B" => {
                let value = milli_value(entry, "tempo")?;
                self.set_beats_per_minute(entry.position, value);
            }
            "A" => {
                let value = milli_value(entry, "anchor")?;
                self.set_anchor(entry.position, value);
            }
            entry_type => {
                tracing::debug!(entry_type, position = %entry.position, "skipped unknown sync entry");
            }
        }
        Ok(())
    }
}

fn time_signature(entry: &TrackObjectEntry<'_>) -> crate::chart::lex::Result<TimeSignature> {
    let fields: Vec<_> = entry.fields().collect();
    let (numerator, exponent) = match fields.as_slice() {
        [numerator] => (
            entry.integer("numerator", numerator)?,
            DEFAULT_DENOMINATOR_EXPONENT,
        ),
        [numerator, exponent] => (
            entry.integer("numerator", numerator)?,
            entry.integer("denominator exponent", exponent)?,
        ),
        _ => {
            return Err(entry.error(FormatErrorKind::UnexpectedTokenCount {
                expected: "1 or 2",
                found: fields.len(),
            }));
        }
    };
    if exponent > MAX_DENOMINATOR_EXPONENT {
        return Err(entry.error(FormatErrorKind::InvalidTimeSignature(exponent)));
    }
    Ok(TimeSignature {
        position: entry.position,
        numerator,
        denominator: 1 << exponent,
    })
}

fn milli_value(entry: &TrackObjectEntry<'_>, field: &'static str) -> crate::chart::lex::Result<f64> {
    let fields: Vec<_> = entry.fields().collect();
    let [value] = fields.as_slice() else {
        return Err(entry.error(FormatErrorKind::UnexpectedTokenCount {
            expected: "1",
            found: fields.len(),
        }));
    };
    let value: u64 = entry.integer(field, value)?;
    Ok(value as f64 / MILLI_SCALE)
}

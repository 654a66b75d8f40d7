//! Parsing [`Track`]s and [`Instrument`]s from the `<Difficulty><Instrument>` sections.
//!
//! The assembler is generic over the chord family, and the family specific notes are decoded by
//! its [`NoteTable`].

use super::{
    WithLine,
    events::{EVENT_ENTRY, event_from_entry},
    note_table::{NoteFamily, NoteOutcome, NoteTable},
};
use crate::chart::{
    Result,
    command::{Difficulty, GhlInstrument, Instruments, StandardInstrument, UndefinedEnumValue},
    config::{ReadConfig, UnknownNotePolicy},
    lex::{ChartLines, FormatErrorKind, Section, TrackObjectEntry},
    model::{
        AnyInstrument,
        chord::{Chord, DrumsNote, GhlNote, StandardNote},
        track::{Instrument, StarPowerPhrase, Track},
    },
};

/// The type tag of note entries.
pub const NOTE_ENTRY: &str = "N";
/// The type tag of star power entries.
pub const STAR_POWER_ENTRY: &str = "S";

/// Assembles a track from the lines of its section.
struct TrackAssembler<'a, N> {
    table: &'a NoteTable<N>,
    policy: UnknownNotePolicy,
    track: Track<N>,
    /// The chord being assembled, taken out of `track`.
    current: Option<Chord<N>>,
}

impl<'a, N> TrackAssembler<'a, N> {
    fn new(table: &'a NoteTable<N>, policy: UnknownNotePolicy) -> Self {
        Self {
            table,
            policy,
            track: Track::default(),
            current: None,
        }
    }

    fn apply(&mut self, entry: &TrackObjectEntry<'_>) -> crate::chart::lex::Result<()> {
        match entry.entry_type {
            NOTE_ENTRY => self.apply_note(entry)?,
            EVENT_ENTRY => self.track.local_events.push(event_from_entry(entry)),
            STAR_POWER_ENTRY => {
                let (_kind, length): (u8, u32) =
                    entry.integer_pair(("phrase type", "phrase length"))?;
                self.track.star_power.push(StarPowerPhrase {
                    position: entry.position,
                    length,
                });
            }
            entry_type => {
                tracing::debug!(entry_type, position = %entry.position, "skipped unknown track entry");
            }
        }
        Ok(())
    }

    fn apply_note(&mut self, entry: &TrackObjectEntry<'_>) -> crate::chart::lex::Result<()> {
        let data = entry.note_data()?;
        let position = entry.position;
        if self
            .current
            .as_ref()
            .is_none_or(|chord| chord.position != position)
        {
            self.flush();
            self.current = self.track.chords.remove(&position);
        }
        let chord = self.current.get_or_insert_with(|| Chord::new(position));
        if (self.table.decode)(chord, data) == NoteOutcome::Unknown {
            match self.policy {
                UnknownNotePolicy::Ignore => {
                    tracing::debug!(family = self.table.family, index = data.index, %position, "ignored unknown note index");
                }
                UnknownNotePolicy::Reject => {
                    return Err(entry.error(FormatErrorKind::UnknownNoteIndex {
                        family: self.table.family,
                        index: data.index,
                    }));
                }
            }
        }
        Ok(())
    }

    /// Stores the chord being assembled, unless it is empty.
    fn flush(&mut self) {
        if let Some(chord) = self.current.take().filter(|chord| !chord.is_empty()) {
            self.track.chords.insert(chord.position, chord);
        }
    }

    fn finish(mut self) -> Option<Track<N>> {
        self.flush();
        (!self.track.is_empty()).then_some(self.track)
    }
}

fn assemble_track<N>(
    section: &Section<'_>,
    table: &NoteTable<N>,
    config: &ReadConfig,
) -> Result<Option<Track<N>>> {
    let mut assembler = TrackAssembler::new(table, config.unknown_note_policy());
    for (line, text) in section.lines() {
        let entry = TrackObjectEntry::parse(text).at_line(line)?;
        assembler.apply(&entry).at_line(line)?;
    }
    Ok(assembler.finish())
}

fn check_family<N: NoteFamily>(instrument: Instruments) -> core::result::Result<(), UndefinedEnumValue> {
    if N::TABLE.instruments.contains(&instrument) {
        Ok(())
    } else {
        Err(UndefinedEnumValue::new(N::TABLE.family, instrument))
    }
}

fn track_of<N: NoteFamily>(
    lines: &ChartLines<'_>,
    instrument: Instruments,
    difficulty: Difficulty,
    config: &ReadConfig,
) -> Result<Option<Track<N>>> {
    let name = instrument.section_name(difficulty);
    let Some(section) = lines.section(&name)? else {
        return Ok(None);
    };
    assemble_track(&section, &N::TABLE, config)
}

fn instrument_of<N: NoteFamily>(
    lines: &ChartLines<'_>,
    instrument: Instruments,
    config: &ReadConfig,
) -> Result<Option<Instrument<N>>> {
    let results = config.map_units(&Difficulty::ALL, |&difficulty| {
        track_of(lines, instrument, difficulty, config)
    });
    let mut tracks = [None, None, None, None];
    for (slot, result) in tracks.iter_mut().zip(results) {
        *slot = result?;
    }
    Ok(Instrument::from_tracks(tracks))
}

/// Reads a track of the chord family `N`, selected by the general [`Instruments`].
///
/// # Errors
///
/// - [`ChartError::UndefinedEnumValue`](crate::chart::ChartError::UndefinedEnumValue) if `instrument` is not of the family `N`.
/// - Any error on reading the section.
pub fn read_track<N: NoteFamily>(
    lines: &ChartLines<'_>,
    instrument: Instruments,
    difficulty: Difficulty,
    config: &ReadConfig,
) -> Result<Option<Track<N>>> {
    check_family::<N>(instrument)?;
    track_of(lines, instrument, difficulty, config)
}

/// Reads all the tracks of any instrument, selected by the general [`Instruments`].
///
/// # Errors
///
/// Any error on reading the sections, the first in order of difficulties.
pub fn read_instrument(
    lines: &ChartLines<'_>,
    instrument: Instruments,
    config: &ReadConfig,
) -> Result<Option<AnyInstrument>> {
    if let Ok(ghl) = GhlInstrument::try_from(instrument) {
        return Ok(read_ghl_instrument(lines, ghl, config)?.map(AnyInstrument::Ghl));
    }
    if let Ok(standard) = StandardInstrument::try_from(instrument) {
        return Ok(read_standard_instrument(lines, standard, config)?.map(AnyInstrument::Standard));
    }
    Ok(read_drums(lines, config)?.map(AnyInstrument::Drums))
}

/// Reads all the tracks of the drums.
///
/// # Errors
///
/// Any error on reading the sections, the first in order of difficulties.
pub fn read_drums(
    lines: &ChartLines<'_>,
    config: &ReadConfig,
) -> Result<Option<Instrument<DrumsNote>>> {
    instrument_of(lines, Instruments::Drums, config)
}

/// Reads a track of the drums.
///
/// # Errors
///
/// Any error on reading the section.
pub fn read_drums_track(
    lines: &ChartLines<'_>,
    difficulty: Difficulty,
    config: &ReadConfig,
) -> Result<Option<Track<DrumsNote>>> {
    track_of(lines, Instruments::Drums, difficulty, config)
}

/// Reads all the tracks of a six-fret instrument.
///
/// # Errors
///
/// Any error on reading the sections, the first in order of difficulties.
pub fn read_ghl_instrument(
    lines: &ChartLines<'_>,
    instrument: GhlInstrument,
    config: &ReadConfig,
) -> Result<Option<Instrument<GhlNote>>> {
    instrument_of(lines, instrument.into(), config)
}

/// Reads a track of a six-fret instrument.
///
/// # Errors
///
/// Any error on reading the section.
pub fn read_ghl_track(
    lines: &ChartLines<'_>,
    instrument: GhlInstrument,
    difficulty: Difficulty,
    config: &ReadConfig,
) -> Result<Option<Track<GhlNote>>> {
    track_of(lines, instrument.into(), difficulty, config)
}

/// Reads all the tracks of a five-fret instrument.
///
/// # Errors
///
/// Any error on reading the sections, the first in order of difficulties.
pub fn read_standard_instrument(
    lines: &ChartLines<'_>,
    instrument: StandardInstrument,
    config: &ReadConfig,
) -> Result<Option<Instrument<StandardNote>>> {
    instrument_of(lines, instrument.into(), config)
}

/// Reads a track of a five-fret instrument.
///
/// # Errors
///
/// Any error on reading the section.
pub fn read_standard_track(
    lines: &ChartLines<'_>,
    instrument: StandardInstrument,
    difficulty: Difficulty,
    config: &ReadConfig,
) -> Result<Option<Track<StandardNote>>> {
    track_of(lines, instrument.into(), difficulty, config)
}

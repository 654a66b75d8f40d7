//! Prelude module for the chart module.
//!
//! This module re-exports all public types from the chart module for convenient access.
//! You can use `use chart_rs::chart::prelude::*;` to import all chart types at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_chart_error};

pub use super::{
    ChartError, Result,
    command::{
        Difficulty, GhlInstrument, Instruments, StandardInstrument, UndefinedEnumValue,
        event_type::{EventKind, GlobalEventType, LocalEventType},
        mixin::{SourceLineMixin, SourceLineMixinExt},
        time::TickPosition,
    },
    config::{ReadConfig, UnknownNotePolicy, default_config},
    lex::{
        ChartEntry, ChartLines, FormatError, FormatErrorKind, FormatErrorWithLine, NoteData,
        Section, TrackObjectEntry,
    },
    model::{
        AnyInstrument, Chord, ChordModifiers, ChordNote, DrumsChord, DrumsLane, DrumsNote, Event,
        FretNote, GhlChord, GhlLane, GhlNote, GlobalEvent, Instrument, LocalEvent, Metadata, Song,
        StandardChord, StandardLane, StandardNote, StarPowerPhrase, StreamChannel,
        StreamCollection, SyncTrack, Tempo, TimeSignature, Track, UnknownEntry,
        lyrics::{Phrase, Syllable, phrases, read_phrases},
    },
    parse::{
        NoteFamily, NoteOutcome, NoteTable, read_drums, read_drums_track, read_ghl_instrument,
        read_ghl_track, read_instrument, read_standard_instrument, read_standard_track,
        read_track,
    },
    parse_song, read_song,
    unparse::unparse_global_events,
    write_song,
};

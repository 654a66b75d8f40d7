//! Models of the parsed chart.
//!
//! [`Song`] aggregates everything in a chart file:
//!
//! - [`Metadata`] from the `Song` section,
//! - [`GlobalEvent`]s from the `Events` section,
//! - [`SyncTrack`] from the `SyncTrack` section,
//! - an [`Instrument`] per supported instrument, each holding up to four [`Track`]s.

pub mod chord;
pub mod event;
pub mod lyrics;
pub mod metadata;
pub mod sync_track;
pub mod track;

use crate::chart::command::{GhlInstrument, Instruments, StandardInstrument};

pub use self::{
    chord::{
        Chord, ChordModifiers, ChordNote, DrumsChord, DrumsLane, DrumsNote, FretNote, GhlChord,
        GhlLane, GhlNote, StandardChord, StandardLane, StandardNote,
    },
    event::{Event, GlobalEvent, LocalEvent},
    metadata::{Metadata, StreamChannel, StreamCollection, UnknownEntry},
    sync_track::{SyncTrack, Tempo, TimeSignature},
    track::{Instrument, StarPowerPhrase, Track},
};

/// An instrument of any chord family, selected by [`Instruments`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyInstrument {
    /// The drums.
    Drums(Instrument<DrumsNote>),
    /// A six-fret instrument.
    Ghl(Instrument<GhlNote>),
    /// A five-fret instrument.
    Standard(Instrument<StandardNote>),
}

/// A whole chart file.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    /// The `Song` section.
    pub metadata: Option<Metadata>,
    /// The `Events` section.
    pub global_events: Option<Vec<GlobalEvent>>,
    /// The `SyncTrack` section.
    pub sync_track: Option<SyncTrack>,
    /// The drums.
    pub drums: Option<Instrument<DrumsNote>>,
    /// The six-fret instruments, indexed by [`GhlInstrument::index`].
    pub ghl: [Option<Instrument<GhlNote>>; 2],
    /// The five-fret instruments, indexed by [`StandardInstrument::index`].
    pub standard: [Option<Instrument<StandardNote>>; 5],
}

impl Song {
    /// Returns the six-fret instrument.
    #[must_use]
    pub fn ghl(&self, instrument: GhlInstrument) -> Option<&Instrument<GhlNote>> {
        self.ghl[instrument.index()].as_ref()
    }

    /// Returns the six-fret instrument slot.
    pub fn ghl_mut(&mut self, instrument: GhlInstrument) -> &mut Option<Instrument<GhlNote>> {
        &mut self.ghl[instrument.index()]
    }

    /// Returns the five-fret instrument.
    #[must_use]
    pub fn standard(&self, instrument: StandardInstrument) -> Option<&Instrument<StandardNote>> {
        self.standard[instrument.index()].as_ref()
    }

    /// Returns the five-fret instrument slot.
    pub fn standard_mut(
        &mut self,
        instrument: StandardInstrument,
    ) -> &mut Option<Instrument<StandardNote>> {
        &mut self.standard[instrument.index()]
    }

    /// Returns the resolution in ticks per beat.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.metadata
            .as_ref()
            .map_or(metadata::DEFAULT_RESOLUTION, Metadata::resolution)
    }

    /// Returns the instruments which have any track.
    pub fn present_instruments(&self) -> impl Iterator<Item = Instruments> + '_ {
        Instruments::ALL.into_iter().filter(|&instrument| {
            if let Ok(ghl) = GhlInstrument::try_from(instrument) {
                self.ghl(ghl).is_some()
            } else if let Ok(standard) = StandardInstrument::try_from(instrument) {
                self.standard(standard).is_some()
            } else {
                self.drums.is_some()
            }
        })
    }
}

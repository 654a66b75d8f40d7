//! Definitions of the tracks and the instruments.

use std::collections::BTreeMap;

use crate::{
    chart::{
        command::{Difficulty, time::TickPosition},
        model::{chord::Chord, event::LocalEvent},
    },
    iter::{OrderedAlternatingIter, UniqueIter},
};

/// A star power phrase, `S <type> <length>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarPowerPhrase {
    /// Where the phrase starts.
    pub position: TickPosition,
    /// The length of the phrase in ticks.
    pub length: u32,
}

impl StarPowerPhrase {
    /// Returns the position just after the phrase.
    #[must_use]
    pub const fn end(&self) -> TickPosition {
        self.position.offset(self.length)
    }

    /// Returns true if the position is covered by the phrase.
    #[must_use]
    pub fn contains(&self, position: TickPosition) -> bool {
        (self.position..self.end()).contains(&position)
    }
}

/// The notes and the events for a pair of an instrument and a difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track<N> {
    /// The chords, at most one per position.
    pub chords: BTreeMap<TickPosition, Chord<N>>,
    /// The local events, in order of appearance.
    pub local_events: Vec<LocalEvent>,
    /// The star power phrases, in order of appearance.
    pub star_power: Vec<StarPowerPhrase>,
}

impl<N> Default for Track<N> {
    fn default() -> Self {
        Self {
            chords: BTreeMap::new(),
            local_events: Vec::new(),
            star_power: Vec::new(),
        }
    }
}

impl<N> Track<N> {
    /// Returns true if the track has no chords, no local events and no star power phrases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty() && self.local_events.is_empty() && self.star_power.is_empty()
    }

    /// Returns the chord at the position.
    #[must_use]
    pub fn chord_at(&self, position: TickPosition) -> Option<&Chord<N>> {
        self.chords.get(&position)
    }

    /// Returns the star power phrase covering the position.
    #[must_use]
    pub fn star_power_at(&self, position: TickPosition) -> Option<&StarPowerPhrase> {
        self.star_power
            .iter()
            .find(|phrase| phrase.contains(position))
    }
}

/// Up to four tracks of an instrument, one per [`Difficulty`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instrument<N> {
    /// The tracks indexed by [`Difficulty::index`].
    pub tracks: [Option<Track<N>>; 4],
}

impl<N> Default for Instrument<N> {
    fn default() -> Self {
        Self {
            tracks: [None, None, None, None],
        }
    }
}

impl<N> Instrument<N> {
    /// Collects the tracks into an instrument, or `None` if every track is absent.
    pub fn from_tracks(tracks: [Option<Track<N>>; 4]) -> Option<Self> {
        tracks
            .iter()
            .any(Option::is_some)
            .then_some(Self { tracks })
    }

    /// Returns true if every track is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.iter().all(Option::is_none)
    }

    /// Returns the track of the difficulty.
    #[must_use]
    pub fn track(&self, difficulty: Difficulty) -> Option<&Track<N>> {
        self.tracks[difficulty.index()].as_ref()
    }

    /// Returns the track of the difficulty, mutably.
    pub fn track_mut(&mut self, difficulty: Difficulty) -> Option<&mut Track<N>> {
        self.tracks[difficulty.index()].as_mut()
    }

    /// Replaces the track of the difficulty, returning the old one.
    pub fn set_track(&mut self, difficulty: Difficulty, track: Option<Track<N>>) -> Option<Track<N>> {
        std::mem::replace(&mut self.tracks[difficulty.index()], track)
    }

    /// Iterates the present tracks with their difficulties, from easy to expert.
    pub fn tracks(&self) -> impl Iterator<Item = (Difficulty, &Track<N>)> {
        Difficulty::ALL
            .into_iter()
            .filter_map(|difficulty| Some((difficulty, self.track(difficulty)?)))
    }

    /// Iterates the local events of all the difficulties in order of their positions.
    ///
    /// Events on the same position are yielded from easy to expert.
    pub fn ordered_local_events(&self) -> impl Iterator<Item = &LocalEvent> {
        OrderedAlternatingIter::new(
            self.tracks
                .iter()
                .map(|track| track.iter().flat_map(|track| track.local_events.iter())),
            |event: &&LocalEvent| event.position,
        )
        .into_iter()
        .flatten()
    }

    /// Iterates the local events of all the difficulties, skipping events of the same type at
    /// the same position as an already yielded one.
    pub fn unique_local_events(&self) -> impl Iterator<Item = &LocalEvent> {
        UniqueIter::new(
            self.tracks()
                .map(|(_, track)| track.local_events.iter())
                .collect::<Vec<_>>(),
            |a: &&LocalEvent, b: &&LocalEvent| a.is_same_event(b),
        )
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{command::event_type::LocalEventType, model::chord::DrumsNote};

    fn track_with_events(events: &[(u32, LocalEventType)]) -> Track<DrumsNote> {
        Track {
            local_events: events
                .iter()
                .map(|&(position, kind)| LocalEvent::new(TickPosition(position), kind, None))
                .collect(),
            ..Track::default()
        }
    }

    #[test]
    fn absent_instrument() {
        assert!(Instrument::<DrumsNote>::from_tracks([None, None, None, None]).is_none());
        let instrument =
            Instrument::from_tracks([None, Some(track_with_events(&[])), None, None])
                .expect("some track given");
        assert!(instrument.track(Difficulty::Medium).is_some());
        assert!(instrument.track(Difficulty::Expert).is_none());
    }

    #[test]
    fn local_events_across_difficulties() {
        let mut instrument = Instrument::default();
        instrument.set_track(
            Difficulty::Easy,
            Some(track_with_events(&[
                (0, LocalEventType::Solo),
                (768, LocalEventType::SoloEnd),
            ])),
        );
        instrument.set_track(
            Difficulty::Expert,
            Some(track_with_events(&[
                (0, LocalEventType::Solo),
                (384, LocalEventType::WailOn),
                (768, LocalEventType::SoloEnd),
            ])),
        );

        let ordered: Vec<_> = instrument
            .ordered_local_events()
            .map(|event| (event.position.0, event.event_type()))
            .collect();
        assert_eq!(
            ordered,
            vec![
                (0, LocalEventType::Solo),
                (0, LocalEventType::Solo),
                (384, LocalEventType::WailOn),
                (768, LocalEventType::SoloEnd),
                (768, LocalEventType::SoloEnd),
            ]
        );

        let unique: Vec<_> = instrument
            .unique_local_events()
            .map(|event| (event.position.0, event.event_type()))
            .collect();
        assert_eq!(
            unique,
            vec![
                (0, LocalEventType::Solo),
                (384, LocalEventType::WailOn),
                (768, LocalEventType::SoloEnd),
            ]
        );
    }

    #[test]
    fn star_power_coverage() {
        let phrase = StarPowerPhrase {
            position: TickPosition(192),
            length: 96,
        };
        assert!(phrase.contains(TickPosition(192)));
        assert!(phrase.contains(TickPosition(287)));
        assert!(!phrase.contains(TickPosition(288)));
    }
}

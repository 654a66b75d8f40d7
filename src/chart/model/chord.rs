//! Definitions of the notes and the chords for each instrument family.
//!
//! All the families share [`Chord`], parameterized by the note type:
//!
//! - [`DrumsChord`] holds [`DrumsNote`]s, which can be flagged as cymbals.
//! - [`GhlChord`] holds [`GhlNote`]s on the six-fret lanes.
//! - [`StandardChord`] holds [`StandardNote`]s on the five-fret lanes.

use bitflags::bitflags;

use crate::chart::command::time::TickPosition;

bitflags! {
    /// Flags modifying how a chord is played.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ChordModifiers: u8 {
        /// Flips the strum/hopo state of the chord.
        const FORCED = 1;
        /// The chord can be tapped.
        const TAP = 1 << 1;
    }
}

/// A note which occupies one lane of the chord.
pub trait ChordNote {
    /// The lane type of the family.
    type Lane: Copy + Eq + std::fmt::Debug;

    /// Returns the lane of the note.
    fn lane(&self) -> Self::Lane;
}

/// A lane of the drums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrumsLane {
    /// The kick pedal.
    Kick = 0,
    /// The red pad.
    Red = 1,
    /// The yellow pad.
    Yellow = 2,
    /// The blue pad.
    Blue = 3,
    /// The green pad of four-lane drums, or the orange pad of five-lane drums.
    Green4LaneOrange5Lane = 4,
    /// The green pad of five-lane drums.
    Green5Lane = 5,
}

impl DrumsLane {
    /// Converts the note index into the lane.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::Kick,
            1 => Self::Red,
            2 => Self::Yellow,
            3 => Self::Blue,
            4 => Self::Green4LaneOrange5Lane,
            5 => Self::Green5Lane,
            _ => return None,
        })
    }

    /// The note index of the lane.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A lane of the six-fret guitar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GhlLane {
    /// No fret is held.
    Open = 0,
    /// The first black fret.
    Black1 = 1,
    /// The second black fret.
    Black2 = 2,
    /// The third black fret.
    Black3 = 3,
    /// The first white fret.
    White1 = 4,
    /// The second white fret.
    White2 = 5,
    /// The third white fret.
    White3 = 6,
}

impl GhlLane {
    /// Converts the ordinal into the lane.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        Some(match ordinal {
            0 => Self::Open,
            1 => Self::Black1,
            2 => Self::Black2,
            3 => Self::Black3,
            4 => Self::White1,
            5 => Self::White2,
            6 => Self::White3,
            _ => return None,
        })
    }
}

/// A lane of the five-fret guitar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardLane {
    /// No fret is held.
    Open = 0,
    /// The green fret.
    Green = 1,
    /// The red fret.
    Red = 2,
    /// The yellow fret.
    Yellow = 3,
    /// The blue fret.
    Blue = 4,
    /// The orange fret.
    Orange = 5,
}

impl StandardLane {
    /// Converts the ordinal into the lane.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        Some(match ordinal {
            0 => Self::Open,
            1 => Self::Green,
            2 => Self::Red,
            3 => Self::Yellow,
            4 => Self::Blue,
            5 => Self::Orange,
            _ => return None,
        })
    }
}

/// A note of the drums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrumsNote {
    /// Which pad is hit.
    pub lane: DrumsLane,
    /// The sustain length in ticks.
    pub sustain: u32,
    /// Whether the pad is a cymbal. Only [`DrumsLane::Green4LaneOrange5Lane`] and
    /// [`DrumsLane::Green5Lane`] can be written as cymbals.
    pub is_cymbal: bool,
}

impl DrumsNote {
    /// Creates a pad note.
    #[must_use]
    pub const fn new(lane: DrumsLane, sustain: u32) -> Self {
        Self {
            lane,
            sustain,
            is_cymbal: false,
        }
    }
}

impl ChordNote for DrumsNote {
    type Lane = DrumsLane;

    fn lane(&self) -> Self::Lane {
        self.lane
    }
}

/// A note of a fretted instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FretNote<L> {
    /// Which fret is held.
    pub lane: L,
    /// The sustain length in ticks.
    pub sustain: u32,
}

impl<L> FretNote<L> {
    /// Creates a note.
    #[must_use]
    pub const fn new(lane: L, sustain: u32) -> Self {
        Self { lane, sustain }
    }
}

impl<L: Copy + Eq + std::fmt::Debug> ChordNote for FretNote<L> {
    type Lane = L;

    fn lane(&self) -> Self::Lane {
        self.lane
    }
}

/// A note of the six-fret guitar.
pub type GhlNote = FretNote<GhlLane>;
/// A note of the five-fret guitar.
pub type StandardNote = FretNote<StandardLane>;

/// Notes sounding at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord<N> {
    /// Where the chord is placed.
    pub position: TickPosition,
    /// The notes, each on its own lane, in order of insertion.
    pub notes: Vec<N>,
    /// The modifiers of the chord.
    pub modifiers: ChordModifiers,
}

/// A chord of the drums.
pub type DrumsChord = Chord<DrumsNote>;
/// A chord of the six-fret guitar.
pub type GhlChord = Chord<GhlNote>;
/// A chord of the five-fret guitar.
pub type StandardChord = Chord<StandardNote>;

impl<N> Chord<N> {
    /// Creates an empty chord.
    #[must_use]
    pub const fn new(position: TickPosition) -> Self {
        Self {
            position,
            notes: Vec::new(),
            modifiers: ChordModifiers::empty(),
        }
    }

    /// Returns true if the chord has neither notes nor modifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.modifiers.is_empty()
    }
}

impl<N: ChordNote> Chord<N> {
    /// Inserts the note, replacing the existing note on the same lane.
    pub fn insert(&mut self, note: N) {
        if let Some(existing) = self.note_mut(note.lane()) {
            *existing = note;
        } else {
            self.notes.push(note);
        }
    }

    /// Finds the note on the lane.
    #[must_use]
    pub fn note(&self, lane: N::Lane) -> Option<&N> {
        self.notes.iter().find(|note| note.lane() == lane)
    }

    /// Finds the note on the lane, mutably.
    pub fn note_mut(&mut self, lane: N::Lane) -> Option<&mut N> {
        self.notes.iter_mut().find(|note| note.lane() == lane)
    }

    /// Returns true if the chord has a note on the lane.
    #[must_use]
    pub fn contains(&self, lane: N::Lane) -> bool {
        self.note(lane).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_distinct() {
        let mut chord = StandardChord::new(TickPosition(0));
        chord.insert(StandardNote::new(StandardLane::Green, 0));
        chord.insert(StandardNote::new(StandardLane::Red, 0));
        chord.insert(StandardNote::new(StandardLane::Green, 96));

        assert_eq!(
            chord.notes,
            vec![
                StandardNote::new(StandardLane::Green, 96),
                StandardNote::new(StandardLane::Red, 0),
            ]
        );
    }

    #[test]
    fn empty_chord() {
        let mut chord = GhlChord::new(TickPosition(0));
        assert!(chord.is_empty());
        chord.modifiers |= ChordModifiers::TAP;
        assert!(!chord.is_empty());
    }
}

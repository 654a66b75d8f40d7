//! This module introduces struct [`SyncTrack`], which manages tempo and time signature changes.

use std::collections::BTreeMap;

use crate::chart::command::time::TickPosition;

/// A tempo marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo {
    /// Where the tempo changes.
    pub position: TickPosition,
    /// The tempo, in beats per minute.
    pub beats_per_minute: f64,
    /// The absolute time of the marker in seconds, overriding the time integrated from the preceding tempos.
    pub anchor: Option<f64>,
}

impl Tempo {
    /// Creates a tempo marker without an anchor.
    #[must_use]
    pub const fn new(position: TickPosition, beats_per_minute: f64) -> Self {
        Self {
            position,
            beats_per_minute,
            anchor: None,
        }
    }

    /// Returns true if the marker was created by an anchor alone, and carries no tempo.
    #[must_use]
    pub fn is_anchor_only(&self) -> bool {
        self.anchor.is_some() && self.beats_per_minute <= 0.0
    }
}

/// A time signature marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Where the time signature changes.
    pub position: TickPosition,
    /// The number of beats in a measure.
    pub numerator: u8,
    /// The note value of a beat, a power of two up to 128.
    pub denominator: u8,
}

impl TimeSignature {
    /// Returns the base-2 exponent of the denominator, or `None` if it is not a power of two.
    #[must_use]
    pub const fn denominator_exponent(&self) -> Option<u8> {
        if self.denominator.is_power_of_two() {
            Some(self.denominator.trailing_zeros() as u8)
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// This aggregate manages the tempo and the time signature changes.
pub struct SyncTrack {
    /// Tempo markers, at most one per position.
    pub tempos: BTreeMap<TickPosition, Tempo>,
    /// Time signature markers in order of appearance. Markers on the same position are kept.
    pub time_signatures: Vec<TimeSignature>,
}

impl SyncTrack {
    /// Returns true if there are no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tempos.is_empty() && self.time_signatures.is_empty()
    }

    /// Returns the tempo marker at the position.
    #[must_use]
    pub fn tempo_at(&self, position: TickPosition) -> Option<&Tempo> {
        self.tempos.get(&position)
    }

    /// Sets the beats per minute of the marker at the position, creating it without an anchor if missing.
    pub fn set_beats_per_minute(&mut self, position: TickPosition, beats_per_minute: f64) {
        self.tempos
            .entry(position)
            .and_modify(|tempo| tempo.beats_per_minute = beats_per_minute)
            .or_insert_with(|| Tempo::new(position, beats_per_minute));
    }

    /// Sets the anchor of the marker at the position, creating it with zero beats per minute if missing.
    pub fn set_anchor(&mut self, position: TickPosition, anchor: f64) {
        self.tempos
            .entry(position)
            .or_insert_with(|| Tempo::new(position, 0.0))
            .anchor = Some(anchor);
    }

    /// Returns the tempo in effect at the position, the last marker at or before it which carries a tempo.
    ///
    /// Markers created by an anchor alone are skipped.
    #[must_use]
    pub fn tempo_in_effect(&self, position: TickPosition) -> Option<&Tempo> {
        self.tempos
            .range(..=position)
            .rev()
            .map(|(_, tempo)| tempo)
            .find(|tempo| !tempo.is_anchor_only())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_only_markers_keep_tempo() {
        let mut sync_track = SyncTrack::default();
        sync_track.set_beats_per_minute(TickPosition(0), 120.0);
        sync_track.set_anchor(TickPosition(0), 0.0);
        sync_track.set_anchor(TickPosition(384), 1.0);

        let at_anchor = sync_track.tempo_in_effect(TickPosition(384));
        assert_eq!(at_anchor.map(|tempo| tempo.position), Some(TickPosition(0)));
        assert!(sync_track.tempo_at(TickPosition(384)).is_some_and(Tempo::is_anchor_only));
        // an anchor on a tempo marker does not hide it
        assert!(!sync_track.tempo_at(TickPosition(0)).is_some_and(Tempo::is_anchor_only));
    }
}

//! The note tables, which decode `N <index> <sustain>` entries into chords of each family and encode them back.

use crate::chart::{
    command::Instruments,
    lex::NoteData,
    model::chord::{
        Chord, ChordModifiers, ChordNote, DrumsChord, DrumsLane, DrumsNote, FretNote, GhlChord,
        GhlLane, GhlNote, StandardChord, StandardLane, StandardNote,
    },
};

/// The note index of the forced modifier on the fretted instruments.
pub const FORCED_INDEX: u8 = 5;
/// The note index of the tap modifier on the fretted instruments.
pub const TAP_INDEX: u8 = 6;
/// The note index of the open note on the fretted instruments.
pub const OPEN_INDEX: u8 = 7;
/// The note index of the third black fret on the six-fret instruments.
pub const GHL_BLACK3_INDEX: u8 = 8;
/// The offset from the pad index to its cymbal marker index on the drums.
pub const CYMBAL_OFFSET: u8 = 63;
/// The cymbal marker indices on the drums, for the pads 4 and 5.
pub const CYMBAL_MARKERS: std::ops::RangeInclusive<u8> = 67..=68;

/// Result of applying a note entry to a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteOutcome {
    /// The chord was updated.
    Applied,
    /// The index is not defined for the family, and the chord is unchanged.
    Unknown,
}

/// Decoder and encoder of the note entries of a chord family.
#[derive(Debug, Clone, Copy)]
pub struct NoteTable<N> {
    /// The name of the family, used in errors.
    pub family: &'static str,
    /// The instruments of the family.
    pub instruments: &'static [Instruments],
    /// Applies a note entry to the chord being assembled.
    pub decode: fn(&mut Chord<N>, NoteData) -> NoteOutcome,
    /// Lists the note entries of the chord, in the order they are written.
    pub encode: fn(&Chord<N>) -> Vec<NoteData>,
}

/// A chord family which has a note table.
pub trait NoteFamily: ChordNote + Sized + Send + Sync + 'static {
    /// The note table of the family.
    const TABLE: NoteTable<Self>;
}

impl NoteFamily for DrumsNote {
    const TABLE: NoteTable<Self> = DRUMS_NOTE_TABLE;
}

impl NoteFamily for GhlNote {
    const TABLE: NoteTable<Self> = GHL_NOTE_TABLE;
}

impl NoteFamily for StandardNote {
    const TABLE: NoteTable<Self> = STANDARD_NOTE_TABLE;
}

/// The note table of the drums.
///
/// - `0..=5`: the pads, from the kick.
/// - `67..=68`: cymbal markers of the pad `index - 63`, which is created if missing.
///
/// Only the pads 4 and 5 have cymbal markers, so the cymbal flag of another pad is not written.
pub const DRUMS_NOTE_TABLE: NoteTable<DrumsNote> = NoteTable {
    family: "drums",
    instruments: &[Instruments::Drums],
    decode: decode_drums,
    encode: encode_drums,
};

fn decode_drums(chord: &mut DrumsChord, NoteData { index, sustain }: NoteData) -> NoteOutcome {
    if let Some(lane) = DrumsLane::from_index(index) {
        match chord.note_mut(lane) {
            // keeps the cymbal flag set by a preceding marker
            Some(note) => note.sustain = sustain,
            None => chord.notes.push(DrumsNote::new(lane, sustain)),
        }
        return NoteOutcome::Applied;
    }
    if !CYMBAL_MARKERS.contains(&index) {
        return NoteOutcome::Unknown;
    }
    let Some(lane) = DrumsLane::from_index(index - CYMBAL_OFFSET) else {
        return NoteOutcome::Unknown;
    };
    match chord.note_mut(lane) {
        Some(note) => note.is_cymbal = true,
        None => chord.notes.push(DrumsNote {
            lane,
            sustain,
            is_cymbal: true,
        }),
    }
    NoteOutcome::Applied
}

fn encode_drums(chord: &DrumsChord) -> Vec<NoteData> {
    let mut data = vec![];
    for note in &chord.notes {
        let index = note.lane.index();
        data.push(NoteData {
            index,
            sustain: note.sustain,
        });
        if !note.is_cymbal {
            continue;
        }
        let marker = index + CYMBAL_OFFSET;
        if CYMBAL_MARKERS.contains(&marker) {
            data.push(NoteData {
                index: marker,
                sustain: 0,
            });
        } else {
            tracing::warn!(lane = ?note.lane, position = %chord.position, "cymbal flag dropped, the pad has no cymbal marker");
        }
    }
    data
}

/// The note table of the six-fret instruments.
///
/// - `0..=2`: the white frets.
/// - `3..=4`: the first and the second black frets.
/// - `5`: forced, `6`: tap, `7`: open, `8`: the third black fret.
pub const GHL_NOTE_TABLE: NoteTable<GhlNote> = NoteTable {
    family: "six-fret",
    instruments: &[Instruments::GhlGuitar, Instruments::GhlBass],
    decode: decode_ghl,
    encode: encode_ghl,
};

const fn ghl_lane(index: u8) -> Option<GhlLane> {
    match index {
        0..=2 => GhlLane::from_ordinal(index + 4),
        3..=4 => GhlLane::from_ordinal(index - 2),
        OPEN_INDEX => Some(GhlLane::Open),
        GHL_BLACK3_INDEX => Some(GhlLane::Black3),
        _ => None,
    }
}

const fn ghl_index(lane: GhlLane) -> u8 {
    match lane {
        GhlLane::White1 | GhlLane::White2 | GhlLane::White3 => lane as u8 - 4,
        GhlLane::Black1 | GhlLane::Black2 => lane as u8 + 2,
        GhlLane::Open => OPEN_INDEX,
        GhlLane::Black3 => GHL_BLACK3_INDEX,
    }
}

fn decode_ghl(chord: &mut GhlChord, data: NoteData) -> NoteOutcome {
    decode_fret(chord, data, ghl_lane)
}

fn encode_ghl(chord: &GhlChord) -> Vec<NoteData> {
    encode_fret(chord, ghl_index)
}

/// The note table of the five-fret instruments.
///
/// - `0..=4`: the frets from green to orange.
/// - `5`: forced, `6`: tap, `7`: open.
pub const STANDARD_NOTE_TABLE: NoteTable<StandardNote> = NoteTable {
    family: "five-fret",
    instruments: &[
        Instruments::LeadGuitar,
        Instruments::RhythmGuitar,
        Instruments::CoopGuitar,
        Instruments::Bass,
        Instruments::Keys,
    ],
    decode: decode_standard,
    encode: encode_standard,
};

const fn standard_lane(index: u8) -> Option<StandardLane> {
    match index {
        0..=4 => StandardLane::from_ordinal(index + 1),
        OPEN_INDEX => Some(StandardLane::Open),
        _ => None,
    }
}

const fn standard_index(lane: StandardLane) -> u8 {
    match lane {
        StandardLane::Open => OPEN_INDEX,
        fret => fret as u8 - 1,
    }
}

fn decode_standard(chord: &mut StandardChord, data: NoteData) -> NoteOutcome {
    decode_fret(chord, data, standard_lane)
}

fn encode_standard(chord: &StandardChord) -> Vec<NoteData> {
    encode_fret(chord, standard_index)
}

fn decode_fret<L: Copy + Eq + std::fmt::Debug>(
    chord: &mut Chord<FretNote<L>>,
    NoteData { index, sustain }: NoteData,
    lane_of: fn(u8) -> Option<L>,
) -> NoteOutcome {
    match index {
        FORCED_INDEX => chord.modifiers |= ChordModifiers::FORCED,
        TAP_INDEX => chord.modifiers |= ChordModifiers::TAP,
        index => {
            let Some(lane) = lane_of(index) else {
                return NoteOutcome::Unknown;
            };
            chord.insert(FretNote::new(lane, sustain));
        }
    }
    NoteOutcome::Applied
}

fn encode_fret<L: Copy>(
    chord: &Chord<FretNote<L>>,
    index_of: fn(L) -> u8,
) -> Vec<NoteData> {
    let notes = chord.notes.iter().map(|note| NoteData {
        index: index_of(note.lane),
        sustain: note.sustain,
    });
    let modifiers = [
        (ChordModifiers::FORCED, FORCED_INDEX),
        (ChordModifiers::TAP, TAP_INDEX),
    ]
    .into_iter()
    .filter(|&(flag, _)| chord.modifiers.contains(flag))
    .map(|(_, index)| NoteData { index, sustain: 0 });
    notes.chain(modifiers).collect()
}

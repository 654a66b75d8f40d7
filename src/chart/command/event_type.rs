//! Kinds of the events, and the static tables mapping them to/from their tokens in the chart.
//!
//! A token which is not in the table is classified as `Unknown`. Setting `Unknown` as a type of an
//! event writes the sentinel [`UNKNOWN_EVENT_TOKEN`].

/// The token written for an event whose type is `Unknown`.
pub const UNKNOWN_EVENT_TOKEN: &str = "Default";

/// A closed enumeration of event types which has a bidirectional token table.
pub trait EventKind: Copy + Eq + std::fmt::Debug + 'static {
    /// The token table. Every known variant must appear exactly once.
    const TABLE: &'static [(Self, &'static str)];
    /// The variant for tokens missing from the table.
    const UNKNOWN: Self;

    /// Classifies the token.
    #[must_use]
    fn from_token(token: &str) -> Self {
        Self::TABLE
            .iter()
            .find(|(_, known)| *known == token)
            .map_or(Self::UNKNOWN, |&(kind, _)| kind)
    }

    /// Returns the canonical token of the kind.
    #[must_use]
    fn token(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or(UNKNOWN_EVENT_TOKEN, |&(_, token)| token)
    }
}

/// A type of the event placed in the `Events` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum GlobalEventType {
    /// The token was not recognized.
    Unknown,
    /// `section`, a named part of the song for practice mode.
    Section,
    /// `lyric`, a syllable of the vocals.
    Lyric,
    /// `phrase_start`, start of a lyric phrase.
    PhraseStart,
    /// `phrase_end`, end of a lyric phrase.
    PhraseEnd,
    /// `idle`, the band idles.
    Idle,
    /// `play`, the band plays.
    Play,
    /// `half_tempo`, the band animates in half tempo.
    HalfTempo,
    /// `normal_tempo`, the band animates in normal tempo.
    NormalTempo,
    /// `verse`, a verse starts.
    Verse,
    /// `chorus`, a chorus starts.
    Chorus,
    /// `music_start`, the music starts.
    MusicStart,
    /// `end`, the song ends.
    End,
    /// `lighting`, the venue lighting changes. The argument names the effect.
    Lighting,
    /// `crowd_lighters_fast`.
    CrowdLightersFast,
    /// `crowd_lighters_off`.
    CrowdLightersOff,
    /// `crowd_lighters_slow`.
    CrowdLightersSlow,
    /// `crowd_half_tempo`.
    CrowdHalfTempo,
    /// `crowd_normal_tempo`.
    CrowdNormalTempo,
    /// `crowd_double_tempo`.
    CrowdDoubleTempo,
    /// `band_jump`.
    BandJump,
    /// `sync_head_bang`.
    SyncHeadBang,
    /// `sync_wag`.
    SyncWag,
}

impl EventKind for GlobalEventType {
    const TABLE: &'static [(Self, &'static str)] = &[
        (Self::Section, "section"),
        (Self::Lyric, "lyric"),
        (Self::PhraseStart, "phrase_start"),
        (Self::PhraseEnd, "phrase_end"),
        (Self::Idle, "idle"),
        (Self::Play, "play"),
        (Self::HalfTempo, "half_tempo"),
        (Self::NormalTempo, "normal_tempo"),
        (Self::Verse, "verse"),
        (Self::Chorus, "chorus"),
        (Self::MusicStart, "music_start"),
        (Self::End, "end"),
        (Self::Lighting, "lighting"),
        (Self::CrowdLightersFast, "crowd_lighters_fast"),
        (Self::CrowdLightersOff, "crowd_lighters_off"),
        (Self::CrowdLightersSlow, "crowd_lighters_slow"),
        (Self::CrowdHalfTempo, "crowd_half_tempo"),
        (Self::CrowdNormalTempo, "crowd_normal_tempo"),
        (Self::CrowdDoubleTempo, "crowd_double_tempo"),
        (Self::BandJump, "band_jump"),
        (Self::SyncHeadBang, "sync_head_bang"),
        (Self::SyncWag, "sync_wag"),
    ];
    const UNKNOWN: Self = Self::Unknown;
}

/// A type of the event placed in an instrument track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum LocalEventType {
    /// The token was not recognized.
    Unknown,
    /// `solo`, a solo section starts.
    Solo,
    /// `soloend`, the solo section ends.
    SoloEnd,
    /// `solo_on`.
    SoloOn,
    /// `solo_off`.
    SoloOff,
    /// `ghl_6`, six-fret lane marker.
    Ghl6,
    /// `ghl_6_forced`.
    Ghl6Forced,
    /// `wail_on`.
    WailOn,
    /// `wail_off`.
    WailOff,
    /// `ow_face_on`.
    OwFaceOn,
    /// `ow_face_off`.
    OwFaceOff,
}

impl EventKind for LocalEventType {
    const TABLE: &'static [(Self, &'static str)] = &[
        (Self::Solo, "solo"),
        (Self::SoloEnd, "soloend"),
        (Self::SoloOn, "solo_on"),
        (Self::SoloOff, "solo_off"),
        (Self::Ghl6, "ghl_6"),
        (Self::Ghl6Forced, "ghl_6_forced"),
        (Self::WailOn, "wail_on"),
        (Self::WailOff, "wail_off"),
        (Self::OwFaceOn, "ow_face_on"),
        (Self::OwFaceOff, "ow_face_off"),
    ];
    const UNKNOWN: Self = Self::Unknown;
}

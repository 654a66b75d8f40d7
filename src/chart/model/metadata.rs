//! This module introduces struct [`Metadata`], which manages the `Song` section of the chart.

/// The resolution assumed when the chart does not specify one.
pub const DEFAULT_RESOLUTION: u32 = 192;

/// A channel of the separated audio streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreamChannel {
    /// `MusicStream`, the backing track.
    Music,
    /// `GuitarStream`.
    Guitar,
    /// `BassStream`.
    Bass,
    /// `RhythmStream`.
    Rhythm,
    /// `KeysStream`.
    Keys,
    /// `DrumStream`.
    Drum,
    /// `Drum2Stream`.
    Drum2,
    /// `Drum3Stream`.
    Drum3,
    /// `Drum4Stream`.
    Drum4,
    /// `VocalStream`.
    Vocal,
    /// `CrowdStream`.
    Crowd,
}

impl StreamChannel {
    /// All the channels, in the order they are written.
    pub const ALL: [Self; 11] = [
        Self::Music,
        Self::Guitar,
        Self::Bass,
        Self::Rhythm,
        Self::Keys,
        Self::Drum,
        Self::Drum2,
        Self::Drum3,
        Self::Drum4,
        Self::Vocal,
        Self::Crowd,
    ];

    /// The header of the channel in the `Song` section.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Music => "MusicStream",
            Self::Guitar => "GuitarStream",
            Self::Bass => "BassStream",
            Self::Rhythm => "RhythmStream",
            Self::Keys => "KeysStream",
            Self::Drum => "DrumStream",
            Self::Drum2 => "Drum2Stream",
            Self::Drum3 => "Drum3Stream",
            Self::Drum4 => "Drum4Stream",
            Self::Vocal => "VocalStream",
            Self::Crowd => "CrowdStream",
        }
    }

    /// Looks up the channel by its header.
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.header() == header)
    }
}

/// Paths of the separated audio streams.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamCollection {
    /// `MusicStream`.
    pub music: Option<String>,
    /// `GuitarStream`.
    pub guitar: Option<String>,
    /// `BassStream`.
    pub bass: Option<String>,
    /// `RhythmStream`.
    pub rhythm: Option<String>,
    /// `KeysStream`.
    pub keys: Option<String>,
    /// `DrumStream`.
    pub drum: Option<String>,
    /// `Drum2Stream`.
    pub drum2: Option<String>,
    /// `Drum3Stream`.
    pub drum3: Option<String>,
    /// `Drum4Stream`.
    pub drum4: Option<String>,
    /// `VocalStream`.
    pub vocal: Option<String>,
    /// `CrowdStream`.
    pub crowd: Option<String>,
}

impl StreamCollection {
    /// Returns the path of the channel.
    #[must_use]
    pub const fn get(&self, channel: StreamChannel) -> Option<&String> {
        match channel {
            StreamChannel::Music => self.music.as_ref(),
            StreamChannel::Guitar => self.guitar.as_ref(),
            StreamChannel::Bass => self.bass.as_ref(),
            StreamChannel::Rhythm => self.rhythm.as_ref(),
            StreamChannel::Keys => self.keys.as_ref(),
            StreamChannel::Drum => self.drum.as_ref(),
            StreamChannel::Drum2 => self.drum2.as_ref(),
            StreamChannel::Drum3 => self.drum3.as_ref(),
            StreamChannel::Drum4 => self.drum4.as_ref(),
            StreamChannel::Vocal => self.vocal.as_ref(),
            StreamChannel::Crowd => self.crowd.as_ref(),
        }
    }

    /// Returns the slot of the channel.
    pub const fn get_mut(&mut self, channel: StreamChannel) -> &mut Option<String> {
        match channel {
            StreamChannel::Music => &mut self.music,
            StreamChannel::Guitar => &mut self.guitar,
            StreamChannel::Bass => &mut self.bass,
            StreamChannel::Rhythm => &mut self.rhythm,
            StreamChannel::Keys => &mut self.keys,
            StreamChannel::Drum => &mut self.drum,
            StreamChannel::Drum2 => &mut self.drum2,
            StreamChannel::Drum3 => &mut self.drum3,
            StreamChannel::Drum4 => &mut self.drum4,
            StreamChannel::Vocal => &mut self.vocal,
            StreamChannel::Crowd => &mut self.crowd,
        }
    }

    /// Iterates the channels which have paths.
    pub fn iter(&self) -> impl Iterator<Item = (StreamChannel, &str)> {
        StreamChannel::ALL
            .into_iter()
            .filter_map(|channel| Some((channel, self.get(channel)?.as_str())))
    }
}

/// A `Song` section entry with an unrecognized header, kept for writing back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownEntry {
    /// The header.
    pub header: String,
    /// The value, quotes trimmed.
    pub value: String,
    /// Whether the value was quoted.
    pub quoted: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// This aggregate manages the information of the song.
pub struct Metadata {
    /// `Name`, the title of the song.
    pub title: Option<String>,
    /// `Artist`.
    pub artist: Option<String>,
    /// `Charter`, who placed the notes.
    pub charter: Option<String>,
    /// `Album`.
    pub album: Option<String>,
    /// `Year`. Often written with a leading comma such as `", 2008"`, which is kept as is.
    pub year: Option<String>,
    /// `Offset`, the delay of the audio in seconds.
    pub audio_offset: Option<f64>,
    /// `Resolution`, ticks per beat.
    pub resolution: Option<u32>,
    /// `Difficulty`, the rating of the song.
    pub difficulty: Option<i32>,
    /// `PreviewStart` in seconds.
    pub preview_start: Option<f64>,
    /// `PreviewEnd` in seconds.
    pub preview_end: Option<f64>,
    /// `Genre`.
    pub genre: Option<String>,
    /// `MediaType`, such as `"cd"`.
    pub media_type: Option<String>,
    /// The audio streams, allocated on the first stream header.
    pub streams: Option<StreamCollection>,
    /// Entries with unrecognized headers, in order of appearance.
    pub unknown_entries: Vec<UnknownEntry>,
}

impl Metadata {
    /// Returns the resolution, or [`DEFAULT_RESOLUTION`] if not specified.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution.unwrap_or(DEFAULT_RESOLUTION)
    }

    /// Returns the stream collection, allocating it if missing.
    pub fn streams_mut(&mut self) -> &mut StreamCollection {
        self.streams.get_or_insert_with(StreamCollection::default)
    }

    /// Returns the preview window, if both ends are specified.
    #[must_use]
    pub fn preview(&self) -> Option<std::ops::Range<f64>> {
        Some(self.preview_start?..self.preview_end?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_are_allocated_lazily() {
        let mut metadata = Metadata::default();
        assert!(metadata.streams.is_none());
        *metadata.streams_mut().get_mut(StreamChannel::Drum2) = Some("drums_2.ogg".into());
        let streams = metadata.streams.as_ref().expect("must be allocated");
        assert_eq!(
            streams.iter().collect::<Vec<_>>(),
            vec![(StreamChannel::Drum2, "drums_2.ogg")]
        );
        assert_eq!(
            StreamChannel::from_header("Drum2Stream"),
            Some(StreamChannel::Drum2)
        );
        assert_eq!(StreamChannel::from_header("drum2stream"), None);
    }
}

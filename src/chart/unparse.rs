//! Unparse the models into the chart format.
//!
//! Sections are written in the conventional order: `Song`, `SyncTrack`, `Events`, and then the
//! tracks of each instrument from expert to easy. Objects of a section are written in order of their
//! positions, and objects on the same position keep the order of their kinds.

use itertools::Itertools;

use crate::{
    chart::{
        command::{Difficulty, GhlInstrument, Instruments, StandardInstrument, time::TickPosition},
        lex::{
            NoteData,
            lines::{SECTION_CLOSE, SECTION_OPEN},
        },
        model::{
            GlobalEvent, Instrument, Metadata, Song, SyncTrack, Track, metadata::StreamChannel,
        },
        parse::{
            NoteFamily, events, metadata,
            sync_track::{self, DEFAULT_DENOMINATOR_EXPONENT, MILLI_SCALE},
            track::{NOTE_ENTRY, STAR_POWER_ENTRY},
        },
    },
    iter::OrderedAlternatingIter,
};

/// The indent of the body lines.
pub const INDENT: &str = "  ";

/// The phrase type written for star power phrases.
pub const STAR_POWER_PHRASE_TYPE: u8 = 2;

/// Lines on the same position.
type Group = (TickPosition, Vec<String>);

/// Groups the consecutive lines on the same position.
fn grouped(lines: impl IntoIterator<Item = (TickPosition, String)>) -> Vec<Group> {
    let chunks = lines.into_iter().chunk_by(|&(position, _)| position);
    chunks
        .into_iter()
        .map(|(position, group)| (position, group.map(|(_, line)| line).collect()))
        .collect()
}

/// Merges the groups of each kind in order of positions, and prefixes the positions.
fn merge_groups(kinds: Vec<Vec<Group>>) -> Vec<String> {
    OrderedAlternatingIter::new(kinds.into_iter().map(Vec::into_iter), |&(position, _): &Group| {
        position
    })
    .into_iter()
    .flatten()
    .flat_map(|(position, lines)| {
        lines
            .into_iter()
            .map(move |line| format!("{position} = {line}"))
    })
    .collect()
}

fn milli(value: f64) -> u64 {
    (value * MILLI_SCALE).round() as u64
}

fn note_line(data: NoteData) -> String {
    format!("{NOTE_ENTRY} {} {}", data.index, data.sustain)
}

fn push_section(out: &mut String, name: &str, lines: &[String]) {
    out.push('[');
    out.push_str(name);
    out.push_str("]\n");
    out.push_str(SECTION_OPEN);
    out.push('\n');
    for line in lines {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(SECTION_CLOSE);
    out.push('\n');
}

impl Metadata {
    /// Converts into the body lines of the `Song` section.
    #[must_use]
    pub fn unparse_lines(&self) -> Vec<String> {
        let quoted = |header: &str, value: &Option<String>| {
            value
                .as_deref()
                .map(|value| format!("{header} = \"{value}\""))
        };
        let plain = |header: &str, value: Option<String>| {
            value.map(|value| format!("{header} = {value}"))
        };
        let mut lines: Vec<String> = [
            quoted("Name", &self.title),
            quoted("Artist", &self.artist),
            quoted("Charter", &self.charter),
            quoted("Album", &self.album),
            quoted("Year", &self.year),
            plain("Offset", self.audio_offset.map(|v| v.to_string())),
            plain("Resolution", self.resolution.map(|v| v.to_string())),
            plain("Difficulty", self.difficulty.map(|v| v.to_string())),
            plain("PreviewStart", self.preview_start.map(|v| v.to_string())),
            plain("PreviewEnd", self.preview_end.map(|v| v.to_string())),
            quoted("Genre", &self.genre),
            quoted("MediaType", &self.media_type),
        ]
        .into_iter()
        .flatten()
        .collect();
        if let Some(streams) = &self.streams {
            lines.extend(
                streams
                    .iter()
                    .map(|(channel, path)| format!("{} = \"{path}\"", StreamChannel::header(channel))),
            );
        }
        lines.extend(self.unknown_entries.iter().map(|entry| {
            if entry.quoted {
                format!("{} = \"{}\"", entry.header, entry.value)
            } else {
                format!("{} = {}", entry.header, entry.value)
            }
        }));
        lines
    }
}

impl SyncTrack {
    /// Converts into the body lines of the `SyncTrack` section.
    ///
    /// On the same position, `TS` comes first, then `A` and `B`. A time signature denominator which
    /// is not a power of two is rounded down to one.
    #[must_use]
    pub fn unparse_lines(&self) -> Vec<String> {
        let time_signatures = grouped(
            self.time_signatures
                .iter()
                .sorted_by_key(|ts| ts.position)
                .map(|ts| {
                    let exponent = ts.denominator_exponent().unwrap_or_else(|| {
                        // rounds down to a power of two
                        let exponent = ts
                            .denominator
                            .checked_ilog2()
                            .map_or(DEFAULT_DENOMINATOR_EXPONENT, |exponent| exponent as u8);
                        tracing::warn!(denominator = ts.denominator, position = %ts.position, exponent, "time signature denominator is not a power of two");
                        exponent
                    });
                    let line = if exponent == DEFAULT_DENOMINATOR_EXPONENT {
                        format!("TS {}", ts.numerator)
                    } else {
                        format!("TS {} {exponent}", ts.numerator)
                    };
                    (ts.position, line)
                }),
        );
        let tempos = grouped(self.tempos.values().flat_map(|tempo| {
            let anchor = tempo
                .anchor
                .map(|anchor| format!("A {}", milli(anchor)));
            let bpm = (!tempo.is_anchor_only())
                .then(|| format!("B {}", milli(tempo.beats_per_minute)));
            anchor
                .into_iter()
                .chain(bpm)
                .map(move |line| (tempo.position, line))
        }));
        merge_groups(vec![time_signatures, tempos])
    }
}

/// Converts the global events into the body lines of the `Events` section.
#[must_use]
pub fn unparse_global_events(events: &[GlobalEvent]) -> Vec<String> {
    events
        .iter()
        .sorted_by_key(|event| event.position)
        .map(|event| {
            format!(
                "{} = {} \"{}\"",
                event.position,
                events::EVENT_ENTRY,
                event.text()
            )
        })
        .collect()
}

impl<N: NoteFamily> Track<N> {
    /// Converts into the body lines of the track section.
    ///
    /// On the same position, notes come first, then star power phrases and local events.
    #[must_use]
    pub fn unparse_lines(&self) -> Vec<String> {
        let notes = self
            .chords
            .values()
            .map(|chord| {
                (
                    chord.position,
                    (N::TABLE.encode)(chord)
                        .into_iter()
                        .map(note_line)
                        .collect(),
                )
            })
            .collect();
        let star_power = grouped(
            self.star_power
                .iter()
                .sorted_by_key(|phrase| phrase.position)
                .map(|phrase| {
                    (
                        phrase.position,
                        format!(
                            "{STAR_POWER_ENTRY} {STAR_POWER_PHRASE_TYPE} {}",
                            phrase.length
                        ),
                    )
                }),
        );
        let local_events = grouped(
            self.local_events
                .iter()
                .sorted_by_key(|event| event.position)
                .map(|event| {
                    (
                        event.position,
                        format!("{} {}", events::EVENT_ENTRY, event.text()),
                    )
                }),
        );
        merge_groups(vec![notes, star_power, local_events])
    }
}

fn push_instrument<N: NoteFamily>(
    out: &mut String,
    instrument: Instruments,
    value: Option<&Instrument<N>>,
) {
    let Some(value) = value else {
        return;
    };
    for difficulty in Difficulty::ALL.into_iter().rev() {
        if let Some(track) = value.track(difficulty) {
            push_section(
                out,
                &instrument.section_name(difficulty),
                &track.unparse_lines(),
            );
        }
    }
}

impl Song {
    /// Converts into the chart format text.
    #[must_use]
    pub fn unparse(&self) -> String {
        let mut out = String::new();
        if let Some(metadata) = &self.metadata {
            push_section(&mut out, metadata::SECTION_NAME, &metadata.unparse_lines());
        }
        if let Some(sync_track) = &self.sync_track {
            push_section(
                &mut out,
                sync_track::SECTION_NAME,
                &sync_track.unparse_lines(),
            );
        }
        if let Some(global_events) = &self.global_events {
            push_section(
                &mut out,
                events::SECTION_NAME,
                &unparse_global_events(global_events),
            );
        }
        for instrument in Instruments::ALL {
            if let Ok(ghl) = GhlInstrument::try_from(instrument) {
                push_instrument(&mut out, instrument, self.ghl(ghl));
            } else if let Ok(standard) = StandardInstrument::try_from(instrument) {
                push_instrument(&mut out, instrument, self.standard(standard));
            } else {
                push_instrument(&mut out, instrument, self.drums.as_ref());
            }
        }
        out
    }
}

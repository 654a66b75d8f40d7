//! The lyrics view over the global events.
//!
//! Lyrics are written as global events: `phrase_start` opens a line of the lyrics, `lyric <text>`
//! places a syllable, and `phrase_end` closes the line.

use crate::chart::{
    Result,
    command::{event_type::GlobalEventType, time::TickPosition},
    lex::ChartLines,
    model::event::GlobalEvent,
};

/// A syllable of the lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Syllable {
    /// Where the syllable is sung.
    pub position: TickPosition,
    /// The text of the syllable, including the hyphenation marks.
    pub text: String,
}

/// A line of the lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phrase {
    /// Where the phrase starts.
    pub start: TickPosition,
    /// Where the phrase ends, `None` if it is closed by the next phrase or the end of the song.
    pub end: Option<TickPosition>,
    /// The syllables in the phrase.
    pub syllables: Vec<Syllable>,
}

impl Phrase {
    const fn new(start: TickPosition) -> Self {
        Self {
            start,
            end: None,
            syllables: Vec::new(),
        }
    }

    /// Joins the syllables into the text of the line.
    ///
    /// A syllable ending with `-` is joined to the next one without a space, and `=` is read as a literal hyphen.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        let mut joined = true;
        for syllable in &self.syllables {
            if !joined {
                text.push(' ');
            }
            let body = syllable.text.strip_suffix('-');
            joined = body.is_some();
            text.push_str(&body.unwrap_or(syllable.text.as_str()).replace('=', "-"));
        }
        text
    }
}

/// Groups the lyric events into phrases.
///
/// A `lyric` outside of any phrase opens an implicit phrase at its position. Events of other types are ignored.
#[must_use]
pub fn phrases(events: &[GlobalEvent]) -> Vec<Phrase> {
    let mut phrases = vec![];
    let mut open: Option<Phrase> = None;
    for event in events {
        match event.event_type() {
            GlobalEventType::PhraseStart => {
                phrases.extend(open.replace(Phrase::new(event.position)));
            }
            GlobalEventType::Lyric => {
                open.get_or_insert_with(|| Phrase::new(event.position))
                    .syllables
                    .push(Syllable {
                        position: event.position,
                        text: event.argument.clone().unwrap_or_default(),
                    });
            }
            GlobalEventType::PhraseEnd => {
                if let Some(mut phrase) = open.take() {
                    phrase.end = Some(event.position);
                    phrases.push(phrase);
                }
            }
            _ => {}
        }
    }
    phrases.extend(open);
    phrases
}

/// Reads the `Events` section and groups its lyric events into phrases.
///
/// # Errors
///
/// See [`GlobalEvent::read_all`].
pub fn read_phrases(lines: &ChartLines<'_>) -> Result<Option<Vec<Phrase>>> {
    Ok(GlobalEvent::read_all(lines)?.map(|events| phrases(&events)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(position: u32, kind: GlobalEventType, argument: Option<&str>) -> GlobalEvent {
        GlobalEvent::new(TickPosition(position), kind, argument.map(Into::into))
    }

    #[test]
    fn group_phrases() {
        let events = [
            event(0, GlobalEventType::Section, Some("Verse")),
            event(100, GlobalEventType::PhraseStart, None),
            event(110, GlobalEventType::Lyric, Some("Hel-")),
            event(120, GlobalEventType::Lyric, Some("lo")),
            event(130, GlobalEventType::Lyric, Some("world")),
            event(150, GlobalEventType::PhraseEnd, None),
            event(200, GlobalEventType::PhraseStart, None),
            event(210, GlobalEventType::Lyric, Some("well=known")),
            event(300, GlobalEventType::PhraseStart, None),
            event(310, GlobalEventType::Lyric, Some("bye")),
        ];
        let phrases = phrases(&events);
        assert_eq!(phrases.len(), 3);
        assert_eq!(phrases[0].start, TickPosition(100));
        assert_eq!(phrases[0].end, Some(TickPosition(150)));
        assert_eq!(phrases[0].text(), "Hello world");
        assert_eq!(phrases[1].end, None);
        assert_eq!(phrases[1].text(), "well-known");
        assert_eq!(phrases[2].text(), "bye");
    }

    #[test]
    fn implicit_phrase() {
        let phrases = phrases(&[event(50, GlobalEventType::Lyric, Some("la"))]);
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases[0].start, TickPosition(50));
    }
}

//! Parsing [`GlobalEvent`]s from the `Events` section, and the shared decoder of `E` entries.

use super::WithLine;
use crate::chart::{
    Result,
    command::event_type::EventKind,
    lex::{ChartLines, TrackObjectEntry, entry::trim_quotes},
    model::event::{Event, GlobalEvent},
};

/// The name of the section.
pub const SECTION_NAME: &str = "Events";

/// The type tag of event entries.
pub const EVENT_ENTRY: &str = "E";

/// Decodes the data of an `E` entry, `"<type> <argument>"` with optional quotes.
pub(crate) fn event_from_entry<K: EventKind>(entry: &TrackObjectEntry<'_>) -> Event<K> {
    let text = trim_quotes(entry.data).trim();
    let (event_type, argument) = text
        .split_once(char::is_whitespace)
        .map_or((text, None), |(event_type, argument)| {
            (event_type, Some(argument.trim().to_string()))
        });
    Event::from_raw(entry.position, event_type, argument)
}

impl GlobalEvent {
    /// Reads all the events in the `Events` section, in order of appearance.
    ///
    /// # Errors
    ///
    /// - [`ChartError::UnterminatedSection`](crate::chart::ChartError::UnterminatedSection) if the section is not closed.
    /// - [`ChartError::Format`](crate::chart::ChartError::Format) if a line is not a `Position = Type Data` entry.
    pub fn read_all(lines: &ChartLines<'_>) -> Result<Option<Vec<Self>>> {
        let Some(section) = lines.section(SECTION_NAME)? else {
            return Ok(None);
        };
        let mut events = vec![];
        for (line, text) in section.lines() {
            let entry = TrackObjectEntry::parse(text).at_line(line)?;
            if entry.entry_type != EVENT_ENTRY {
                tracing::debug!(line, entry_type = entry.entry_type, "skipped non event entry");
                continue;
            }
            events.push(event_from_entry(&entry));
        }
        Ok(Some(events))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chart::command::{event_type::GlobalEventType, time::TickPosition};

    #[test]
    fn read_events() {
        let source = r#"[Events]
{
  0 = E "section Intro"
  768 = E "lyric Hel-"

  1536 = E "crowd_clap"
  1536 = B 120000
  2304 = E end
}
"#;
        let events = GlobalEvent::read_all(&ChartLines::new(source))
            .expect("must be parsed")
            .expect("section exists");
        assert_eq!(
            events,
            vec![
                GlobalEvent::new(TickPosition(0), GlobalEventType::Section, Some("Intro".into())),
                GlobalEvent::new(TickPosition(768), GlobalEventType::Lyric, Some("Hel-".into())),
                GlobalEvent::from_raw(TickPosition(1536), "crowd_clap", None),
                GlobalEvent::new(TickPosition(2304), GlobalEventType::End, None),
            ]
        );
        assert_eq!(events[2].event_type(), GlobalEventType::Unknown);
    }

    #[test]
    fn event_with_spaced_argument() {
        let entry = TrackObjectEntry::parse(r#"0 = E "section Big Chorus 2""#).expect("valid");
        let event: GlobalEvent = event_from_entry(&entry);
        assert_eq!(event.argument.as_deref(), Some("Big Chorus 2"));
    }
}

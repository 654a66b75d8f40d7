//! Parsing [`Metadata`] from the `Song` section.

use super::WithLine;
use crate::chart::{
    Result,
    lex::{ChartEntry, ChartLines},
    model::metadata::{Metadata, StreamChannel, UnknownEntry},
};

/// The name of the section.
pub const SECTION_NAME: &str = "Song";

impl Metadata {
    /// Reads the `Song` section. Unknown headers are kept in [`Metadata::unknown_entries`].
    ///
    /// # Errors
    ///
    /// - [`ChartError::UnterminatedSection`](crate::chart::ChartError::UnterminatedSection) if the section is not closed.
    /// - [`ChartError::Format`](crate::chart::ChartError::Format) if a line has no `=`, or a numeric value is malformed.
    pub fn from_lines(lines: &ChartLines<'_>) -> Result<Option<Self>> {
        let Some(section) = lines.section(SECTION_NAME)? else {
            return Ok(None);
        };
        let mut metadata = Self::default();
        for (line, text) in section.lines() {
            let entry = ChartEntry::parse(text).at_line(line)?;
            metadata.apply(&entry).at_line(line)?;
        }
        Ok(Some(metadata))
    }

    fn apply(&mut self, entry: &ChartEntry<'_>) -> crate::chart::lex::Result<()> {
        let text = || Some(entry.data.to_string());
        match entry.header {
            "Name" => self.title = text(),
            "Artist" => self.artist = text(),
            "Charter" => self.charter = text(),
            "Album" => self.album = text(),
            "Year" => self.year = text(),
            "Genre" => self.genre = text(),
            "MediaType" => self.media_type = text(),
            "Offset" => self.audio_offset = Some(entry.float()?),
            "Resolution" => self.resolution = Some(entry.integer()?),
            "Difficulty" => self.difficulty = Some(entry.integer()?),
            "PreviewStart" => self.preview_start = Some(entry.float()?),
            "PreviewEnd" => self.preview_end = Some(entry.float()?),
            header => {
                if let Some(channel) = StreamChannel::from_header(header) {
                    *self.streams_mut().get_mut(channel) = text();
                } else {
                    tracing::debug!(header, "unknown metadata header kept as is");
                    self.unknown_entries.push(UnknownEntry {
                        header: header.to_string(),
                        value: entry.data.to_string(),
                        quoted: entry.quoted,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chart::ChartError;

    #[test]
    fn read_metadata() {
        let source = r#"[Song]
{
  Name = "Second Chance"
  Artist = "Shinedown"
  Year = ", 2008"
  Offset = 0.5
  Resolution = 480
  Player2 = bass
  MusicStream = "song.ogg"
}
"#;
        let metadata = Metadata::from_lines(&ChartLines::new(source))
            .expect("must be parsed")
            .expect("section exists");
        assert_eq!(metadata.title.as_deref(), Some("Second Chance"));
        assert_eq!(metadata.year.as_deref(), Some(", 2008"));
        assert_eq!(metadata.audio_offset, Some(0.5));
        assert_eq!(metadata.resolution(), 480);
        assert_eq!(
            metadata.unknown_entries,
            vec![UnknownEntry {
                header: "Player2".into(),
                value: "bass".into(),
                quoted: false,
            }]
        );
        let streams = metadata.streams.expect("allocated by MusicStream");
        assert_eq!(streams.music.as_deref(), Some("song.ogg"));
        assert_eq!(streams.guitar, None);
    }

    #[test]
    fn missing_section() {
        let lines = ChartLines::new("[SyncTrack]\n{\n}\n");
        assert!(matches!(Metadata::from_lines(&lines), Ok(None)));
    }

    #[test]
    fn malformed_resolution() {
        let lines = ChartLines::new("[Song]\n{\n  Resolution = fast\n}\n");
        let Err(ChartError::Format(error)) = Metadata::from_lines(&lines) else {
            panic!("must fail with a format error");
        };
        assert_eq!(error.line(), 3);
    }
}

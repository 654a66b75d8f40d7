//! The materialized line buffer and the section extractor.

use crate::chart::{ChartError, Result};

/// The opening marker of a section body.
pub const SECTION_OPEN: &str = "{";
/// The closing marker of a section body.
pub const SECTION_CLOSE: &str = "}";

/// Immutable, trimmed lines of a chart source.
///
/// Extracting a section does not move any cursor, so the buffer can be read by many readers at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> ChartLines<'a> {
    /// Splits the source into lines. A leading byte order mark and the surrounding whitespaces of each line (including `\r`) are removed.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Self {
            lines: source.lines().map(str::trim).collect(),
        }
    }

    /// Returns the number of lines.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at the 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Returns the names of all the sections, in order of appearance.
    pub fn section_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().filter_map(|&line| section_name_of(line))
    }

    /// Extracts the body of the section named `name`.
    ///
    /// Returns `Ok(None)` if no `[name]` line exists.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::UnterminatedSection`] if the lines end before the closing `}`.
    pub fn section(&self, name: &str) -> Result<Option<Section<'_>>> {
        let Some(header_index) = self
            .lines
            .iter()
            .position(|line| section_name_of(line) == Some(name))
        else {
            tracing::trace!(section = name, "section not found");
            return Ok(None);
        };
        let unterminated = || ChartError::UnterminatedSection {
            section: name.to_string(),
            line: header_index + 1,
        };
        if self.lines.get(header_index + 1) != Some(&SECTION_OPEN) {
            tracing::debug!(section = name, "section body does not start with `{{`");
        }
        // skips `[name]` and `{`
        let body_start = header_index + 2;
        let body = self.lines.get(body_start..).ok_or_else(unterminated)?;
        let body_len = body
            .iter()
            .position(|&line| line == SECTION_CLOSE)
            .ok_or_else(unterminated)?;
        let lines = body.get(..body_len).ok_or_else(unterminated)?;
        tracing::trace!(section = name, lines = lines.len(), "section extracted");
        Ok(Some(Section {
            first_line: body_start + 1,
            lines,
        }))
    }
}

fn section_name_of(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// The body lines of a section, between `{` and `}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    first_line: usize,
    lines: &'a [&'a str],
}

impl<'a> Section<'a> {
    /// Returns the non-blank lines with their 1-based line numbers in the source.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> + use<'a> {
        let Self { first_line, lines } = *self;
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(move |(offset, &line)| (first_line + offset, line))
    }

    /// Returns the number of raw lines in the body, including blank ones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the body has no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\u{feff}[Song]\r\n{\r\n  Name = \"Test\"\r\n}\r\n[SyncTrack]\n{\n\n  0 = B 120000\n}\n[Events]\n{\n  0 = E \"section Intro\"\n";

    #[test]
    fn extract_sections() {
        let lines = ChartLines::new(SOURCE);
        assert_eq!(
            lines.section_names().collect::<Vec<_>>(),
            vec!["Song", "SyncTrack", "Events"]
        );

        let song = lines
            .section("Song")
            .expect("must be terminated")
            .expect("must exist");
        assert_eq!(song.lines().collect::<Vec<_>>(), vec![(3, "Name = \"Test\"")]);

        let sync = lines
            .section("SyncTrack")
            .expect("must be terminated")
            .expect("must exist");
        assert_eq!(sync.len(), 2);
        assert_eq!(sync.lines().collect::<Vec<_>>(), vec![(8, "0 = B 120000")]);
    }

    #[test]
    fn missing_section_is_absent() {
        let lines = ChartLines::new(SOURCE);
        assert!(matches!(lines.section("ExpertSingle"), Ok(None)));
    }

    #[test]
    fn unterminated_section() {
        let lines = ChartLines::new(SOURCE);
        assert!(matches!(
            lines.section("Events"),
            Err(ChartError::UnterminatedSection { line: 10, .. })
        ));

        let lines = ChartLines::new("[Song]");
        assert!(matches!(
            lines.section("Song"),
            Err(ChartError::UnterminatedSection { line: 1, .. })
        ));
    }

    #[test]
    fn repeated_extraction() {
        let lines = ChartLines::new(SOURCE);
        let first = lines.section("SyncTrack").expect("must be terminated");
        let second = lines.section("Song").expect("must be terminated");
        let third = lines.section("SyncTrack").expect("must be terminated");
        assert_ne!(first, second);
        assert_eq!(first, third);
    }
}

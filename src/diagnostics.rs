//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts [`ChartError`](crate::chart::ChartError)s, which carry 1-based line numbers,
//! into `ariadne::Report`s labelling the whole offending line.
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(feature = "diagnostics")]
//! # {
//! use chart_rs::{
//!     chart::{config::default_config, parse_song},
//!     diagnostics::emit_chart_error,
//! };
//!
//! let source = "[SyncTrack]\n{\n  0 = B fast\n}\n";
//! if let Err(error) = parse_song(source, &default_config()) {
//!     emit_chart_error("test.chart", source, &error);
//! }
//! # }
//! ```

#[cfg(feature = "diagnostics")]
use ariadne::{Color, Label, Report, ReportKind, Source};

#[cfg(feature = "diagnostics")]
use crate::chart::ChartError;

/// Simple source container that holds the filename and source text.
///
/// # Usage Example
///
/// ```rust
/// use chart_rs::diagnostics::SimpleSource;
///
/// let source_text = "[Song]\n{\n  Name = \"test\"\n}\n";
/// let source = SimpleSource::new("test.chart", source_text);
///
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.line_range(3), 9..24);
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the byte range of the 1-based line, without its line break.
    ///
    /// A line past the end is mapped to the empty range at the end of the text.
    #[must_use]
    pub fn line_range(&self, line: usize) -> std::ops::Range<usize> {
        let mut start = 0;
        for (index, content) in self.text.split_inclusive('\n').enumerate() {
            if index + 1 == line {
                let content = content.trim_end_matches(['\n', '\r']);
                return start..start + content.len();
            }
            start += content.len();
        }
        self.text.len()..self.text.len()
    }
}

/// Trait for converting errors to `ariadne::Report`.
#[cfg(feature = "diagnostics")]
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: std::ops::Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for ChartError {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let range = self
            .line()
            .map_or(0..0, |line| src.line_range(line));
        let (title, label) = match self {
            Self::Format(error) => ("malformed line", error.content().kind.to_string()),
            Self::UnterminatedSection { section, .. } => {
                ("unterminated section", format!("[{section}] has no closing `}}`"))
            }
            other => ("chart error", other.to_string()),
        };
        build_report(src, ReportKind::Error, range, title, label, Color::Red)
    }
}

/// Convenience method: render a `ChartError` to the standard error.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete chart source text
/// * `error` - The error to display
#[cfg(feature = "diagnostics")]
pub fn emit_chart_error(name: &str, source: &str, error: &ChartError) {
    let simple = SimpleSource::new(name, source);
    let report = error.to_report(&simple);
    let _ = report.eprint((name.to_string(), Source::from(source)));
}

/// Collect `ariadne::Report` instances for a list of `ChartError` without printing.
///
/// This is useful in tests to verify diagnostics can be generated while keeping test output clean.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn collect_chart_reports<'a>(
    name: &'a str,
    source: &'a str,
    errors: impl IntoIterator<Item = &'a ChartError>,
) -> Vec<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    errors.into_iter().map(|e| e.to_report(&simple)).collect()
}

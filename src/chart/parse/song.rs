//! The coordinator reading a whole [`Song`].
//!
//! Every section is read as an independent unit over the shared [`ChartLines`]. The units run on
//! the `rayon` pool when [`ReadConfig::is_parallel`], and each unit returns its own value. The song
//! is assembled only after all the units completed, and the first error in order of the fields
//! is returned.

use super::track::{read_drums, read_ghl_instrument, read_standard_instrument};
use crate::chart::{
    Result,
    command::{GhlInstrument, StandardInstrument},
    config::ReadConfig,
    lex::ChartLines,
    model::{GlobalEvent, Metadata, Song, SyncTrack},
};

impl Song {
    /// Reads all the sections of the chart.
    ///
    /// # Errors
    ///
    /// Returns the first error of the units, in order of metadata, global events, sync track,
    /// drums, six-fret instruments and five-fret instruments.
    pub fn from_lines(lines: &ChartLines<'_>, config: &ReadConfig) -> Result<Self> {
        let ((metadata, global_events), (sync_track, (drums, (ghl, standard)))) = config.join(
            || {
                config.join(
                    || Metadata::from_lines(lines),
                    || GlobalEvent::read_all(lines),
                )
            },
            || {
                config.join(
                    || SyncTrack::from_lines(lines),
                    || {
                        config.join(
                            || read_drums(lines, config),
                            || {
                                config.join(
                                    || {
                                        config.map_units(&GhlInstrument::ALL, |&instrument| {
                                            read_ghl_instrument(lines, instrument, config)
                                        })
                                    },
                                    || {
                                        config.map_units(&StandardInstrument::ALL, |&instrument| {
                                            read_standard_instrument(lines, instrument, config)
                                        })
                                    },
                                )
                            },
                        )
                    },
                )
            },
        );

        let mut song = Self {
            metadata: metadata?,
            global_events: global_events?,
            sync_track: sync_track?,
            drums: drums?,
            ..Self::default()
        };
        for (slot, result) in song.ghl.iter_mut().zip(ghl) {
            *slot = result?;
        }
        for (slot, result) in song.standard.iter_mut().zip(standard) {
            *slot = result?;
        }
        tracing::debug!(
            resolution = song.resolution(),
            global_events = song.global_events.as_ref().map_or(0, Vec::len),
            instruments = song.present_instruments().count(),
            "song read"
        );
        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartError, config::default_config};

    #[test]
    fn first_error_wins() {
        // both sections are broken, the sync track comes first
        let source = "[SyncTrack]\n{\n  0 = B x\n}\n[ExpertDrums]\n{\n  0 = N y 0\n}\n";
        for config in [default_config(), default_config().parallel(false)] {
            let Err(ChartError::Format(error)) = Song::from_lines(&ChartLines::new(source), &config)
            else {
                panic!("must fail");
            };
            assert_eq!(error.line(), 3);
        }
    }

    #[test]
    fn empty_source() {
        let song = Song::from_lines(&ChartLines::new(""), &default_config()).expect("empty is valid");
        assert_eq!(song, Song::default());
    }
}

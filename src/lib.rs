//! The chart(.chart) format reader and writer for rhythm games.
//!
//! A chart file describes a song with its metadata, its tempo and time signature changes, its global
//! events such as sections and lyrics, and the notes of each instrument for each difficulty.
//!
//! - [`chart`] reads a chart file into [`chart::model::Song`], and writes it back.
//! - [`iter`] provides lazy iterators combining many ordered sequences, such as the local events of
//!   all the difficulties.
//! - [`diagnostics`] renders read errors with `ariadne`.
//!
//! # Example
//!
//! ```
//! use chart_rs::chart::prelude::*;
//!
//! let source = r#"[Song]
//! {
//!   Resolution = 192
//! }
//! [SyncTrack]
//! {
//!   0 = TS 4
//!   0 = B 120000
//! }
//! [ExpertSingle]
//! {
//!   0 = N 0 0
//!   0 = N 5 0
//!   192 = N 7 0
//! }
//! "#;
//! let song = parse_song(source, &default_config()).expect("a valid chart");
//! let track = song
//!     .standard(StandardInstrument::LeadGuitar)
//!     .and_then(|guitar| guitar.track(Difficulty::Expert))
//!     .expect("has the expert track");
//! assert_eq!(track.chords.len(), 2);
//! assert_eq!(parse_song(&song.unparse(), &default_config()).ok(), Some(song));
//! ```

pub mod chart;
pub mod diagnostics;
pub mod iter;

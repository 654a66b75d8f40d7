use pretty_assertions::assert_eq;

use chart_rs::chart::prelude::*;

fn roundtrip(source: &str) {
    let song = parse_song(source, &default_config()).expect("must be parsed");
    let written = song.unparse();
    let reparsed = parse_song(&written, &default_config()).expect("written chart must be parsed");
    assert_eq!(reparsed, song);
    // writing is stable after the first pass
    assert_eq!(reparsed.unparse(), written);
}

#[test]
fn test_roundtrip_full_band() {
    roundtrip(include_str!("files/full_band.chart"));
}

#[test]
fn test_roundtrip_six_fret() {
    roundtrip(include_str!("files/six_fret.chart"));
}

#[test]
fn test_section_order() {
    let song = parse_song(include_str!("files/full_band.chart"), &default_config())
        .expect("must be parsed");
    let written = song.unparse();
    let lines = ChartLines::new(&written);
    assert_eq!(
        lines.section_names().collect::<Vec<_>>(),
        vec![
            "Song",
            "SyncTrack",
            "Events",
            "ExpertDrums",
            "ExpertSingle",
            "HardSingle",
            "ExpertDoubleBass",
        ]
    );
}

#[test]
fn test_write_built_song() {
    let mut song = Song::default();
    let mut sync_track = SyncTrack::default();
    sync_track.set_beats_per_minute(TickPosition(0), 120.0);
    song.sync_track = Some(sync_track);

    let mut track = Track::<GhlNote>::default();
    let mut chord = GhlChord::new(TickPosition(192));
    chord.insert(GhlNote::new(GhlLane::Black3, 48));
    chord.insert(GhlNote::new(GhlLane::White1, 0));
    chord.modifiers = ChordModifiers::FORCED | ChordModifiers::TAP;
    track.chords.insert(chord.position, chord);
    track
        .local_events
        .push(LocalEvent::new(TickPosition(192), LocalEventType::Solo, None));
    *song.ghl_mut(GhlInstrument::Bass) =
        Instrument::from_tracks([None, None, Some(track), None]);

    assert_eq!(
        song.unparse(),
        "[SyncTrack]\n{\n  0 = B 120000\n}\n[HardGHLBass]\n{\n  192 = N 8 48\n  192 = N 0 0\n  192 = N 5 0\n  192 = N 6 0\n  192 = E solo\n}\n"
    );
    let reparsed = parse_song(&song.unparse(), &default_config()).expect("must be parsed");
    assert_eq!(reparsed, song);
}

/// A chart written in the order the writer produces.
const CANONICAL: &str = r#"[Song]
{
  Name = "Canonical"
  Artist = "Test Artist"
  Charter = "Test Charter"
  Year = ", 2024"
  Offset = 0.5
  Resolution = 192
  Difficulty = 4
  PreviewStart = 12.5
  Genre = "rock"
  MusicStream = "song.ogg"
  GuitarStream = "guitar.ogg"
  Player2 = bass
  Frets = "12"
}
[SyncTrack]
{
  0 = TS 4
  0 = A 0
  0 = B 120000
  768 = B 140500
  1536 = TS 7 3
  1536 = A 3250
  1536 = B 90000
  2304 = A 5000
}
[Events]
{
  0 = E "section Intro"
  384 = E "phrase_start"
  400 = E "lyric Hel-"
  560 = E "phrase_end"
  3072 = E "end"
}
[ExpertDrums]
{
  0 = N 0 0
  0 = N 4 0
  0 = N 67 0
  192 = N 1 0
  192 = N 5 0
  192 = N 68 0
  384 = S 2 192
}
[ExpertGHLGuitar]
{
  0 = N 0 0
  0 = N 3 0
  480 = N 8 240
  480 = N 5 0
  960 = N 7 0
  960 = N 6 0
}
[ExpertSingle]
{
  0 = N 0 0
  0 = N 1 0
  192 = N 2 96
  192 = N 5 0
  384 = N 7 0
  384 = S 2 384
  384 = E solo
  576 = N 4 0
  576 = N 6 0
  768 = E soloend
}
[HardSingle]
{
  0 = N 0 0
}
"#;

/// The body lines of the section, as written in the source.
fn body(source: &str, name: &str) -> Vec<String> {
    ChartLines::new(source)
        .section(name)
        .expect("must be terminated")
        .expect("section exists")
        .lines()
        .map(|(_, line)| line.to_string())
        .collect()
}

#[test]
fn test_canonical_file_bytes() {
    let song = parse_song(CANONICAL, &default_config()).expect("must be parsed");
    assert_eq!(song.unparse(), CANONICAL);
}

#[test]
fn test_metadata_body_bytes() {
    let metadata = Metadata::from_lines(&ChartLines::new(CANONICAL))
        .expect("must be parsed")
        .expect("section exists");
    assert_eq!(metadata.unparse_lines(), body(CANONICAL, "Song"));
}

#[test]
fn test_sync_track_body_bytes() {
    let sync_track = SyncTrack::from_lines(&ChartLines::new(CANONICAL))
        .expect("must be parsed")
        .expect("section exists");
    assert_eq!(sync_track.unparse_lines(), body(CANONICAL, "SyncTrack"));
}

#[test]
fn test_events_body_bytes() {
    let events = GlobalEvent::read_all(&ChartLines::new(CANONICAL))
        .expect("must be parsed")
        .expect("section exists");
    assert_eq!(unparse_global_events(&events), body(CANONICAL, "Events"));
}

#[test]
fn test_track_body_bytes() {
    let lines = ChartLines::new(CANONICAL);
    let config = default_config();

    let drums = read_drums_track(&lines, Difficulty::Expert, &config)
        .expect("must be parsed")
        .expect("section exists");
    assert_eq!(drums.unparse_lines(), body(CANONICAL, "ExpertDrums"));

    let ghl = read_ghl_track(&lines, GhlInstrument::Guitar, Difficulty::Expert, &config)
        .expect("must be parsed")
        .expect("section exists");
    assert_eq!(ghl.unparse_lines(), body(CANONICAL, "ExpertGHLGuitar"));

    let single = read_standard_track(
        &lines,
        StandardInstrument::LeadGuitar,
        Difficulty::Expert,
        &config,
    )
    .expect("must be parsed")
    .expect("section exists");
    assert_eq!(single.unparse_lines(), body(CANONICAL, "ExpertSingle"));
}

#[test]
fn test_anchor_before_tempo_is_kept() {
    let source = "[SyncTrack]\n{\n  0 = TS 4\n  0 = B 120000\n  1536 = A 3250\n  1536 = B 90000\n}\n";
    let sync_track = SyncTrack::from_lines(&ChartLines::new(source))
        .expect("must be parsed")
        .expect("section exists");
    assert_eq!(sync_track.unparse_lines(), body(source, "SyncTrack"));
}

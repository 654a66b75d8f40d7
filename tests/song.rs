use pretty_assertions::assert_eq;

use chart_rs::chart::prelude::*;

const FULL_BAND: &str = include_str!("files/full_band.chart");

#[test]
fn test_parallel_and_sequential_agree() {
    let parallel = parse_song(FULL_BAND, &default_config().parallel(true)).expect("must be parsed");
    let sequential =
        parse_song(FULL_BAND, &default_config().parallel(false)).expect("must be parsed");
    assert_eq!(parallel, sequential);
}

#[test]
fn test_crlf_and_bom() {
    let crlf = format!("\u{feff}{}", FULL_BAND.replace('\n', "\r\n"));
    let song = parse_song(&crlf, &default_config()).expect("must be parsed");
    assert_eq!(song, parse_song(FULL_BAND, &default_config()).expect("must be parsed"));
}

#[test]
fn test_first_error_in_section_order() {
    // both the metadata and the track are broken, and the metadata is reported
    let source = "[ExpertSingle]\n{\n  0 = N x 0\n}\n[Song]\n{\n  Resolution = fast\n}\n";
    for parallel in [true, false] {
        let error = parse_song(source, &default_config().parallel(parallel))
            .expect_err("must fail");
        assert_eq!(error.line(), Some(7));
    }
}

#[test]
fn test_unterminated_track() {
    let source = "[Song]\n{\n  Resolution = 192\n}\n[HardDrums]\n{\n  0 = N 0 0\n";
    let error = parse_song(source, &default_config()).expect_err("must fail");
    assert!(matches!(
        error,
        ChartError::UnterminatedSection { ref section, line: 5 } if section == "HardDrums"
    ));
}

#[test]
fn test_no_sections() {
    let song = parse_song("", &default_config()).expect("must be parsed");
    assert_eq!(song, Song::default());
    assert_eq!(song.resolution(), 192);
    assert_eq!(song.present_instruments().count(), 0);
}

#[test]
fn test_unknown_sections_are_ignored() {
    let source = "[ExpertVocals]\n{\n  0 = N 0 0\n}\n[Song]\n{\n  Resolution = 480\n}\n";
    let song = parse_song(source, &default_config()).expect("must be parsed");
    assert_eq!(song.resolution(), 480);
    assert_eq!(song.present_instruments().count(), 0);
}

#[test]
fn test_lyrics() {
    let song = parse_song(FULL_BAND, &default_config()).expect("must be parsed");
    let events = song.global_events.as_deref().expect("has the Events section");
    let lyrics = phrases(events);
    assert_eq!(
        lyrics,
        vec![Phrase {
            start: TickPosition(384),
            end: Some(TickPosition(560)),
            syllables: vec![
                Syllable {
                    position: TickPosition(400),
                    text: "Hel-".into(),
                },
                Syllable {
                    position: TickPosition(480),
                    text: "lo".into(),
                },
            ],
        }]
    );
    assert_eq!(lyrics[0].text(), "Hello");

    let read = read_phrases(&ChartLines::new(FULL_BAND)).expect("must be parsed");
    assert_eq!(read, Some(lyrics));
}

//! Test diagnostics module functionality

#![cfg(feature = "diagnostics")]

use chart_rs::{
    chart::{config::default_config, parse_song},
    diagnostics::{SimpleSource, collect_chart_reports, emit_chart_error},
};

#[test]
fn test_simple_source_creation() {
    let source_text = "[Song]\n{\n  Name = \"Test Song\"\n}\n";
    let source = SimpleSource::new("test.chart", source_text);

    assert_eq!(source.text(), source_text);
    assert_eq!(source.name(), "test.chart");
    assert_eq!(&source_text[source.line_range(3)], "  Name = \"Test Song\"");
}

#[test]
fn test_emit_format_error() {
    let source = "[SyncTrack]\n{\n  0 = B fast\n}\n";
    let error = parse_song(source, &default_config()).expect_err("must fail");
    assert_eq!(error.line(), Some(3));

    // Note: here we just verify the function can be called normally
    emit_chart_error("test.chart", source, &error);
}

#[test]
fn test_collect_reports() {
    let broken_track = "[ExpertSingle]\n{\n  0 = N 0\n}\n";
    let unterminated = "[Song]\n{\n  Name = \"Test\"\n";
    let errors: Vec<_> = [broken_track, unterminated]
        .into_iter()
        .map(|source| parse_song(source, &default_config()).expect_err("must fail"))
        .collect();

    let reports = collect_chart_reports("test.chart", broken_track, &errors);
    assert_eq!(reports.len(), 2);

    let mut rendered = Vec::new();
    reports[0]
        .write(
            (
                "test.chart".to_string(),
                ariadne::Source::from(broken_track),
            ),
            &mut rendered,
        )
        .expect("writes into the buffer");
    let rendered = String::from_utf8(rendered).expect("utf-8 output");
    assert!(rendered.contains("malformed line"));
}

#[test]
fn test_no_errors() {
    let source = "[Song]\n{\n}\n";
    assert!(collect_chart_reports("test.chart", source, &[]).is_empty());
}

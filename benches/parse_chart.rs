//! Benchmark for `.chart` file parsing and writing.

use std::fmt::Write;

use chart_rs::chart::{config::default_config, parse_song};
use criterion::{Criterion, Throughput};

struct ChartFile {
    name: String,
    source: String,
}

fn scan_chart_files() -> Vec<ChartFile> {
    let dir = "tests/files";

    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.to_string_lossy().ends_with(".chart"))
        .filter_map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(String::from)?;

            let source = std::fs::read_to_string(&path).expect("Failed to load test file");

            Some(ChartFile { name, source })
        })
        .collect()
}

/// Generates a chart with every five-fret track and the drums filled with `chords` chords.
fn synthetic_chart(chords: u32) -> ChartFile {
    let mut source = String::from("[Song]\n{\n  Name = \"Synthetic\"\n  Resolution = 192\n}\n");
    source.push_str("[SyncTrack]\n{\n  0 = TS 4\n  0 = B 120000\n}\n");
    let sections = ["Single", "DoubleGuitar", "DoubleBass", "DoubleRhythm", "Keyboard"]
        .into_iter()
        .flat_map(|part| {
            ["Easy", "Medium", "Hard", "Expert"]
                .into_iter()
                .map(move |difficulty| (format!("{difficulty}{part}"), 5))
        })
        .chain([("ExpertDrums".to_string(), 6)]);
    for (section, lanes) in sections {
        writeln!(source, "[{section}]\n{{").expect("writes into a string");
        for chord in 0..chords {
            let position = chord * 96;
            let lane = chord % lanes;
            writeln!(source, "  {position} = N {lane} 0").expect("writes into a string");
            writeln!(source, "  {position} = N {} 48", (lane + 2) % lanes)
                .expect("writes into a string");
            if chord % 64 == 0 {
                writeln!(source, "  {position} = S 2 768").expect("writes into a string");
            }
        }
        source.push_str("}\n");
    }
    ChartFile {
        name: format!("synthetic_{chords}"),
        source,
    }
}

fn bench_parse_chart(c: &mut Criterion) {
    let mut files = scan_chart_files();
    files.push(synthetic_chart(4000));
    let mut group = c.benchmark_group("parse_chart");

    for file in files.iter() {
        group.throughput(Throughput::Bytes(file.source.len() as u64));
        for parallel in [true, false] {
            let config = default_config().parallel(parallel);
            let mode = if parallel { "parallel" } else { "sequential" };
            group.bench_function(format!("{}/{mode}", file.name), |b| {
                b.iter(|| {
                    parse_song(
                        std::hint::black_box(&file.source),
                        std::hint::black_box(&config),
                    )
                });
            });
        }
    }

    group.finish();
}

fn bench_unparse_chart(c: &mut Criterion) {
    let file = synthetic_chart(4000);
    let song = parse_song(&file.source, &default_config()).expect("Failed to parse chart");
    let mut group = c.benchmark_group("unparse_chart");
    group.throughput(Throughput::Bytes(file.source.len() as u64));
    group.bench_function(&file.name, |b| {
        b.iter(|| std::hint::black_box(&song).unparse());
    });
    group.finish();
}

fn main() {
    let mut criterion = Criterion::default();
    bench_parse_chart(&mut criterion);
    bench_unparse_chart(&mut criterion);
}

//! File-driven tests for the run loop.

use std::fs::File;
use std::io::{BufReader, Write};

use add_mag::{RunConfig, run, run_with};
use tempfile::NamedTempFile;

/// Helper: write `contents` to a temp file and run the filter over it.
fn run_file(contents: &str) -> (String, usize) {
    run_file_with(RunConfig::default(), contents)
}

fn run_file_with(config: RunConfig, contents: &str) -> (String, usize) {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(contents.as_bytes()).unwrap();
    input.flush().unwrap();

    let reader = BufReader::new(File::open(input.path()).unwrap());
    let mut output = Vec::new();
    let count = run_with(config, reader, &mut output).unwrap();
    (String::from_utf8(output).unwrap(), count)
}

#[test]
fn multi_record_file() {
    let contents = "\
1.0 2.0 100.0 5.0 50.0 1.5
10.5 20.25 1000.0 12.0 99.9 2.0
1.0 2.0 0.0 5.0 50.0 1.5
";
    let (output, count) = run_file(contents);
    assert_eq!(count, 3);
    assert_eq!(
        output,
        "    1.00    2.00       100.00      5.0     50.00  1.50     -5.00\n   10.50   20.25      1000.00     12.0     99.90  2.00     -7.50\n    1.00    2.00         0.00      5.0     50.00  1.50     -0.00\n"
    );
}

#[test]
fn file_with_trailing_partial_record() {
    let contents = "3.0 4.0 10.0 1.0 2.0 1.0\n9.9 8.8 7.7\n";
    let (output, count) = run_file(contents);
    assert_eq!(count, 1);
    assert_eq!(
        output,
        "    3.00    4.00        10.00      1.0      2.00  1.00     -2.50\n"
    );
}

#[test]
fn empty_file() {
    let (output, count) = run_file("");
    assert_eq!(output, "");
    assert_eq!(count, 0);
}

#[test]
fn file_with_header_skipped() {
    let config = RunConfig { skip_lines: 1 };
    let contents = "x y flux area flux_max elongation\n1.0 2.0 100.0 5.0 50.0 1.5\n";
    let (output, count) = run_file_with(config, contents);
    assert_eq!(count, 1);
    assert_eq!(
        output,
        "    1.00    2.00       100.00      5.0     50.00  1.50     -5.00\n"
    );
}

#[test]
fn header_shorter_than_skip_count() {
    let config = RunConfig { skip_lines: 5 };
    let (output, count) = run_file_with(config, "just one header line\n");
    assert_eq!(output, "");
    assert_eq!(count, 0);
}

#[test]
fn run_matches_run_with_default() {
    let contents = "1.0 2.0 100.0 5.0 50.0 1.5\n";

    let mut input = NamedTempFile::new().unwrap();
    input.write_all(contents.as_bytes()).unwrap();
    input.flush().unwrap();

    let reader = BufReader::new(File::open(input.path()).unwrap());
    let mut plain = Vec::new();
    let plain_count = run(reader, &mut plain).unwrap();

    let (with_output, with_count) = run_file_with(RunConfig::default(), contents);
    assert_eq!(plain_count, with_count);
    assert_eq!(String::from_utf8(plain).unwrap(), with_output);
}

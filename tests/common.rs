use std::path::{Path, PathBuf};

use regex::Regex;

pub fn fixture_path<P: AsRef<Path>>(path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}

/// Read a test fixture from a path relative to CARGO_MANIFEST_DIR
pub fn read_fixture<P: AsRef<Path>>(path: P) -> String {
    std::fs::read_to_string(fixture_path(path)).expect("error reading file contents")
}

pub struct Case {
    pub line: usize,
    pub input: Vec<u32>,
    pub expected: Vec<u32>,
}

pub struct Record {
    pub line: usize,
    pub input: String,
    pub expected: String,
}

/// Split `<input> ; <expected>` lines, skipping blank lines and `#` comments.
pub fn read_records<P: AsRef<Path>>(path: P) -> Vec<Record> {
    read_fixture(path)
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_without_comment = line.split('#').next().unwrap_or("");
            let (input, expected) = line_without_comment.split_once(';')?;
            Some(Record {
                line: index + 1,
                input: input.trim().to_string(),
                expected: expected.trim().to_string(),
            })
        })
        .collect()
}

/// Parse a field of space separated hexadecimal code points.
pub fn parse_code_points(field: &str) -> Vec<u32> {
    let hex = Regex::new(r"\b[0-9A-Fa-f]{4,6}\b").unwrap();
    hex.find_iter(field)
        .map(|m| u32::from_str_radix(m.as_str(), 16).unwrap())
        .collect()
}

/// Parse `<input> ; <expected>` lines of hexadecimal code points.
pub fn read_cases<P: AsRef<Path>>(path: P) -> Vec<Case> {
    read_records(path)
        .into_iter()
        .map(|record| Case {
            line: record.line,
            input: parse_code_points(&record.input),
            expected: parse_code_points(&record.expected),
        })
        .collect()
}

pub fn to_hex(code_points: &[u32]) -> String {
    code_points
        .iter()
        .map(|code_point| format!("{:04X}", code_point))
        .collect::<Vec<_>>()
        .join(" ")
}
